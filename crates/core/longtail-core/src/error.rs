//! Error types for Longtail core

use thiserror::Error;

/// Main error type for Longtail operations
#[derive(Debug, Error)]
pub enum LongtailError {
    /// Suggestion provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Vendor API rejected the request or the task inside it
    #[error("API error ({status_code}): {message}")]
    Api {
        /// Vendor status code (DataForSEO task codes, HTTP status for others)
        status_code: u32,
        /// Vendor status message
        message: String,
    },

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key-value storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication/credentials error
    #[error("Auth error: {0}")]
    Auth(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenient Result type using LongtailError
pub type Result<T> = std::result::Result<T, LongtailError>;

impl LongtailError {
    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        LongtailError::Provider(msg.into())
    }

    /// Create a vendor API error
    pub fn api(status_code: u32, message: impl Into<String>) -> Self {
        LongtailError::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        LongtailError::Storage(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        LongtailError::Config(msg.into())
    }

    /// Create an auth error
    pub fn auth(msg: impl Into<String>) -> Self {
        LongtailError::Auth(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        LongtailError::Validation(msg.into())
    }
}
