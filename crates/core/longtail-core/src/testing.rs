//! Testing utilities and fixture providers

use crate::provider::SuggestionProvider;
use crate::types::Seed;
use crate::{LongtailError, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// Create a test seed for a keyword (US location, English)
pub fn create_test_seed(keyword: &str) -> Seed {
    Seed::new(keyword, "us", "en")
}

/// Provider answering from a canned query-to-suggestions map.
///
/// Queries without a canned entry answer with an empty list, which is how a
/// real suggest endpoint behaves for exotic variants.
#[derive(Debug, Clone, Default)]
pub struct StaticSuggestionProvider {
    responses: HashMap<String, Vec<String>>,
}

impl StaticSuggestionProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned answer for a query
    pub fn with_response(mut self, query: &str, suggestions: &[&str]) -> Self {
        self.responses.insert(
            query.to_string(),
            suggestions.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl SuggestionProvider for StaticSuggestionProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn suggest(
        &self,
        query: &str,
        _location_code: &str,
        _language_code: &str,
    ) -> Result<Vec<String>> {
        Ok(self.responses.get(query).cloned().unwrap_or_default())
    }
}

/// Provider failing every call with the same message.
#[derive(Debug, Clone)]
pub struct FailingSuggestionProvider {
    message: String,
}

impl FailingSuggestionProvider {
    /// Create a provider failing with `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingSuggestionProvider {
    fn default() -> Self {
        Self::new("provider unavailable")
    }
}

#[async_trait]
impl SuggestionProvider for FailingSuggestionProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn suggest(
        &self,
        _query: &str,
        _location_code: &str,
        _language_code: &str,
    ) -> Result<Vec<String>> {
        Err(LongtailError::provider(self.message.clone()))
    }
}
