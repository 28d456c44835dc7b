//! Core type definitions for Longtail

pub mod expansion;
pub mod keyword;
pub mod metrics;

// Re-export commonly used types
pub use expansion::*;
pub use keyword::*;
pub use metrics::*;
