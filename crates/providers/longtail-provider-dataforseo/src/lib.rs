//! Longtail DataForSEO Provider
//!
//! Typed client for the DataForSEO v3 API: account data plus the Labs
//! keyword suggestion and overview endpoints, with optional best-effort
//! response caching through any `KeyValueStore`.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-exports
pub use longtail_core;

pub mod cache;
pub mod client;
pub mod filters;
pub mod types;

// Re-export the client surface
pub use cache::{ResponseCache, DEFAULT_CACHE_TTL};
pub use client::{DataForSeoClient, KeywordPage, KeywordSuggestionsRequest, DEFAULT_PAGE_LIMIT};
pub use filters::KeywordFilters;
pub use types::{ApiResponse, TaskEnvelope, UserData};
