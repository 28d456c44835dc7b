//! Suggestion provider trait

use crate::Result;
use async_trait::async_trait;

/// A source of autocomplete suggestions for a query.
///
/// The expansion engine treats providers as opaque: any implementation that
/// answers `suggest` is interchangeable. One call covers exactly one variant
/// query; the engine never retries and maps every error into a per-variant
/// warning.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// Fetch suggestions for one query
    ///
    /// `location_code` and `language_code` come from the seed and pass
    /// through untouched. An empty result list is a valid answer.
    async fn suggest(
        &self,
        query: &str,
        location_code: &str,
        language_code: &str,
    ) -> Result<Vec<String>>;
}
