//! Google autocomplete suggestion provider for Longtail

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use longtail_core::{LongtailError, Result, SuggestionProvider};
use reqwest::Client;
use std::sync::OnceLock;

const DEFAULT_BASE_URL: &str = "https://suggestqueries.google.com/complete/search";

/// Shared HTTP client for connection pooling
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or initialize the shared HTTP client
fn get_http_client() -> Client {
    HTTP_CLIENT
        .get_or_init(|| {
            Client::builder()
                .pool_max_idle_per_host(10)
                .pool_idle_timeout(std::time::Duration::from_secs(300))
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client")
        })
        .clone()
}

/// Client for the public Google suggest endpoint.
///
/// Queries `complete/search` with `output=chrome`, which answers with a JSON
/// array whose second element holds the suggestions. A response that parses
/// but lacks that shape counts as "no suggestions", matching how the
/// endpoint behaves for exotic queries; transport failures and unparseable
/// bodies surface as provider errors.
pub struct GoogleSuggestClient {
    client: Client,
    base_url: String,
}

impl GoogleSuggestClient {
    /// Create a client against the public endpoint with the shared pool
    pub fn new() -> Self {
        Self {
            client: get_http_client(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: get_http_client(),
            base_url: base_url.into(),
        }
    }
}

impl Default for GoogleSuggestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuggestionProvider for GoogleSuggestClient {
    fn name(&self) -> &str {
        "google-suggest"
    }

    async fn suggest(
        &self,
        query: &str,
        location_code: &str,
        language_code: &str,
    ) -> Result<Vec<String>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("gl", location_code),
                ("hl", language_code),
                ("output", "chrome"),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| LongtailError::provider(format!("Suggest request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LongtailError::provider(format!(
                "Suggest endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(|e| {
            LongtailError::provider(format!("Failed to read suggest response: {}", e))
        })?;

        let payload: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| LongtailError::provider(format!("Malformed suggest response: {}", e)))?;

        // The endpoint answers [query, [suggestions], ...]; any other shape
        // counts as zero suggestions
        let suggestions = match payload.get(1).and_then(|value| value.as_array()) {
            Some(entries) => entries
                .iter()
                .filter_map(|entry| entry.as_str())
                .map(|s| s.to_string())
                .collect(),
            None => Vec::new(),
        };

        tracing::debug!(query = %query, count = suggestions.len(), "Fetched suggestions");

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_parses_suggestion_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("gl", "us"))
            .and(query_param("hl", "en"))
            .and(query_param("output", "chrome"))
            .and(query_param("q", "shoes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                "shoes",
                ["shoes sale", "shoes online", "shoes for men"],
                ["", "", ""],
                [],
                {"google:suggesttype": ["QUERY", "QUERY", "QUERY"]}
            ])))
            .mount(&server)
            .await;

        let client = GoogleSuggestClient::with_base_url(server.uri());
        let suggestions = client.suggest("shoes", "us", "en").await.unwrap();

        assert_eq!(
            suggestions,
            vec!["shoes sale", "shoes online", "shoes for men"]
        );
    }

    #[tokio::test]
    async fn test_non_string_entries_are_skipped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!(["q", ["a shoes", 42, "b shoes"]])),
            )
            .mount(&server)
            .await;

        let client = GoogleSuggestClient::with_base_url(server.uri());
        let suggestions = client.suggest("shoes", "us", "en").await.unwrap();

        assert_eq!(suggestions, vec!["a shoes", "b shoes"]);
    }

    #[tokio::test]
    async fn test_unexpected_shape_means_no_suggestions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "nope"})))
            .mount(&server)
            .await;

        let client = GoogleSuggestClient::with_base_url(server.uri());
        let suggestions = client.suggest("shoes", "us", "en").await.unwrap();

        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = GoogleSuggestClient::with_base_url(server.uri());
        let err = client.suggest("shoes", "us", "en").await.unwrap_err();

        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(")]}'garbage"))
            .mount(&server)
            .await;

        let client = GoogleSuggestClient::with_base_url(server.uri());
        let err = client.suggest("shoes", "us", "en").await.unwrap_err();

        assert!(err.to_string().contains("Malformed suggest response"));
    }

    #[test]
    fn test_provider_name() {
        let client = GoogleSuggestClient::new();
        assert_eq!(client.name(), "google-suggest");
    }
}
