//! DataForSEO v3 API client
//!
//! Wraps the endpoints the keyword tools rely on: account data plus the
//! Labs keyword suggestion and overview calls. Labs requests go out as
//! single-task POST arrays and come back in the vendor's two-level
//! envelope; an optional response cache answers repeated requests.

use crate::cache::ResponseCache;
use crate::filters::KeywordFilters;
use crate::types::{ApiResponse, KeywordListing, TaskEnvelope, UserData, TASK_STATUS_OK};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use longtail_core::locales::ANY_LANGUAGE_CODE;
use longtail_core::types::KeywordProfile;
use longtail_core::{LongtailError, Result, Settings};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{debug, warn};

const LIVE_BASE_URL: &str = "https://api.dataforseo.com/v3";
const SANDBOX_BASE_URL: &str = "https://sandbox.dataforseo.com/v3";

/// Default page size for keyword suggestion queries
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Shared HTTP client for connection pooling
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or initialize the shared HTTP client
fn get_http_client() -> Client {
    HTTP_CLIENT
        .get_or_init(|| {
            Client::builder()
                .pool_max_idle_per_host(10)
                .pool_idle_timeout(std::time::Duration::from_secs(300))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to create HTTP client")
        })
        .clone()
}

/// Parameters for a keyword suggestions query
#[derive(Debug, Clone)]
pub struct KeywordSuggestionsRequest {
    /// Seed keyword the suggestions must contain.
    pub keyword: String,

    /// DataForSEO location code.
    pub location_code: u32,

    /// Language code, or `None` for any language.
    pub language_code: Option<String>,

    /// Metric filters applied vendor-side.
    pub filters: KeywordFilters,

    /// Page size.
    pub limit: u32,

    /// Zero-based item offset for pagination.
    pub offset: u32,
}

impl KeywordSuggestionsRequest {
    /// Request the first page of suggestions for a seed keyword
    pub fn new(keyword: impl Into<String>, location_code: u32) -> Self {
        Self {
            keyword: keyword.into(),
            location_code,
            language_code: None,
            filters: KeywordFilters::default(),
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }

    /// Restrict results to one language; `"any"` lifts the restriction
    pub fn with_language(mut self, language_code: impl Into<String>) -> Self {
        let code = language_code.into();
        self.language_code = (code != ANY_LANGUAGE_CODE).then_some(code);
        self
    }

    /// Apply vendor-side metric filters
    pub fn with_filters(mut self, filters: KeywordFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Request a specific page
    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

/// One page of keyword profiles plus the total match count
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordPage {
    /// Total matching keywords across all pages.
    pub total_count: u64,

    /// Profiles in this page, ordered by search volume descending.
    pub items: Vec<KeywordProfile>,
}

#[derive(Serialize)]
struct SuggestionsTaskBody<'a> {
    keyword: &'a str,
    location_code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<serde_json::Value>,
    limit: u32,
    offset: u32,
    order_by: [&'a str; 1],
}

#[derive(Serialize)]
struct OverviewTaskBody<'a> {
    keywords: &'a [String],
    location_code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
    include_clickstream_data: bool,
}

/// Client for the DataForSEO v3 REST API.
///
/// Credentials travel as basic auth on every call. In sandbox mode the
/// client talks to the vendor's free sandbox host and bypasses the
/// response cache entirely.
pub struct DataForSeoClient {
    client: Client,
    base_url: String,
    auth_header: String,
    sandbox: bool,
    cache: Option<ResponseCache>,
}

impl DataForSeoClient {
    /// Create a client for the live or sandbox API
    pub fn new(username: impl Into<String>, password: impl Into<String>, sandbox: bool) -> Self {
        let base_url = if sandbox {
            SANDBOX_BASE_URL
        } else {
            LIVE_BASE_URL
        };
        Self::build(username.into(), password.into(), sandbox, base_url.to_string())
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(
        username: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self::build(username.into(), password.into(), false, base_url.into())
    }

    /// Create a client from stored settings, honoring the sandbox switch.
    ///
    /// Fails with an `Auth` error when no credentials are configured. A
    /// response cache is not attached here; callers that want one pair
    /// `Settings::caching_enabled` with [`DataForSeoClient::with_cache`].
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let (username, password) = settings.dataforseo_credentials()?;
        Ok(Self::new(username, password, settings.dataforseo_sandbox))
    }

    /// Mark the client as sandboxed without changing its base URL
    pub fn sandboxed(mut self) -> Self {
        self.sandbox = true;
        self
    }

    /// Attach a response cache for Labs calls
    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// True when the client targets the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    fn build(username: String, password: String, sandbox: bool, base_url: String) -> Self {
        let credentials = BASE64.encode(format!("{}:{}", username, password));
        Self {
            client: get_http_client(),
            base_url,
            auth_header: format!("Basic {}", credentials),
            sandbox,
            cache: None,
        }
    }

    /// Fetch the account snapshot from `/appendix/user_data`
    pub async fn user_data(&self) -> Result<UserData> {
        debug!("Fetching DataForSEO account data");
        let envelope: ApiResponse<UserData> = self.get_envelope("appendix/user_data").await?;
        let task = first_task(envelope)?;

        task.into_result()
            .into_iter()
            .next()
            .ok_or_else(|| LongtailError::provider("User data response was empty"))
    }

    /// Current account balance in USD, when the vendor reports one.
    ///
    /// Any missing piece of the response reads as `None` rather than an
    /// error; transport and HTTP failures still surface.
    pub async fn account_balance(&self) -> Result<Option<f64>> {
        let envelope: ApiResponse<UserData> = self.get_envelope("appendix/user_data").await?;

        Ok(envelope
            .tasks
            .into_iter()
            .next()
            .and_then(|task| task.into_result().into_iter().next())
            .and_then(|data| data.money)
            .and_then(|money| money.balance))
    }

    /// One page of keyword suggestions containing the seed keyword,
    /// ordered by search volume descending
    pub async fn keyword_suggestions(
        &self,
        request: &KeywordSuggestionsRequest,
    ) -> Result<KeywordPage> {
        debug!(
            keyword = %request.keyword,
            location_code = request.location_code,
            limit = request.limit,
            offset = request.offset,
            "Fetching keyword suggestions"
        );

        let filters = request.filters.to_filter_expression()?;
        let body = serde_json::json!([SuggestionsTaskBody {
            keyword: &request.keyword,
            location_code: request.location_code,
            language_code: request.language_code.as_deref(),
            filters,
            limit: request.limit,
            offset: request.offset,
            order_by: ["keyword_info.search_volume,desc"],
        }]);

        let envelope: ApiResponse<KeywordListing> = self
            .post_envelope(
                "dataforseo_labs/google/keyword_suggestions/live",
                "keyword_suggestions",
                &body,
            )
            .await?;

        let task = first_task(envelope)?;
        let listing = task.into_result().into_iter().next();

        Ok(match listing {
            Some(listing) => KeywordPage {
                total_count: listing.total_count,
                items: listing
                    .items
                    .unwrap_or_default()
                    .into_iter()
                    .map(KeywordProfile::from)
                    .collect(),
            },
            None => KeywordPage::default(),
        })
    }

    /// Full metric profiles for a set of keywords in one call.
    ///
    /// With `include_clickstream` the profiles carry audience demographics
    /// where the vendor has clickstream coverage.
    pub async fn keyword_overview(
        &self,
        keywords: &[String],
        location_code: u32,
        language_code: Option<&str>,
        include_clickstream: bool,
    ) -> Result<Vec<KeywordProfile>> {
        debug!(
            keywords = keywords.len(),
            location_code, include_clickstream, "Fetching keyword overview"
        );

        let body = serde_json::json!([OverviewTaskBody {
            keywords,
            location_code,
            language_code,
            include_clickstream_data: include_clickstream,
        }]);

        let envelope: ApiResponse<KeywordListing> = self
            .post_envelope(
                "dataforseo_labs/google/keyword_overview/live",
                "keyword_overview",
                &body,
            )
            .await?;

        let task = first_task(envelope)?;

        Ok(task
            .into_result()
            .into_iter()
            .next()
            .and_then(|listing| listing.items)
            .unwrap_or_default()
            .into_iter()
            .map(KeywordProfile::from)
            .collect())
    }

    async fn get_envelope<T: DeserializeOwned + Default>(&self, path: &str) -> Result<ApiResponse<T>> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, &self.auth_header)
            .send()
            .await?;

        let raw = read_body(response).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn post_envelope<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        cache_tag: &str,
        body: &serde_json::Value,
    ) -> Result<ApiResponse<T>> {
        let payload = serde_json::to_string(body)?;

        // Sandbox calls always hit the wire
        let cache = if self.sandbox { None } else { self.cache.as_ref() };
        let cache_key = cache.map(|_| ResponseCache::cache_key(cache_tag, &payload));

        if let (Some(cache), Some(key)) = (cache, cache_key.as_deref()) {
            if let Some(cached) = cache.lookup(key).await {
                match serde_json::from_str(&cached) {
                    Ok(envelope) => return Ok(envelope),
                    Err(e) => warn!(key = %key, "Discarding unreadable cache entry: {}", e),
                }
            }
        }

        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, &self.auth_header)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let raw = read_body(response).await?;
        let envelope: ApiResponse<T> = serde_json::from_str(&raw)?;

        // Failed tasks never enter the cache
        let task_ok = envelope
            .tasks
            .first()
            .map(|task| task.status_code == TASK_STATUS_OK)
            .unwrap_or(false);

        if task_ok {
            if let (Some(cache), Some(key)) = (cache, cache_key.as_deref()) {
                cache.put(key, &raw).await;
            }
        }

        Ok(envelope)
    }
}

async fn read_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        // Vendor errors ride inside the envelope even on HTTP failures
        if let Some(message) = extract_task_error(&body) {
            return Err(LongtailError::api(status.as_u16() as u32, message));
        }
        return Err(LongtailError::api(
            status.as_u16() as u32,
            format!("DataForSEO request failed: {}", body),
        ));
    }

    Ok(body)
}

fn extract_task_error(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("tasks")?.get(0)?.get("status_message")?.as_str()?;
    Some(message.to_string())
}

fn first_task<T>(envelope: ApiResponse<T>) -> Result<TaskEnvelope<T>> {
    let ApiResponse {
        status_code, tasks, ..
    } = envelope;

    let task = tasks
        .into_iter()
        .next()
        .ok_or_else(|| LongtailError::api(status_code, "Response contained no tasks"))?;

    if task.status_code != TASK_STATUS_OK {
        return Err(LongtailError::api(task.status_code, task.status_message));
    }

    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_auth_header() {
        let client = DataForSeoClient::new("user", "pass", false);
        assert_eq!(client.auth_header, "Basic dXNlcjpwYXNz");
        assert!(!client.is_sandbox());
    }

    #[test]
    fn test_sandbox_selects_sandbox_host() {
        let client = DataForSeoClient::new("user", "pass", true);
        assert_eq!(client.base_url, SANDBOX_BASE_URL);
        assert!(client.is_sandbox());
    }

    #[test]
    fn test_request_language_any_lifts_restriction() {
        let request = KeywordSuggestionsRequest::new("shoes", 2840).with_language("any");
        assert_eq!(request.language_code, None);

        let request = KeywordSuggestionsRequest::new("shoes", 2840).with_language("en");
        assert_eq!(request.language_code, Some("en".to_string()));
    }

    #[test]
    fn test_suggestions_body_shape() {
        let body = SuggestionsTaskBody {
            keyword: "shoes",
            location_code: 2840,
            language_code: None,
            filters: None,
            limit: 50,
            offset: 0,
            order_by: ["keyword_info.search_volume,desc"],
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "keyword": "shoes",
                "location_code": 2840,
                "limit": 50,
                "offset": 0,
                "order_by": ["keyword_info.search_volume,desc"]
            })
        );
    }

    #[test]
    fn test_first_task_surfaces_vendor_error() {
        let envelope: ApiResponse<KeywordListing> = serde_json::from_value(json!({
            "status_code": 20000,
            "tasks": [{
                "status_code": 40100,
                "status_message": "Money limit exceeded.",
                "result": null
            }]
        }))
        .unwrap();

        let err = first_task(envelope).unwrap_err();
        assert_eq!(
            err.to_string(),
            "API error (40100): Money limit exceeded."
        );
    }

    #[test]
    fn test_empty_task_list_is_an_error() {
        let envelope: ApiResponse<KeywordListing> = serde_json::from_value(json!({
            "status_code": 50000,
            "tasks": []
        }))
        .unwrap();

        assert!(first_task(envelope).is_err());
    }

    #[test]
    fn test_extract_task_error_reads_envelope_body() {
        let body = r#"{
            "status_code": 40101,
            "tasks": [{"status_code": 40101, "status_message": "Auth failed."}]
        }"#;

        assert_eq!(extract_task_error(body), Some("Auth failed.".to_string()));
        assert_eq!(extract_task_error("plain text"), None);
    }

    #[test]
    fn test_from_settings_requires_credentials() {
        let settings = Settings::default();
        assert!(DataForSeoClient::from_settings(&settings).is_err());
    }
}
