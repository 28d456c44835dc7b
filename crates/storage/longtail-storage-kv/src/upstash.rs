//! Upstash Redis adapter
//!
//! Implements the key-value store over the Upstash Redis REST API. Each
//! command is one HTTP call; responses arrive as a `{"result": ...}`
//! envelope with the token carried as a bearer header.

use async_trait::async_trait;
use longtail_core::{KeyValueStore, LongtailError, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct CommandResponse {
    result: serde_json::Value,
}

/// Key-value store backed by the Upstash Redis REST API
pub struct UpstashRedisStore {
    client: Client,
    rest_url: String,
    token: String,
}

impl UpstashRedisStore {
    /// Create a store against an Upstash REST endpoint
    pub fn new(rest_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| LongtailError::storage(format!("Failed to create HTTP client: {}", e)))?;

        let mut rest_url = rest_url.into();
        while rest_url.ends_with('/') {
            rest_url.pop();
        }

        Ok(Self {
            client,
            rest_url,
            token: token.into(),
        })
    }

    async fn send_command(&self, request: reqwest::RequestBuilder) -> Result<serde_json::Value> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| LongtailError::storage(format!("Upstash request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LongtailError::storage(format!(
                "Upstash command failed ({}): {}",
                status, body
            )));
        }

        let payload: CommandResponse = response
            .json()
            .await
            .map_err(|e| LongtailError::storage(format!("Failed to parse Upstash response: {}", e)))?;

        Ok(payload.result)
    }
}

#[async_trait]
impl KeyValueStore for UpstashRedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let url = format!("{}/get/{}", self.rest_url, key);
        let result = self.send_command(self.client.get(&url)).await?;

        Ok(match result {
            serde_json::Value::Null => None,
            serde_json::Value::String(value) => Some(value),
            other => Some(other.to_string()),
        })
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let url = format!("{}/set/{}", self.rest_url, key);
        self.send_command(self.client.post(&url).body(value.to_string()))
            .await?;
        Ok(())
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: std::time::Duration) -> Result<()> {
        // Redis rejects EX 0; round sub-second TTLs up to one second
        let url = format!(
            "{}/set/{}?EX={}",
            self.rest_url,
            key,
            ttl.as_secs().max(1)
        );
        self.send_command(self.client.post(&url).body(value.to_string()))
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let url = format!("{}/del/{}", self.rest_url, key);
        self.send_command(self.client.get(&url)).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        debug!("Flushing Upstash database");
        let url = format!("{}/flushdb", self.rest_url);
        self.send_command(self.client.get(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_returns_stored_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get/settings:longtail"))
            .and(header("Authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "hello"})))
            .mount(&server)
            .await;

        let store = UpstashRedisStore::new(server.uri(), "secret-token").unwrap();
        let value = store.get("settings:longtail").await.unwrap();

        assert_eq!(value, Some("hello".to_string()));
    }

    #[tokio::test]
    async fn test_missing_key_reads_as_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get/absent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": null})))
            .mount(&server)
            .await;

        let store = UpstashRedisStore::new(server.uri(), "secret-token").unwrap();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_posts_raw_value() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/set/color"))
            .and(body_string("green"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "OK"})))
            .expect(1)
            .mount(&server)
            .await;

        let store = UpstashRedisStore::new(server.uri(), "secret-token").unwrap();
        store.set("color", "green").await.unwrap();
    }

    #[tokio::test]
    async fn test_set_with_ttl_sends_expiry_seconds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/set/cache-entry"))
            .and(query_param("EX", "3600"))
            .and(body_string("payload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "OK"})))
            .expect(1)
            .mount(&server)
            .await;

        let store = UpstashRedisStore::new(server.uri(), "secret-token").unwrap();
        store
            .set_with_ttl("cache-entry", "payload", std::time::Duration::from_secs(3600))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_sub_second_ttl_rounds_up() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/set/blink"))
            .and(query_param("EX", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "OK"})))
            .expect(1)
            .mount(&server)
            .await;

        let store = UpstashRedisStore::new(server.uri(), "secret-token").unwrap();
        store
            .set_with_ttl("blink", "x", std::time::Duration::from_millis(250))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remove_issues_del() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/del/stale"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let store = UpstashRedisStore::new(server.uri(), "secret-token").unwrap();
        store.remove("stale").await.unwrap();
    }

    #[tokio::test]
    async fn test_auth_failure_is_storage_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})),
            )
            .mount(&server)
            .await;

        let store = UpstashRedisStore::new(server.uri(), "bad-token").unwrap();
        let err = store.get("anything").await.unwrap_err();

        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let store = UpstashRedisStore::new("https://example.upstash.io/", "t").unwrap();
        assert_eq!(store.rest_url, "https://example.upstash.io");
    }
}
