//! Persisted toolsuite settings

use crate::config;
use crate::storage::KeyValueStore;
use crate::{LongtailError, Result};

/// Storage key names for persisted settings
pub mod keys {
    /// DataForSEO account login
    pub const DATAFORSEO_USERNAME: &str = "DATAFORSEO_USERNAME";
    /// DataForSEO account password
    pub const DATAFORSEO_PASSWORD: &str = "DATAFORSEO_PASSWORD";
    /// Route DataForSEO calls to the sandbox host ("true"/"false")
    pub const DATAFORSEO_SANDBOX: &str = "DATAFORSEO_SANDBOX";
    /// Cache vendor responses ("true"/"false")
    pub const CACHING_ENABLED: &str = "CACHING_ENABLED";
    /// Upstash Redis REST endpoint URL
    pub const UPSTASH_REDIS_REST_URL: &str = "UPSTASH_REDIS_REST_URL";
    /// Upstash Redis REST token
    pub const UPSTASH_REDIS_REST_TOKEN: &str = "UPSTASH_REDIS_REST_TOKEN";
}

/// Connection and caching settings for the toolsuite.
///
/// Settings persist through any [`KeyValueStore`] under the key names in
/// [`keys`], and can also come straight from the environment. Booleans
/// round-trip as the strings "true" and "false".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// DataForSEO account login.
    pub dataforseo_username: Option<String>,

    /// DataForSEO account password.
    pub dataforseo_password: Option<String>,

    /// Route DataForSEO calls to the sandbox host.
    pub dataforseo_sandbox: bool,

    /// Cache vendor responses through the configured store.
    pub caching_enabled: bool,

    /// Upstash Redis REST endpoint URL.
    pub upstash_url: Option<String>,

    /// Upstash Redis REST token.
    pub upstash_token: Option<String>,
}

impl Settings {
    /// Load settings from a store
    pub async fn load(store: &dyn KeyValueStore) -> Result<Self> {
        Ok(Self {
            dataforseo_username: store.get(keys::DATAFORSEO_USERNAME).await?,
            dataforseo_password: store.get(keys::DATAFORSEO_PASSWORD).await?,
            dataforseo_sandbox: is_true(store.get(keys::DATAFORSEO_SANDBOX).await?),
            caching_enabled: is_true(store.get(keys::CACHING_ENABLED).await?),
            upstash_url: store.get(keys::UPSTASH_REDIS_REST_URL).await?,
            upstash_token: store.get(keys::UPSTASH_REDIS_REST_TOKEN).await?,
        })
    }

    /// Persist settings to a store.
    ///
    /// Absent credentials remove their keys, so saving after a disconnect
    /// leaves nothing behind.
    pub async fn save(&self, store: &dyn KeyValueStore) -> Result<()> {
        set_or_remove(store, keys::DATAFORSEO_USERNAME, &self.dataforseo_username).await?;
        set_or_remove(store, keys::DATAFORSEO_PASSWORD, &self.dataforseo_password).await?;
        store
            .set(keys::DATAFORSEO_SANDBOX, bool_str(self.dataforseo_sandbox))
            .await?;
        store
            .set(keys::CACHING_ENABLED, bool_str(self.caching_enabled))
            .await?;
        set_or_remove(store, keys::UPSTASH_REDIS_REST_URL, &self.upstash_url).await?;
        set_or_remove(store, keys::UPSTASH_REDIS_REST_TOKEN, &self.upstash_token).await?;
        Ok(())
    }

    /// Read settings from environment variables of the same names
    pub fn from_env() -> Self {
        Self {
            dataforseo_username: std::env::var(keys::DATAFORSEO_USERNAME).ok(),
            dataforseo_password: std::env::var(keys::DATAFORSEO_PASSWORD).ok(),
            dataforseo_sandbox: config::get_env_bool(keys::DATAFORSEO_SANDBOX, false),
            caching_enabled: config::get_env_bool(keys::CACHING_ENABLED, false),
            upstash_url: std::env::var(keys::UPSTASH_REDIS_REST_URL).ok(),
            upstash_token: std::env::var(keys::UPSTASH_REDIS_REST_TOKEN).ok(),
        }
    }

    /// DataForSEO credentials, or an auth error when not connected
    pub fn dataforseo_credentials(&self) -> Result<(&str, &str)> {
        match (&self.dataforseo_username, &self.dataforseo_password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(LongtailError::auth(
                "DataForSEO API not connected. Please add credentials from settings.",
            )),
        }
    }

    /// Upstash credentials, or an auth error when not configured
    pub fn upstash_credentials(&self) -> Result<(&str, &str)> {
        match (&self.upstash_url, &self.upstash_token) {
            (Some(url), Some(token)) => Ok((url, token)),
            _ => Err(LongtailError::auth(
                "Upstash Redis not configured. Please add credentials from settings.",
            )),
        }
    }
}

// Secrets never reach log output through Debug
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("dataforseo_username", &self.dataforseo_username)
            .field(
                "dataforseo_password",
                &self.dataforseo_password.as_deref().map(|_| "***"),
            )
            .field("dataforseo_sandbox", &self.dataforseo_sandbox)
            .field("caching_enabled", &self.caching_enabled)
            .field("upstash_url", &self.upstash_url)
            .field(
                "upstash_token",
                &self.upstash_token.as_deref().map(|_| "***"),
            )
            .finish()
    }
}

fn is_true(value: Option<String>) -> bool {
    value.as_deref() == Some("true")
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

async fn set_or_remove(store: &dyn KeyValueStore, key: &str, value: &Option<String>) -> Result<()> {
    match value {
        Some(value) => store.set(key, value).await,
        None => store.remove(key).await,
    }
}
