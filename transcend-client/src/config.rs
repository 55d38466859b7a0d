//! Connection settings for the remote API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the GraphQL endpoint.
pub const ENV_URL: &str = "TRANSCEND_URL";
/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "TRANSCEND_KEY";
/// Environment variable holding the optional internal gateway key.
pub const ENV_INTERNAL_KEY: &str = "TRANSCEND_INTERNAL_KEY";

/// Remote API connection settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// GraphQL endpoint (e.g. `https://api.transcend.io/graphql`).
    pub url: String,
    /// Bearer token sent as `Authorization`.
    pub api_token: String,
    /// Bearer token for the internal gateway, sent only when set.
    pub internal_key: Option<String>,
    /// Per-request timeout. `None` leaves cancellation to the caller.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: "https://api.transcend.io/graphql".to_string(),
            api_token: String::new(),
            internal_key: None,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Builds a config from `TRANSCEND_URL`, `TRANSCEND_KEY` and
    /// `TRANSCEND_INTERNAL_KEY`, falling back to defaults for unset values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            url: non_empty(ENV_URL).unwrap_or(defaults.url),
            api_token: non_empty(ENV_API_TOKEN).unwrap_or_default(),
            internal_key: non_empty(ENV_INTERNAL_KEY),
            timeout_secs: defaults.timeout_secs,
        }
    }

    /// Loads a config from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Checks that the settings can produce working requests.
    pub fn validate(&self) -> ClientResult<()> {
        if self.url.trim().is_empty() {
            return Err(ClientError::Config("url must not be empty".to_string()));
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "url must be http(s): {}",
                self.url
            )));
        }
        if self.api_token.trim().is_empty() {
            return Err(ClientError::Config("api_token must not be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("api_token", &redact(&self.api_token))
            .field("internal_key", &self.internal_key.as_deref().map(redact))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "[REDACTED]" }
}
