use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Configuration for the profile API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the waitlist backend.
    pub base_url: String,
    /// Bearer token attached to every request when present.
    pub bearer_token: Option<String>,
    /// Per-request timeout in seconds. Zero disables the timeout.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            bearer_token: None,
            request_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Builds a config from the defaults plus `WAITLINE_API_URL`,
    /// `WAITLINE_API_TOKEN` and `WAITLINE_API_TIMEOUT_SECS` overrides.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("WAITLINE_API_URL") {
            config.base_url = url;
        }
        if let Ok(token) = std::env::var("WAITLINE_API_TOKEN") {
            config.bearer_token = Some(token);
        }
        if let Ok(secs) = std::env::var("WAITLINE_API_TIMEOUT_SECS") {
            config.request_timeout_secs = secs
                .parse()
                .with_context(|| format!("Invalid WAITLINE_API_TIMEOUT_SECS value: {secs}"))?;
        }
        Ok(config)
    }
}
