//! Remote store connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Deployment the web client shipped with.
pub const DEFAULT_SERVER_URL: &str = "https://hoopoe-server.onrender.com";

/// Environment variable overriding the remote store URL.
pub const SERVER_URL_ENV: &str = "HOOPOE_SERVER_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the remote task store lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Base URL of the remote task store.
    pub base_url: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SyncConfig {
    /// Config pointing at the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read the base URL from `HOOPOE_SERVER_URL`, falling back to the
    /// default deployment.
    pub fn from_env() -> Self {
        match std::env::var(SERVER_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
