//! API client configuration from TOML (`[client]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw client configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Base URL of the quiz API, without the `/api` suffix
    pub base_url: String,
    /// Key sent as `X-API-Key`
    pub api_key: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5079".to_string(),
            api_key: String::new(),
            timeout_seconds: 10,
        }
    }
}

impl FileClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
