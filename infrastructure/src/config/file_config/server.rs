//! API server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Default listen address of the API
pub const DEFAULT_BIND: &str = "127.0.0.1:5079";

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Pre-shared key expected in `X-API-Key`; empty rejects every request
    pub api_key: String,
    /// Include internal error detail in 500 responses (development only)
    pub expose_error_details: bool,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            api_key: String::new(),
            expose_error_details: false,
        }
    }
}
