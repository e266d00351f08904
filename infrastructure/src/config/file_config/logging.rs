//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the daily log files and the request log
    pub directory: PathBuf,
    /// Write one JSONL line per handled request
    pub request_log: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            request_log: true,
        }
    }
}
