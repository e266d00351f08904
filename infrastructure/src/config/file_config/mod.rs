//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types where needed.

mod catalog;
mod client;
mod logging;
mod server;
mod session;

pub use catalog::FileCatalogConfig;
pub use client::FileClientConfig;
pub use logging::FileLoggingConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};
pub use session::FileSessionConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.bind must be host:port: {0}")]
    InvalidBind(String),

    #[error("client.base_url must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),

    #[error("client.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("session.time_limit_seconds cannot be 0")]
    InvalidTimeLimit,

    #[error("session.violation_threshold cannot be 0")]
    InvalidViolationThreshold,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// API server settings
    pub server: FileServerConfig,
    /// API client settings (used by `list` and `take`)
    pub client: FileClientConfig,
    /// Quiz session rules
    pub session: FileSessionConfig,
    /// Quiz catalog source
    pub catalog: FileCatalogConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate every section, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.validate_server()?;
        self.validate_client()?;
        self.validate_session()
    }

    /// Validate the settings `serve` uses.
    pub fn validate_server(&self) -> Result<(), ConfigValidationError> {
        if !is_host_port(&self.server.bind) {
            return Err(ConfigValidationError::InvalidBind(self.server.bind.clone()));
        }
        Ok(())
    }

    /// Validate the settings every API client command uses.
    pub fn validate_client(&self) -> Result<(), ConfigValidationError> {
        let url = self.client.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(url.to_string()));
        }
        if self.client.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Validate the rules a quiz session runs under.
    pub fn validate_session(&self) -> Result<(), ConfigValidationError> {
        if self.session.time_limit_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeLimit);
        }
        if self.session.violation_threshold == 0 {
            return Err(ConfigValidationError::InvalidViolationThreshold);
        }
        Ok(())
    }

    /// The configuration as TOML, with both API keys masked.
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut redacted = self.clone();
        redacted.server.api_key = redact(&redacted.server.api_key);
        redacted.client.api_key = redact(&redacted.client.api_key);
        toml::to_string_pretty(&redacted)
    }
}

/// `host:port` with a non-empty host and a numeric port. Host names are
/// resolved later, when the listener binds.
fn is_host_port(bind: &str) -> bool {
    let Some((host, port)) = bind.rsplit_once(':') else {
        return false;
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    !host.is_empty() && !host.contains(char::is_whitespace) && port.parse::<u16>().is_ok()
}

fn redact(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        quiz_domain::mask_secret(key)
    }
}
