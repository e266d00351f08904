//! API key check applied before any quiz data is read.

use quiz_domain::mask_secret;
use thiserror::Error;
use tracing::warn;

/// Name of the header carrying the pre-shared key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Why a request was turned away
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("API Key is missing. Please provide X-API-Key header.")]
    MissingKey,

    #[error("Invalid API Key.")]
    InvalidKey,
}

/// Compares a presented key with the configured one
///
/// An empty configured key rejects every request.
#[derive(Clone)]
pub struct ApiKeyGuard {
    expected: String,
}

impl std::fmt::Debug for ApiKeyGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGuard")
            .field("expected", &mask_secret(&self.expected))
            .finish()
    }
}

impl ApiKeyGuard {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Check the presented key. `path` and `client` only feed the warning log.
    pub fn check(
        &self,
        presented: Option<&str>,
        path: &str,
        client: Option<&str>,
    ) -> Result<(), AccessError> {
        let client = client.unwrap_or("unknown");
        let Some(key) = presented else {
            warn!(path, client, "API key missing");
            return Err(AccessError::MissingKey);
        };
        if self.expected.is_empty() || !constant_time_eq(key.as_bytes(), self.expected.as_bytes())
        {
            warn!(path, client, key = %mask_secret(key), "Invalid API key");
            return Err(AccessError::InvalidKey);
        }
        Ok(())
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
