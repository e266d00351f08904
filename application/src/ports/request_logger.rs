//! Port for structured request logging.
//!
//! Defines the [`RequestLogger`] trait for recording one entry per handled
//! API request.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps an access log in a
//! machine-readable format (JSONL).

use serde::Serialize;

/// One handled request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRecord {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub duration_ms: u64,
    /// Remote address, when the transport knows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

impl RequestRecord {
    pub fn is_failure(&self) -> bool {
        self.status >= 400
    }
}

/// Port for logging handled requests.
///
/// The `log` method is synchronous and non-fallible; implementations swallow
/// their own write errors so the request path is never affected.
pub trait RequestLogger: Send + Sync {
    fn log(&self, record: RequestRecord);
}

/// No-op implementation for tests and when the request log is disabled.
pub struct NoRequestLogger;

impl RequestLogger for NoRequestLogger {
    fn log(&self, _record: RequestRecord) {}
}
