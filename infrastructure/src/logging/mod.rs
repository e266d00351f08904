//! Logging infrastructure: structured request logging.
//!
//! Provides [`JsonlRequestLogger`], a JSONL file writer that implements
//! the [`RequestLogger`](quiz_application::RequestLogger) port.

mod jsonl_logger;

pub use jsonl_logger::{JsonlRequestLogger, REQUEST_LOG_FILE};
