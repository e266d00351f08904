//! JSONL file writer for handled API requests.
//!
//! Each [`RequestRecord`] is serialized as a single JSON line with a
//! `timestamp` field, appended to the file via a buffered writer.

use quiz_application::ports::request_logger::{RequestLogger, RequestRecord};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// File name of the request log inside the log directory
pub const REQUEST_LOG_FILE: &str = "requests.jsonl";

/// JSONL request logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file.
/// Flushes on `Drop`.
pub struct JsonlRequestLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlRequestLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create request log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open request log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Create a logger writing [`REQUEST_LOG_FILE`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Option<Self> {
        Self::new(dir.as_ref().join(REQUEST_LOG_FILE))
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RequestLogger for JsonlRequestLogger {
    fn log(&self, record: RequestRecord) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let Ok(serde_json::Value::Object(mut map)) = serde_json::to_value(&record) else {
            return;
        };
        map.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp),
        );

        let Ok(line) = serde_json::to_string(&map) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlRequestLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
