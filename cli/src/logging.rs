//! Tracing setup for the binary

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file prefix for `serve`; the appender adds a `.YYYY-MM-DD` suffix.
pub const SERVER_LOG_PREFIX: &str = "quiz-api.log";
/// Log file prefix for `take`
pub const CLIENT_LOG_PREFIX: &str = "quiz-client.log";

/// Where log lines go
pub enum LogSink<'a> {
    /// stderr only
    Terminal,
    /// stderr plus a daily rolling file
    TerminalAndFile { dir: &'a Path, prefix: &'a str },
    /// Daily rolling file only; keeps a full-screen UI intact
    FileOnly { dir: &'a Path, prefix: &'a str },
}

/// Filter chosen by `-v` count
pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Create the log directory if it is missing.
pub fn ensure_log_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create log directory {}", dir.display()))
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered file output is flushed.
pub fn init(verbose: u8, sink: LogSink<'_>) -> Result<Option<WorkerGuard>> {
    let (terminal, file) = match sink {
        LogSink::Terminal => (true, None),
        LogSink::TerminalAndFile { dir, prefix } => (true, Some((dir, prefix))),
        LogSink::FileOnly { dir, prefix } => (false, Some((dir, prefix))),
    };

    let (file_layer, guard) = match file {
        Some((dir, prefix)) => {
            ensure_log_dir(dir)?;
            let appender = tracing_appender::rolling::daily(dir, prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };
    let terminal_layer = terminal.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter_for(verbose))
        .with(terminal_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
