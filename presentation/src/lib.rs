//! Presentation layer for online-quiz
//!
//! This crate contains the HTTP API (axum), the terminal quiz client
//! (ratatui), console output formatting and CLI definitions.

pub mod cli;
pub mod http;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use http::{ApiState, build_router, serve};
pub use output::console::ConsoleFormatter;
pub use tui::QuizTuiApp;
