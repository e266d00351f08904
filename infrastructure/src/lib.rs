//! Infrastructure layer for online-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application and domain layers, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use catalog::{CatalogLoadError, InMemoryQuizRepository, load_catalog};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileClientConfig, FileConfig,
    FileLoggingConfig, FileServerConfig, FileSessionConfig,
};
pub use http::HttpQuizGateway;
pub use logging::JsonlRequestLogger;
