//! Configuration file loading for online-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz.toml` or `./.quiz.toml`
//! 4. Global: `$XDG_CONFIG_HOME/online-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BIND, FileCatalogConfig, FileClientConfig, FileConfig,
    FileLoggingConfig, FileServerConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
