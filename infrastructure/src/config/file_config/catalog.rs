//! Quiz catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Catalog TOML file; the built-in sample catalog is served when unset
    pub path: Option<PathBuf>,
}
