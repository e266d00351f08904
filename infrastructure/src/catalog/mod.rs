//! Quiz catalog storage: TOML catalog files and the in-memory repository
//! that serves them.

mod file_catalog;
mod memory_repository;

pub use file_catalog::{
    CatalogLoadError, DEFAULT_CATALOG, load_catalog, load_catalog_file, parse_catalog,
};
pub use memory_repository::InMemoryQuizRepository;
