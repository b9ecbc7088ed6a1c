//! Content loaders for reading warehouse reference data from files.
//!
//! Each loader turns one RON/TOML file into a core type or oracle
//! implementation. [`ContentFactory`] ties them to a data directory.

pub mod config;
pub mod factory;
pub mod item;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use item::ItemLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!(path = %path.display(), "reading content file");
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
