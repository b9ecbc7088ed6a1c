//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use warehouse_core::{OptionTables, WarehouseConfig, WarehouseEnv};

use crate::catalog::ItemCatalog;
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, TablesLoader};

/// Everything loaded from one data directory.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: WarehouseConfig,
    pub items: ItemCatalog,
    pub tables: OptionTables,
}

impl ContentBundle {
    /// Oracle view over the bundle.
    pub fn env(&self) -> WarehouseEnv<'_> {
        WarehouseEnv::with_all(&self.items, &self.tables)
    }
}

/// Content factory that loads warehouse content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── warehouse.toml      (optional)
/// ├── items.ron
/// └── option_tables.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "warehouse.toml";
    pub const ITEMS_FILE: &'static str = "items.ron";
    pub const TABLES_FILE: &'static str = "option_tables.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the codec configuration from `warehouse.toml`, or the defaults
    /// when the file does not exist.
    pub fn load_config(&self) -> LoadResult<WarehouseConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(WarehouseConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join(Self::ITEMS_FILE);
        ItemLoader::load(&path)
    }

    /// Load the option description tables from `option_tables.ron`.
    pub fn load_tables(&self) -> LoadResult<OptionTables> {
        let path = self.data_dir.join(Self::TABLES_FILE);
        TablesLoader::load(&path)
    }

    /// Load every content file.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config().context("loading warehouse config")?,
            items: self.load_items().context("loading item catalog")?,
            tables: self.load_tables().context("loading option tables")?,
        };
        tracing::info!(
            data_dir = %self.data_dir.display(),
            items = bundle.items.len(),
            "content loaded"
        );
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
