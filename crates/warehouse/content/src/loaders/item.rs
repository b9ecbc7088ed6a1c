//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use warehouse_core::{ItemDefinition, WarehouseConfig};

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the item catalog from a RON file.
    ///
    /// Fails on duplicate ids, zero ids, and footprints that cannot fit on the
    /// 8×15 grid.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let file: ItemCatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Self::validate(&file.items)?;
        tracing::debug!(items = file.items.len(), "loaded item catalog");
        Ok(ItemCatalog::new(file.items))
    }

    fn validate(items: &[ItemDefinition]) -> LoadResult<()> {
        let mut seen = HashSet::new();
        for definition in items {
            anyhow::ensure!(
                definition.id.is_valid(),
                "item '{}' has id 0, which marks an empty entry",
                definition.name
            );
            anyhow::ensure!(
                seen.insert(definition.id),
                "duplicate item id {}",
                definition.id
            );
            anyhow::ensure!(
                (1..=WarehouseConfig::GRID_WIDTH).contains(&definition.width)
                    && (1..=WarehouseConfig::GRID_HEIGHT).contains(&definition.height),
                "item {} ('{}') has footprint {}x{} which does not fit the grid",
                definition.id,
                definition.name,
                definition.width,
                definition.height
            );
        }
        Ok(())
    }
}
