//! Codec configuration loader.

use std::path::Path;

use warehouse_core::WarehouseConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`WarehouseConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<WarehouseConfig> {
        let content = read_file(path)?;
        let config: WarehouseConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        tracing::debug!(
            legacy_layout = %config.legacy_layout,
            mask_policy = %config.mask_policy,
            "loaded warehouse config"
        );
        Ok(config)
    }
}
