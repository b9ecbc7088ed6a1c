//! Option description tables loader.

use std::path::Path;

use strum::IntoEnumIterator;
use warehouse_core::options::{ExcellentOptions, ItemClass, OptionTables, SocketSlot};

use crate::loaders::{LoadResult, read_file};

/// Loader for [`OptionTables`] from RON files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load option tables from a RON file.
    ///
    /// Every item class must list exactly six excellent descriptions, socket
    /// codes must not collide with the slot sentinels, and mastery tiers must
    /// lie in `1..=3`.
    pub fn load(path: &Path) -> LoadResult<OptionTables> {
        let content = read_file(path)?;
        let tables: OptionTables = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse option tables RON: {}", e))?;

        Self::validate(&tables)?;
        tracing::debug!(
            wing_effects = tables.wing_effects.len(),
            socket_effects = tables.socket_effects.len(),
            mastery_tiers = tables.mastery_bonuses.len(),
            "loaded option tables"
        );
        Ok(tables)
    }

    pub fn validate(tables: &OptionTables) -> LoadResult<()> {
        for class in ItemClass::iter() {
            let count = tables.excellent.for_class(class).len();
            anyhow::ensure!(
                count == usize::from(ExcellentOptions::SUB_OPTIONS),
                "{} excellent table has {} entries, expected {}",
                class,
                count,
                ExcellentOptions::SUB_OPTIONS
            );
        }
        for code in tables.socket_effects.keys() {
            anyhow::ensure!(
                !matches!(
                    SocketSlot::from_code(*code),
                    SocketSlot::NoSlot | SocketSlot::Empty
                ),
                "socket effect code {} is reserved",
                code
            );
        }
        for tier in tables.mastery_bonuses.keys() {
            anyhow::ensure!(
                (1..=warehouse_core::ItemRecord::MAX_MASTERY_BONUS).contains(tier),
                "mastery bonus tier {} is out of range",
                tier
            );
        }
        Ok(())
    }
}
