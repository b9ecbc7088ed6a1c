//! Data-driven reference content for the warehouse core.
//!
//! This crate provides loaders for the RON/TOML data files:
//! - Item catalog (`items.ron`): names, grid footprints, maximum durability
//! - Option description tables (`option_tables.ron`)
//! - Codec configuration (`warehouse.toml`)
//!
//! Content backs the core's oracles and never appears in a warehouse blob.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ItemCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentBundle, ContentFactory, ItemLoader, TablesLoader};

/// Data directory shipped with this crate.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
