//! Warehouse state: placed items, orphans and the derived grid.
mod report;
mod warehouse;

pub use report::{LoadReport, OrphanedRecord};
pub use warehouse::{PlacedItem, Warehouse};
