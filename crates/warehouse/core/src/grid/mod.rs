//! Fixed-size placement grid and its collision rules.
mod board;
mod error;

pub use board::WarehouseGrid;
pub use error::PlacementError;
