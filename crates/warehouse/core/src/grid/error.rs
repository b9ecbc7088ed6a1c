//! Placement errors.

use crate::error::{ErrorContext, ErrorSeverity, WarehouseError};
use crate::types::{Footprint, ItemUid, SlotPosition};

/// Reasons an item cannot be placed on or removed from the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementError {
    /// The rectangle leaves the 8×15 grid.
    #[error("{footprint} item at ({x}, {y}) does not fit inside the grid")]
    OutOfBounds { x: i32, y: i32, footprint: Footprint },

    /// The rectangle overlaps a cell held by another item.
    #[error("cell ({x}, {y}) is occupied by item {by}")]
    Occupied { x: u8, y: u8, by: ItemUid },

    /// Zero-width or zero-height footprints cannot be placed.
    #[error("footprint {0} has no cells")]
    EmptyFootprint(Footprint),

    /// No placed item carries this identifier.
    #[error("item {0} is not in the warehouse")]
    UnknownItem(ItemUid),
}

impl WarehouseError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds { .. } | Self::Occupied { .. } => ErrorSeverity::Recoverable,
            Self::EmptyFootprint(_) | Self::UnknownItem(_) => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            Self::Occupied { x, y, .. } => SlotPosition::from_coords(*x, *y)
                .map(|position| ErrorContext::new().with_position(position)),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "PLACEMENT_OUT_OF_BOUNDS",
            Self::Occupied { .. } => "PLACEMENT_OCCUPIED",
            Self::EmptyFootprint(_) => "PLACEMENT_EMPTY_FOOTPRINT",
            Self::UnknownItem(_) => "PLACEMENT_UNKNOWN_ITEM",
        }
    }
}
