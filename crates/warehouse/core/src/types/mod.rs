//! Value types shared by the codec, the grid and the session engine.
mod common;
mod record;

pub use common::{
    Footprint, ItemId, ItemUid, SlotOutOfRange, SlotPosition, coords_to_position,
    position_to_coords,
};
pub use record::{ItemRecord, RecordViolation};
