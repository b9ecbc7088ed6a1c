use std::fmt;

use crate::config::WarehouseConfig;

/// Catalog identifier of an item kind: `category * 512 + local_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl ItemId {
    pub const CATEGORY_STRIDE: u32 = 512;

    pub const fn from_parts(category: u32, local_index: u32) -> Self {
        Self(category * Self::CATEGORY_STRIDE + local_index)
    }

    /// Item group, e.g. 0 for swords and 12 for wings.
    #[inline]
    pub const fn category(self) -> u32 {
        self.0 / Self::CATEGORY_STRIDE
    }

    /// Index of the item within its group.
    #[inline]
    pub const fn local_index(self) -> u32 {
        self.0 % Self::CATEGORY_STRIDE
    }

    /// Zero is the "empty entry" marker and never names a real item.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.0, self.category(), self.local_index())
    }
}

/// Linear slot index into the 8×15 warehouse grid (`y * 8 + x`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct SlotPosition(u8);

impl SlotPosition {
    pub const ORIGIN: Self = Self(0);
    pub const MAX: u8 = (WarehouseConfig::SLOT_COUNT - 1) as u8;

    /// Returns `None` when `index` is past the last slot.
    pub const fn new(index: u8) -> Option<Self> {
        if index <= Self::MAX {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns `None` when the coordinates fall outside the grid.
    pub fn from_coords(x: u8, y: u8) -> Option<Self> {
        if x < WarehouseConfig::GRID_WIDTH && y < WarehouseConfig::GRID_HEIGHT {
            Some(Self(coords_to_position(x, y)))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// `(x, y)` of the slot, i.e. `(p % 8, p / 8)`.
    #[inline]
    pub const fn coords(self) -> (u8, u8) {
        position_to_coords(self.0)
    }
}

impl TryFrom<u8> for SlotPosition {
    type Error = SlotOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(SlotOutOfRange(value))
    }
}

impl From<SlotPosition> for u8 {
    fn from(position: SlotPosition) -> Self {
        position.0
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.coords();
        write!(f, "{} ({},{})", self.0, x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("slot index {0} is outside the warehouse grid")]
pub struct SlotOutOfRange(pub u8);

/// Converts a linear slot index into grid coordinates.
#[inline]
pub const fn position_to_coords(position: u8) -> (u8, u8) {
    (
        position % WarehouseConfig::GRID_WIDTH,
        position / WarehouseConfig::GRID_WIDTH,
    )
}

/// Converts grid coordinates into a linear slot index.
#[inline]
pub const fn coords_to_position(x: u8, y: u8) -> u8 {
    y * WarehouseConfig::GRID_WIDTH + x
}

/// Per-item identifier assigned when an item enters a [`crate::Warehouse`].
///
/// Uids are never persisted; they exist so removal does not depend on
/// comparing item attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemUid(pub u32);

impl fmt::Display for ItemUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Number of grid cells an item covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub width: u8,
    pub height: u8,
}

impl Footprint {
    pub const UNIT: Self = Self {
        width: 1,
        height: 1,
    };

    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn cells(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_splits_into_category_and_index() {
        let id = ItemId::from_parts(12, 36);
        assert_eq!(id.0, 12 * 512 + 36);
        assert_eq!(id.category(), 12);
        assert_eq!(id.local_index(), 36);
        assert!(!ItemId(0).is_valid());
    }

    #[test]
    fn slot_position_rejects_indices_past_the_grid() {
        assert!(SlotPosition::new(119).is_some());
        assert!(SlotPosition::new(120).is_none());
        assert!(SlotPosition::from_coords(8, 0).is_none());
        assert!(SlotPosition::from_coords(0, 15).is_none());
        assert_eq!(SlotPosition::from_coords(7, 14).map(SlotPosition::index), Some(119));
    }

    #[test]
    fn coords_and_positions_are_inverse() {
        for p in 0..=SlotPosition::MAX {
            let (x, y) = position_to_coords(p);
            assert_eq!(coords_to_position(x, y), p);
        }
        for y in 0..WarehouseConfig::GRID_HEIGHT {
            for x in 0..WarehouseConfig::GRID_WIDTH {
                assert_eq!(position_to_coords(coords_to_position(x, y)), (x, y));
            }
        }
    }
}
