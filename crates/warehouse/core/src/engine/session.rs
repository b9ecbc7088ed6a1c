use crate::state::Warehouse;
use crate::types::{Footprint, ItemRecord};

/// Whether the user is currently holding an item to drop on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PlacementMode {
    #[default]
    Idle,
    Placing,
}

/// Item waiting to be dropped, with its catalog footprint resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingItem {
    pub record: ItemRecord,
    pub footprint: Footprint,
}

/// Immutable snapshot of one editing session.
///
/// `pending` is `Some` exactly when `mode` is [`PlacementMode::Placing`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub warehouse: Warehouse,
    pub pending: Option<PendingItem>,
    pub mode: PlacementMode,
}

impl SessionState {
    pub fn new(warehouse: Warehouse) -> Self {
        Self {
            warehouse,
            pending: None,
            mode: PlacementMode::Idle,
        }
    }

    pub fn is_placing(&self) -> bool {
        self.mode == PlacementMode::Placing
    }

    /// Whether the pending item would fit with its top-left corner at `(x, y)`.
    /// Always false while idle.
    pub fn can_drop_at(&self, x: i32, y: i32) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| self.warehouse.can_place(x, y, pending.footprint))
    }

    pub(crate) fn mode_is_consistent(&self) -> bool {
        self.is_placing() == self.pending.is_some()
    }
}
