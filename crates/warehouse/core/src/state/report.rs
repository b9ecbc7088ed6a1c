use crate::codec::{BlobError, DecodeReport, DroppedRecord};
use crate::grid::PlacementError;
use crate::types::{ItemId, SlotPosition};

/// A decoded record that could not be laid on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrphanedRecord {
    /// Index of the record among the decoded records.
    pub index: usize,
    pub item_id: ItemId,
    pub position: SlotPosition,
    pub reason: PlacementError,
}

/// Everything that went wrong while turning a blob into a [`super::Warehouse`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Chunks the decoder skipped.
    pub dropped: Vec<DroppedRecord>,
    pub legacy_records: usize,
    pub blob_error: Option<BlobError>,
    /// Items missing from the catalog; they were laid out as 1×1.
    pub unknown_items: Vec<ItemId>,
    /// Records kept aside because they collide or leave the grid.
    pub orphaned: Vec<OrphanedRecord>,
}

impl LoadReport {
    pub(crate) fn from_decode(report: &DecodeReport) -> Self {
        Self {
            dropped: report.dropped.clone(),
            legacy_records: report.legacy_records,
            blob_error: report.blob_error.clone(),
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
            && self.blob_error.is_none()
            && self.unknown_items.is_empty()
            && self.orphaned.is_empty()
    }
}
