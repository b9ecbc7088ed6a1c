use crate::codec::{EncodingError, WarehouseCodec};
use crate::config::WarehouseConfig;
use crate::env::{ItemOracle, OracleError, WarehouseEnv};
use crate::grid::{PlacementError, WarehouseGrid};
use crate::types::{Footprint, ItemRecord, ItemUid, SlotPosition};

use super::{LoadReport, OrphanedRecord};

/// An item laid on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem {
    pub uid: ItemUid,
    pub record: ItemRecord,
    pub footprint: Footprint,
}

impl PlacedItem {
    /// Top-left cell of the item.
    pub fn coords(&self) -> (u8, u8) {
        self.record.position.coords()
    }

    pub fn covers(&self, x: u8, y: u8) -> bool {
        let (left, top) = self.coords();
        (left..left + self.footprint.width).contains(&x)
            && (top..top + self.footprint.height).contains(&y)
    }
}

/// One character's warehouse: the ordered item list and its derived grid.
///
/// The item list is the source of truth. Every mutation returns a new value
/// and rebuilds the grid from the list. Records that could not be laid out at
/// load time are kept as orphans and written back unchanged by [`Self::encode`].
///
/// There is no locking here. Two callers that each load, mutate and save the
/// same character's blob concurrently will lose one of the writes; callers
/// must serialize that sequence per character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warehouse {
    items: Vec<PlacedItem>,
    orphans: Vec<ItemRecord>,
    grid: WarehouseGrid,
    next_uid: u32,
    config: WarehouseConfig,
}

impl Warehouse {
    pub fn new(config: WarehouseConfig) -> Self {
        Self {
            config,
            next_uid: 1,
            ..Self::default()
        }
    }

    /// Decodes `blob` and lays its records on a fresh grid in record order.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` when `env` has no item catalog.
    /// Problems with individual records never fail the load; they are listed
    /// in the returned [`LoadReport`].
    pub fn load(
        blob: &str,
        env: &WarehouseEnv<'_>,
        config: WarehouseConfig,
    ) -> Result<(Self, LoadReport), OracleError> {
        let items = env.items()?;
        let decoded = WarehouseCodec::new(config).decode_with_report(blob);
        let mut report = LoadReport::from_decode(&decoded);
        let warehouse = Self::new(config).lay_out(decoded.records, items, &mut report);
        Ok((warehouse, report))
    }

    /// Lays already decoded records on a fresh grid.
    pub fn from_records<I>(
        records: Vec<ItemRecord>,
        items: &I,
        config: WarehouseConfig,
    ) -> (Self, LoadReport)
    where
        I: ItemOracle + ?Sized,
    {
        let mut report = LoadReport::default();
        let warehouse = Self::new(config).lay_out(records, items, &mut report);
        (warehouse, report)
    }

    fn lay_out<I>(mut self, records: Vec<ItemRecord>, items: &I, report: &mut LoadReport) -> Self
    where
        I: ItemOracle + ?Sized,
    {
        for (index, record) in records.into_iter().enumerate() {
            let footprint = items.footprint(record.item_id).unwrap_or_else(|| {
                report.unknown_items.push(record.item_id);
                Footprint::UNIT
            });
            let (x, y) = record.position.coords();
            let uid = ItemUid(self.next_uid);
            match self.grid.occupy(i32::from(x), i32::from(y), uid, footprint) {
                Ok(()) => {
                    self.next_uid += 1;
                    self.items.push(PlacedItem {
                        uid,
                        record,
                        footprint,
                    });
                }
                Err(reason) => {
                    report.orphaned.push(OrphanedRecord {
                        index,
                        item_id: record.item_id,
                        position: record.position,
                        reason,
                    });
                    self.orphans.push(record);
                }
            }
        }
        self
    }

    /// Places `record` with its top-left corner at `(x, y)`.
    ///
    /// The record's position is overwritten with `y * 8 + x`.
    ///
    /// # Errors
    ///
    /// Returns the [`PlacementError`] from the grid check; `self` is unchanged.
    pub fn place(
        &self,
        x: i32,
        y: i32,
        record: ItemRecord,
        footprint: Footprint,
    ) -> Result<(Self, ItemUid), PlacementError> {
        self.grid.check(x, y, footprint)?;
        let position = u8::try_from(x)
            .ok()
            .zip(u8::try_from(y).ok())
            .and_then(|(x, y)| SlotPosition::from_coords(x, y))
            .ok_or(PlacementError::OutOfBounds { x, y, footprint })?;

        let uid = ItemUid(self.next_uid);
        let mut items = self.items.clone();
        items.push(PlacedItem {
            uid,
            record: record.with_position(position),
            footprint,
        });
        let next = self.with_items(items)?;
        Ok((next, uid))
    }

    /// Removes the item with `uid`.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::UnknownItem` if no placed item has that uid.
    pub fn remove(&self, uid: ItemUid) -> Result<Self, PlacementError> {
        if self.get(uid).is_none() {
            return Err(PlacementError::UnknownItem(uid));
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.uid != uid)
            .cloned()
            .collect();
        self.with_items(items)
    }

    fn with_items(&self, items: Vec<PlacedItem>) -> Result<Self, PlacementError> {
        let mut grid = WarehouseGrid::new();
        for item in &items {
            let (x, y) = item.coords();
            grid.occupy(i32::from(x), i32::from(y), item.uid, item.footprint)?;
        }
        let next_uid = items
            .iter()
            .map(|item| item.uid.0 + 1)
            .max()
            .unwrap_or(1)
            .max(self.next_uid);
        Ok(Self {
            items,
            orphans: self.orphans.clone(),
            grid,
            next_uid,
            config: self.config,
        })
    }

    /// Records to persist: placed items in order, then orphans.
    pub fn records(&self) -> Vec<ItemRecord> {
        self.items
            .iter()
            .map(|item| item.record.clone())
            .chain(self.orphans.iter().cloned())
            .collect()
    }

    /// Encodes [`Self::records`] into a blob.
    pub fn encode(&self) -> Result<String, EncodingError> {
        WarehouseCodec::new(self.config).encode(&self.records())
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn orphans(&self) -> &[ItemRecord] {
        &self.orphans
    }

    pub fn grid(&self) -> &WarehouseGrid {
        &self.grid
    }

    pub fn config(&self) -> &WarehouseConfig {
        &self.config
    }

    pub fn get(&self, uid: ItemUid) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.uid == uid)
    }

    /// The placed item covering cell `(x, y)`, if any.
    pub fn item_at(&self, x: u8, y: u8) -> Option<&PlacedItem> {
        self.grid.occupant(x, y).and_then(|uid| self.get(uid))
    }

    pub fn can_place(&self, x: i32, y: i32, footprint: Footprint) -> bool {
        self.grid.check(x, y, footprint).is_ok()
    }

    /// Σ width×height over placed items.
    pub fn used_slots(&self) -> usize {
        self.items.iter().map(|item| item.footprint.cells()).sum()
    }

    pub fn available_slots(&self) -> usize {
        WarehouseConfig::SLOT_COUNT.saturating_sub(self.used_slots())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when every grid cell references a listed item and each item
    /// covers exactly its footprint.
    pub fn grid_is_consistent(&self) -> bool {
        self.grid.occupied_cells() == self.used_slots()
            && self.items.iter().all(|item| {
                let (x, y) = item.coords();
                item.covers(x, y)
                    && self.grid.occupant(x, y) == Some(item.uid)
                    && self.grid.cells_of(item.uid) == item.footprint.cells()
            })
    }
}
