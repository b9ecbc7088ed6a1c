use crate::config::WarehouseConfig;
use crate::types::{Footprint, ItemUid, SlotPosition};

use super::PlacementError;

const WIDTH: usize = WarehouseConfig::GRID_WIDTH as usize;
const HEIGHT: usize = WarehouseConfig::GRID_HEIGHT as usize;

/// Cell occupancy of the 8×15 warehouse.
///
/// Each cell holds the uid of the item covering it. The grid is a derived
/// view; [`crate::Warehouse`] rebuilds it from its item list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarehouseGrid {
    rows: [[Option<ItemUid>; WIDTH]; HEIGHT],
}

impl WarehouseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant of cell `(x, y)`; `None` when empty or outside the grid.
    pub fn occupant(&self, x: u8, y: u8) -> Option<ItemUid> {
        self.rows
            .get(usize::from(y))
            .and_then(|row| row.get(usize::from(x)))
            .copied()
            .flatten()
    }

    pub fn occupant_at(&self, position: SlotPosition) -> Option<ItemUid> {
        let (x, y) = position.coords();
        self.occupant(x, y)
    }

    pub fn is_empty_cell(&self, x: u8, y: u8) -> bool {
        self.occupant(x, y).is_none()
    }

    /// Returns true iff the `width × height` rectangle at `(x, y)` lies inside
    /// the grid and every cell in it is empty.
    pub fn can_place(&self, x: i32, y: i32, width: u8, height: u8) -> bool {
        self.check(x, y, Footprint::new(width, height)).is_ok()
    }

    /// Validates a placement without changing the grid.
    ///
    /// # Errors
    ///
    /// `EmptyFootprint` for a zero-sized item, `OutOfBounds` when the rectangle
    /// leaves the grid, otherwise `Occupied` naming the first blocking item in
    /// row-major order.
    pub fn check(&self, x: i32, y: i32, footprint: Footprint) -> Result<(), PlacementError> {
        if footprint.cells() == 0 {
            return Err(PlacementError::EmptyFootprint(footprint));
        }
        let in_bounds = x >= 0
            && y >= 0
            && x.saturating_add(i32::from(footprint.width)) <= WIDTH as i32
            && y.saturating_add(i32::from(footprint.height)) <= HEIGHT as i32;
        if !in_bounds {
            return Err(PlacementError::OutOfBounds { x, y, footprint });
        }

        // Bounds are checked above, so the coordinates fit in u8.
        let (x, y) = (x as u8, y as u8);
        for (cx, cy) in rectangle(x, y, footprint) {
            if let Some(by) = self.occupant(cx, cy) {
                return Err(PlacementError::Occupied { x: cx, y: cy, by });
            }
        }
        Ok(())
    }

    /// Returns a new grid with `uid` written into every cell of the rectangle.
    ///
    /// # Errors
    ///
    /// Same as [`Self::check`]; the grid is never written partially.
    pub fn place(
        &self,
        x: i32,
        y: i32,
        uid: ItemUid,
        footprint: Footprint,
    ) -> Result<Self, PlacementError> {
        let mut next = self.clone();
        next.occupy(x, y, uid, footprint)?;
        Ok(next)
    }

    /// In-place variant of [`Self::place`] used when rebuilding.
    pub(crate) fn occupy(
        &mut self,
        x: i32,
        y: i32,
        uid: ItemUid,
        footprint: Footprint,
    ) -> Result<(), PlacementError> {
        self.check(x, y, footprint)?;
        for (cx, cy) in rectangle(x as u8, y as u8, footprint) {
            self.rows[usize::from(cy)][usize::from(cx)] = Some(uid);
        }
        Ok(())
    }

    /// Returns a new grid with every cell referencing `uid` cleared.
    pub fn remove(&self, uid: ItemUid) -> Self {
        let mut next = self.clone();
        for cell in next.rows.iter_mut().flatten() {
            if *cell == Some(uid) {
                *cell = None;
            }
        }
        next
    }

    /// Number of cells held by any item.
    pub fn occupied_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Number of cells held by `uid`.
    pub fn cells_of(&self, uid: ItemUid) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(uid))
            .count()
    }

    /// Rows from top to bottom, each `GRID_WIDTH` cells wide.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<ItemUid>]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// `(x, y, uid)` for every occupied cell in row-major order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (u8, u8, ItemUid)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|uid| (x as u8, y as u8, uid)))
        })
    }
}

fn rectangle(x: u8, y: u8, footprint: Footprint) -> impl Iterator<Item = (u8, u8)> {
    (y..y + footprint.height).flat_map(move |cy| (x..x + footprint.width).map(move |cx| (cx, cy)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ItemUid = ItemUid(1);
    const B: ItemUid = ItemUid(2);

    fn two_by_two() -> Footprint {
        Footprint::new(2, 2)
    }

    #[test]
    fn adjacent_items_fit_and_overlap_is_rejected() {
        let grid = WarehouseGrid::new()
            .place(0, 0, A, two_by_two())
            .unwrap()
            .place(2, 0, B, two_by_two())
            .unwrap();

        assert!(!grid.can_place(1, 0, 2, 2));
        assert_eq!(
            grid.check(1, 0, two_by_two()),
            Err(PlacementError::Occupied { x: 1, y: 0, by: A })
        );
        assert_eq!(grid.occupied_cells(), 8);
    }

    #[test]
    fn rectangles_must_stay_inside_the_grid() {
        let grid = WarehouseGrid::new();
        assert!(grid.can_place(6, 13, 2, 2));
        assert!(!grid.can_place(7, 0, 2, 1));
        assert!(!grid.can_place(0, 14, 1, 2));
        assert!(!grid.can_place(-1, 0, 1, 1));
        assert!(!grid.can_place(0, -1, 1, 1));
        assert!(grid.can_place(0, 0, 8, 15));
        assert!(!grid.can_place(0, 0, 9, 1));
    }

    #[test]
    fn zero_sized_footprints_are_rejected() {
        let grid = WarehouseGrid::new();
        assert!(!grid.can_place(0, 0, 0, 1));
        assert_eq!(
            grid.place(0, 0, A, Footprint::new(1, 0)),
            Err(PlacementError::EmptyFootprint(Footprint::new(1, 0)))
        );
    }

    #[test]
    fn failed_place_leaves_grid_untouched() {
        let grid = WarehouseGrid::new().place(1, 1, A, Footprint::UNIT).unwrap();
        assert!(grid.place(0, 0, B, two_by_two()).is_err());
        assert_eq!(grid.occupied_cells(), 1);
        assert_eq!(grid.cells_of(B), 0);
    }

    #[test]
    fn remove_clears_only_that_item() {
        let grid = WarehouseGrid::new()
            .place(0, 0, A, Footprint::new(1, 3))
            .unwrap()
            .place(1, 0, B, Footprint::new(1, 3))
            .unwrap();
        let cleared = grid.remove(A);
        assert_eq!(cleared.cells_of(A), 0);
        assert_eq!(cleared.cells_of(B), 3);
        assert!(cleared.can_place(0, 0, 1, 3));
        // the source grid is not modified
        assert_eq!(grid.cells_of(A), 3);
    }

    #[test]
    fn occupant_lookup_handles_out_of_range_cells() {
        let grid = WarehouseGrid::new().place(7, 14, A, Footprint::UNIT).unwrap();
        assert_eq!(grid.occupant(7, 14), Some(A));
        assert_eq!(grid.occupant_at(SlotPosition::new(119).unwrap()), Some(A));
        assert_eq!(grid.occupant(8, 0), None);
        assert_eq!(grid.occupant(0, 15), None);
        assert_eq!(grid.iter_occupied().collect::<Vec<_>>(), vec![(7, 14, A)]);
    }
}
