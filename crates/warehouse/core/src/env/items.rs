use crate::types::{Footprint, ItemId};

/// Read-only item catalog lookup.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition>;

    /// Returns every definition in the catalog, ordered by id.
    fn all_definitions(&self) -> Vec<ItemDefinition>;

    /// Grid footprint of `id`, if the catalog knows the item.
    fn footprint(&self, id: ItemId) -> Option<Footprint> {
        self.definition(id).map(|definition| definition.footprint())
    }
}

/// Static catalog data for one item kind.
///
/// Only the fields the warehouse needs are modelled: the grid footprint for
/// placement, and the name and maximum durability for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub width: u8,
    pub height: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_durability: u8,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, width: u8, height: u8) -> Self {
        Self {
            id,
            name: name.into(),
            width,
            height,
            max_durability: 0,
        }
    }

    pub fn with_max_durability(mut self, max_durability: u8) -> Self {
        self.max_durability = max_durability;
        self
    }

    pub const fn footprint(&self) -> Footprint {
        Footprint::new(self.width, self.height)
    }
}
