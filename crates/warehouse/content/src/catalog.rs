//! In-memory item catalog.

use std::collections::HashMap;

use warehouse_core::{ItemDefinition, ItemId, ItemOracle};

/// [`ItemOracle`] backed by a hash map of definitions.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemCatalog {
    /// Builds a catalog; later definitions replace earlier ones with the same id.
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            definitions: definitions
                .into_iter()
                .map(|definition| (definition.id, definition))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.definitions
            .values()
            .find(|definition| definition.name.eq_ignore_ascii_case(name))
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition> {
        self.definitions.get(&id).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        let mut definitions: Vec<_> = self.definitions.values().cloned().collect();
        definitions.sort_by_key(|definition| definition.id);
        definitions
    }
}
