//! Minimal [`combat_core::ItemOracle`] backed by an in-memory map.
use std::collections::BTreeMap;

use combat_core::{ItemDefinition, ItemHandle, ItemOracle};

/// Item catalog with static item definitions, keyed by handle.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    definitions: BTreeMap<ItemHandle, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.insert(definition);
        }
        catalog
    }

    /// Adds an item definition, returning the one it replaced.
    pub fn insert(&mut self, definition: ItemDefinition) -> Option<ItemDefinition> {
        self.definitions.insert(definition.handle, definition)
    }

    /// First definition whose name matches, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.definitions
            .values()
            .find(|definition| definition.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.definitions.values()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.definitions.get(&handle).cloned()
    }
}
