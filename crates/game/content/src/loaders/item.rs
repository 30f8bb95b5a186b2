//! Item catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use combat_core::{ItemDefinition, ItemKind};
use serde::{Deserialize, Serialize};

use crate::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a RON file.
    ///
    /// Rejects duplicate handles and inverted damage or defense ranges.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let items = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), count = items.len(), "loaded item catalog");
        Ok(items)
    }

    /// Load a RON file straight into an [`ItemCatalog`] oracle.
    pub fn load_catalog(path: &Path) -> LoadResult<ItemCatalog> {
        Ok(ItemCatalog::from_definitions(Self::load(path)?))
    }

    /// Parse and validate RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for item in &catalog.items {
            if !seen.insert(item.handle) {
                anyhow::bail!("Duplicate item handle {} ({})", item.handle, item.name);
            }
            validate(item)?;
        }
        Ok(catalog.items)
    }
}

fn validate(item: &ItemDefinition) -> LoadResult<()> {
    match item.kind {
        ItemKind::Weapon(weapon) if weapon.min_hit > weapon.max_hit => anyhow::bail!(
            "Item {} ({}) has inverted hit range {}..={}",
            item.handle,
            item.name,
            weapon.min_hit,
            weapon.max_hit
        ),
        ItemKind::Armor(defense) | ItemKind::Shield(defense) | ItemKind::Helmet(defense)
            if defense.min_def > defense.max_def =>
        {
            anyhow::bail!(
                "Item {} ({}) has inverted defense range {}..={}",
                item.handle,
                item.name,
                defense.min_def,
                defense.max_def
            )
        }
        _ => Ok(()),
    }
}
