//! Loading a whole content directory at once.

use std::path::{Path, PathBuf};

use combat_core::{CombatConfig, ItemDefinition};

use crate::ItemCatalog;
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// A directory holding `combat.toml` and `items.ron`.
///
/// [`ContentFactory::bundled`] points at the defaults shipped in this crate's
/// `data/` directory.
pub struct ContentFactory {
    root: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "combat.toml";
    pub const ITEMS_FILE: &'static str = "items.ron";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(Self::CONFIG_FILE)
    }

    pub fn items_path(&self) -> PathBuf {
        self.root.join(Self::ITEMS_FILE)
    }

    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.config_path())
    }

    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.items_path())
    }

    /// Loads `items.ron` straight into an [`ItemCatalog`].
    pub fn load_catalog(&self) -> LoadResult<ItemCatalog> {
        let catalog = ItemCatalog::from_definitions(self.load_items()?);
        tracing::debug!(root = %self.root.display(), items = catalog.len(), "content loaded");
        Ok(catalog)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use combat_core::ItemOracle;

    use super::*;

    #[test]
    fn file_paths_hang_off_the_root() {
        let factory = ContentFactory::new("/srv/arena");
        assert_eq!(factory.root(), Path::new("/srv/arena"));
        assert_eq!(factory.items_path(), Path::new("/srv/arena/items.ron"));
        assert_eq!(factory.config_path(), Path::new("/srv/arena/combat.toml"));
    }

    #[test]
    fn bundled_content_loads() {
        let factory = ContentFactory::bundled();
        let config = factory.load_config().expect("bundled combat.toml");
        assert_eq!(config, CombatConfig::default());

        let catalog = factory.load_catalog().expect("bundled items.ron");
        let dagger = catalog.find_by_name("Dagger").expect("dagger");
        assert!(catalog.weapon(dagger.handle).is_some_and(|weapon| weapon.stab));
    }

    #[test]
    fn missing_directory_names_the_file() {
        let error = ContentFactory::new("/nonexistent").load_config().unwrap_err();
        assert!(format!("{error:#}").contains("combat.toml"));
    }
}
