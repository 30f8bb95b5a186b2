//! Arena configuration from environment variables.
use std::env;
use std::path::PathBuf;

use anyhow::Context;
use combat_content::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader};
use combat_core::CombatConfig;

/// Where the arena reads its content from, and how it seeds the run.
#[derive(Clone, Debug, Default)]
pub struct ArenaConfig {
    /// Combat tuning TOML; the bundled `combat.toml` when unset.
    pub config_path: Option<PathBuf>,
    /// Item catalog RON; the bundled `items.ron` when unset.
    pub items_path: Option<PathBuf>,
    /// Game seed; random when unset.
    pub seed: Option<u64>,
    pub max_rounds: u32,
}

impl ArenaConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 50;

    /// Construct arena configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_CONFIG` - combat tuning file
    /// - `ARENA_ITEMS` - item catalog file
    /// - `ARENA_SEED` - game seed
    /// - `ARENA_MAX_ROUNDS` - round limit (default: 50)
    pub fn from_env() -> Self {
        Self {
            config_path: read_env("ARENA_CONFIG"),
            items_path: read_env("ARENA_ITEMS"),
            seed: read_env("ARENA_SEED"),
            max_rounds: read_env::<u32>("ARENA_MAX_ROUNDS")
                .unwrap_or(Self::DEFAULT_MAX_ROUNDS)
                .max(1),
        }
    }

    /// Loads combat tuning, falling back to the bundled file.
    pub fn load_combat_config(&self) -> anyhow::Result<CombatConfig> {
        match &self.config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("loading combat config {}", path.display())),
            None => ContentFactory::bundled().load_config(),
        }
    }

    /// Loads the item catalog, falling back to the bundled file.
    pub fn load_items(&self) -> anyhow::Result<ItemCatalog> {
        match &self.items_path {
            Some(path) => ItemLoader::load_catalog(path)
                .with_context(|| format!("loading item catalog {}", path.display())),
            None => ContentFactory::bundled().load_catalog(),
        }
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn bundled_content_loads_without_paths() {
        let arena = ArenaConfig::default();
        let config = arena.load_combat_config().expect("bundled config");
        assert_eq!(config.stamina_required_percent, 50);
        assert!(!arena.load_items().expect("bundled items").is_empty());
    }

    #[test]
    fn explicit_config_path_wins() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "stamina_required_percent = 10").expect("write");

        let arena = ArenaConfig {
            config_path: Some(file.path().to_path_buf()),
            ..ArenaConfig::default()
        };
        let config = arena.load_combat_config().expect("parsed");
        assert_eq!(config.stamina_required_percent, 10);
        assert_eq!(config.shield_skill, CombatConfig::default().shield_skill);
    }

    #[test]
    fn missing_items_file_reports_path() {
        let arena = ArenaConfig {
            items_path: Some(PathBuf::from("/nonexistent/items.ron")),
            ..ArenaConfig::default()
        };
        let error = arena.load_items().expect_err("missing file");
        assert!(format!("{error:#}").contains("/nonexistent/items.ron"));
    }

    #[test]
    fn explicit_seed_is_kept() {
        let arena = ArenaConfig {
            seed: Some(42),
            ..ArenaConfig::default()
        };
        assert_eq!(arena.seed_or_random(), 42);
    }
}
