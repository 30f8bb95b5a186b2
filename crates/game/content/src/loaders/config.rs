//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a [`CombatConfig`] from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded combat config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combat config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid combat config: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("stamina_required_percent = 30\n").expect("valid config");
        assert_eq!(config.stamina_required_percent, 30);
        assert_eq!(config.shield_skill, CombatConfig::DEFAULT_SHIELD_SKILL);
        assert!(!config.enforce_team_restrictions);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let error = ConfigLoader::parse("shield_skill = 0\n").expect_err("zero skill");
        assert!(error.to_string().contains("shield_skill"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "footprint_grace_ms = 400").expect("write");
        writeln!(file, "enforce_team_restrictions = true").expect("write");

        let config = ConfigLoader::load(file.path()).expect("load");
        assert_eq!(config.footprint_grace_ms, 400);
        assert!(config.enforce_team_restrictions);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.toml");
        let error = ConfigLoader::load(&path).expect_err("missing file");
        assert!(error.to_string().contains("absent.toml"));
    }
}
