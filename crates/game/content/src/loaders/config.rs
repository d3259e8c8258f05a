//! Scoring rules loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_keep_defaults() {
        let config = ConfigLoader::parse("bonus_value = 500\n").unwrap();

        assert_eq!(config.pellet_value, GameConfig::DEFAULT_PELLET_VALUE);
        assert_eq!(config.bonus_value, 500);
    }

    #[test]
    fn malformed_files_are_rejected() {
        let error = ConfigLoader::parse("pellet_value = \"ten\"").unwrap_err();
        assert!(error.to_string().contains("Failed to parse config TOML"));
    }
}
