//! Content factory for building layouts from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::Layout;
use crate::loaders::{ConfigLoader, LayoutLoader, LoadResult};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── levels/
///     └── classic.txt
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load scoring rules from `config.toml`, or the defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `levels/{name}.txt`, scored with [`Self::load_config`].
    pub fn load_level(&self, name: &str) -> LoadResult<Layout> {
        let config = self.load_config()?;
        let path = self.data_dir.join("levels").join(format!("{}.txt", name));
        LayoutLoader::load_with(&path, config)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
