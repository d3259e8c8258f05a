//! Layout file loader.

use std::path::Path;

use game_core::GameConfig;

use crate::Layout;
use crate::loaders::{LoadResult, read_file};

/// Loader for text layouts.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a layout scored with the default rules.
    pub fn load(path: &Path) -> LoadResult<Layout> {
        Self::load_with(path, GameConfig::default())
    }

    pub fn load_with(path: &Path, config: GameConfig) -> LoadResult<Layout> {
        let content = read_file(path)?;
        Layout::parse(&content, config)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout {}: {}", path.display(), e))
    }
}
