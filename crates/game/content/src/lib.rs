//! Level layouts and rule files.
//!
//! Layouts are plain text grids, one character per cell:
//! - `#` wall, ` ` empty floor
//! - `.` pellet, `F` bonus
//! - `P` player start, `G` monster
//!
//! A parsed [`Layout`] is a [`game_core::LevelSource`]: every call builds a
//! fresh, fully populated level. The classic board ships with the crate.
//!
//! File loaders (layouts and TOML rule files) sit behind the `loaders`
//! feature.

pub mod layout;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use layout::{CLASSIC_LAYOUT, Layout, LayoutError};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LayoutLoader};
