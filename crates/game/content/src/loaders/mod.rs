//! Content loaders for reading effect data from files.
//!
//! Each loader converts one RON/TOML file into arkana-core types that the
//! runtime wraps in oracle implementations.

pub mod characters;
pub mod config;
pub mod effects;
pub mod factory;

pub use characters::{CharacterLoader, CharacterTemplate};
pub use config::ConfigLoader;
pub use effects::{EffectCatalogFile, EffectLoader};
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
