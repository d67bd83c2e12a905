//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use arkana_core::{EffectDefinition, EngineConfig};

use crate::loaders::{
    CharacterLoader, CharacterTemplate, ConfigLoader, EffectLoader, LoadResult,
};

/// Content factory that loads all effect content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── effects.ron
/// └── characters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the effect catalog from `effects.ron`.
    pub fn load_effects(&self) -> LoadResult<Vec<EffectDefinition>> {
        let path = self.data_dir.join("effects.ron");
        EffectLoader::load(&path)
    }

    /// Load character fixtures from `characters.ron`.
    pub fn load_characters(&self) -> LoadResult<Vec<CharacterTemplate>> {
        let path = self.data_dir.join("characters.ron");
        CharacterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> ContentFactory {
        ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_content_loads() {
        let factory = bundled();

        let effects = factory.load_effects().unwrap();
        assert!(effects.iter().any(|effect| effect.id == "arkana_stoneskin"));

        let characters = factory.load_characters().unwrap();
        assert!(!characters.is_empty());

        assert_eq!(factory.load_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn missing_config_falls_back_to_default() {
        let factory = ContentFactory::new("/nonexistent/arkana");
        assert_eq!(factory.load_config().unwrap(), EngineConfig::default());
    }
}
