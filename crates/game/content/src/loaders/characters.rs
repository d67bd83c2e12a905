//! Character fixture loader.
//!
//! Fixtures seed a repository with registered characters for local play and
//! tests. Registration itself belongs to the host; this only reads the
//! starting attributes.

use std::path::Path;

use arkana_core::{BaseAttributes, Universe};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Starting state of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    pub name: String,
    #[serde(default)]
    pub universe: Universe,
    #[serde(default)]
    pub attributes: BaseAttributes,
    /// Defaults to the base max HP.
    #[serde(default)]
    pub health: Option<i32>,
}

impl CharacterTemplate {
    pub fn starting_health(&self) -> i32 {
        self.health.unwrap_or(self.attributes.max_hp)
    }
}

/// Loader for character fixtures from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load character templates from a RON file.
    ///
    /// RON format: `Vec<CharacterTemplate>`
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CharacterTemplate>> {
        let templates: Vec<CharacterTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character RON: {}", e))?;

        for template in &templates {
            if template.attributes.max_hp < 1 {
                anyhow::bail!(
                    "Character '{}' has non-positive max HP {}",
                    template.name,
                    template.attributes.max_hp
                );
            }
        }

        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_take_defaults() {
        let templates = CharacterLoader::parse(r#"[(name: "Alice")]"#).unwrap();

        assert_eq!(templates[0].universe, Universe::Arkana);
        assert_eq!(templates[0].attributes, BaseAttributes::default());
        assert_eq!(templates[0].starting_health(), 15);
    }

    #[test]
    fn explicit_attributes_are_read() {
        let content = r#"[(
            name: "Brom",
            universe: gor,
            attributes: (physical: 4, dexterity: 1, mental: 2, perception: 3, maxHp: 20),
            health: Some(12),
        )]"#;
        let templates = CharacterLoader::parse(content).unwrap();

        assert_eq!(templates[0].universe, Universe::Gor);
        assert_eq!(templates[0].attributes.max_hp, 20);
        assert_eq!(templates[0].starting_health(), 12);
    }
}
