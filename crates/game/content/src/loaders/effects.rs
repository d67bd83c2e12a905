//! Effect catalog loader.

use std::collections::HashSet;
use std::path::Path;

use arkana_core::EffectDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Effect catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectCatalogFile {
    pub effects: Vec<EffectDefinition>,
}

/// Loader for the effect catalog from RON files.
pub struct EffectLoader;

impl EffectLoader {
    /// Load effect definitions from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an `EffectCatalogFile`
    pub fn load(path: &Path) -> LoadResult<Vec<EffectDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a catalog and reject duplicate or blank ids.
    pub fn parse(content: &str) -> LoadResult<Vec<EffectDefinition>> {
        let catalog: EffectCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effect catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for definition in &catalog.effects {
            if definition.id.trim().is_empty() {
                anyhow::bail!("Effect '{}' has a blank id", definition.name);
            }
            if !seen.insert(definition.id.as_str()) {
                anyhow::bail!("Duplicate effect id '{}'", definition.id);
            }
        }

        Ok(catalog.effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkana_core::{EffectDuration, EffectTarget, ModifierValue};

    const CATALOG: &str = r#"(
        effects: [
            (
                id: "arkana_ward",
                name: "Ward",
                duration: "scene",
                target: Ally,
                modifiers: [
                    (stat: "Health", value: Delta(10)),
                    (stat: "fear", value: Flag("immune")),
                ],
            ),
            (
                id: "arkana_haste",
                name: "Haste",
                duration: "turns:3",
            ),
        ],
    )"#;

    #[test]
    fn parses_durations_and_modifiers() {
        let effects = EffectLoader::parse(CATALOG).unwrap();

        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].duration, EffectDuration::Scene);
        assert_eq!(effects[0].target, EffectTarget::Ally);
        assert_eq!(effects[0].modifiers[0].value, ModifierValue::Delta(10));
        assert_eq!(effects[1].duration, EffectDuration::Turns(3));
        assert_eq!(effects[1].target, EffectTarget::Caster);
        assert!(effects[1].modifiers.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let content = r#"(effects: [
            (id: "a", name: "A", duration: "scene"),
            (id: "a", name: "B", duration: "permanent"),
        ])"#;

        let err = EffectLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("Duplicate effect id 'a'"));
    }

    #[test]
    fn malformed_duration_is_rejected() {
        let content = r#"(effects: [(id: "a", name: "A", duration: "turns:0")])"#;
        assert!(EffectLoader::parse(content).is_err());
    }
}
