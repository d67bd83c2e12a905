//! [`arkana_core::EffectOracle`] backed by an in-memory map.
use arkana_core::{EffectDefinition, EffectOracle};
use std::collections::HashMap;

/// EffectOracle implementation with static effect definitions
pub struct EffectOracleImpl {
    definitions: HashMap<String, EffectDefinition>,
}

impl EffectOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = EffectDefinition>) -> Self {
        let mut oracle = Self::new();
        for definition in definitions {
            oracle.add_definition(definition);
        }
        oracle
    }

    /// Add an effect definition. A later definition replaces an earlier one
    /// with the same id.
    pub fn add_definition(&mut self, def: EffectDefinition) {
        self.definitions.insert(def.id.clone(), def);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for EffectOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectOracle for EffectOracleImpl {
    fn definition(&self, effect_id: &str) -> Option<&EffectDefinition> {
        self.definitions.get(effect_id)
    }

    fn all_definitions(&self) -> Vec<&EffectDefinition> {
        let mut definitions: Vec<_> = self.definitions.values().collect();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
    }
}
