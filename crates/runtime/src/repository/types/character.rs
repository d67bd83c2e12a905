//! Stored character row.
//!
//! Mirrors the persisted shape the effect engine reads and writes:
//!
//! ```text
//! character_{id}.json
//! ├── attributes      base attributes + base max HP (never touched by effects)
//! ├── stats           current health + effective max HP
//! ├── activeEffects   camelCase effect records
//! └── liveStats       cached fold of activeEffects
//! ```

use arkana_content::CharacterTemplate;
use arkana_core::{
    ActiveEffect, ActiveEffectRecord, BaseAttributes, CharacterEffects, CharacterId,
    EffectUpdate, LiveStats, Universe, Vitals,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Current health and its cap, stored side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStats {
    pub health: i32,
    pub max_hp: i32,
}

impl From<Vitals> for CharacterStats {
    fn from(vitals: Vitals) -> Self {
        Self {
            health: vitals.health,
            max_hp: vitals.max_hp,
        }
    }
}

/// A registered character as persisted by a [`crate::repository::CharacterRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub universe: Universe,
    pub attributes: BaseAttributes,
    pub stats: CharacterStats,
    #[serde(default, deserialize_with = "deserialize_active_effects")]
    pub active_effects: Vec<ActiveEffect>,
    #[serde(default)]
    pub live_stats: LiveStats,
    /// Bumped by the repository on every committed update.
    #[serde(default)]
    pub version: u64,
}

/// Decodes `activeEffects`, recovering entries whose duration does not parse
/// via [`ActiveEffectRecord::recover`].
fn deserialize_active_effects<'de, D>(deserializer: D) -> Result<Vec<ActiveEffect>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Vec::<ActiveEffectRecord>::deserialize(deserializer)?;
    Ok(records
        .into_iter()
        .map(|record| match ActiveEffect::try_from(record.clone()) {
            Ok(effect) => effect,
            Err(err) => {
                tracing::warn!(
                    "Recovering active effect {}: {}",
                    record.effect_id,
                    err
                );
                record.recover()
            }
        })
        .collect())
}

impl CharacterRecord {
    /// Fresh record for a newly registered character: no effects.
    pub fn from_template(id: CharacterId, template: &CharacterTemplate) -> Self {
        let max_hp = template.attributes.max_hp;
        Self {
            id,
            name: template.name.clone(),
            universe: template.universe,
            attributes: template.attributes.clone(),
            stats: CharacterStats {
                health: template.starting_health().min(max_hp),
                max_hp,
            },
            active_effects: Vec::new(),
            live_stats: LiveStats::new(),
            version: 0,
        }
    }

    /// The slice of this record the engine reads.
    pub fn effects_snapshot(&self) -> CharacterEffects {
        CharacterEffects::new(
            self.attributes.clone(),
            self.stats.health,
            self.active_effects.clone(),
        )
    }

    /// Writes an engine result back: effects, live stats and vitals together.
    pub fn apply_update(&mut self, update: &EffectUpdate) {
        self.active_effects = update.active_effects.clone();
        self.live_stats = update.live_stats.clone();
        self.stats = update.vitals.vitals.into();
    }

    pub fn find_effect(&self, effect_id: &str) -> Option<&ActiveEffect> {
        self.active_effects
            .iter()
            .find(|effect| effect.effect_id == effect_id)
    }
}
