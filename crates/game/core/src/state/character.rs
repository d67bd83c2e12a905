use std::fmt;

use crate::effect::ActiveEffect;
use crate::stats::BaseAttributes;

/// Unique identifier of a registered character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharacterId(pub u64);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Roleplay universe a character belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Universe {
    #[default]
    Arkana,
    Gor,
}

/// The slice of a character the engine reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterEffects {
    pub attributes: BaseAttributes,
    /// Current health, stored on the character's stats record.
    pub health: i32,
    pub active_effects: Vec<ActiveEffect>,
}

impl CharacterEffects {
    pub fn new(attributes: BaseAttributes, health: i32, active_effects: Vec<ActiveEffect>) -> Self {
        Self {
            attributes,
            health,
            active_effects,
        }
    }

    pub fn find(&self, effect_id: &str) -> Option<&ActiveEffect> {
        self.active_effects
            .iter()
            .find(|effect| effect.effect_id == effect_id)
    }
}
