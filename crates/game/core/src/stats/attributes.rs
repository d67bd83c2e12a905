//! Base Attributes - Layer 1 of the stat system.
//!
//! Base attributes are the only stored stats. Effects never write them;
//! they alter the effective values through live-stat deltas keyed by the
//! attribute name (`"Physical"`, `"Dexterity"`, `"Mental"`, `"Perception"`).

use super::live::LiveStats;
use crate::config::EngineConfig;

/// The four roleplay attributes plus base maximum HP.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BaseAttributes {
    pub physical: i32,
    pub dexterity: i32,
    pub mental: i32,
    pub perception: i32,
    /// Max HP before any `Health` delta.
    pub max_hp: i32,
}

impl BaseAttributes {
    pub const fn new(physical: i32, dexterity: i32, mental: i32, perception: i32, max_hp: i32) -> Self {
        Self {
            physical,
            dexterity,
            mental,
            perception,
            max_hp,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Physical => self.physical,
            Attribute::Dexterity => self.dexterity,
            Attribute::Mental => self.mental,
            Attribute::Perception => self.perception,
        }
    }
}

impl Default for BaseAttributes {
    /// Fresh character: every attribute at 2, 15 HP.
    fn default() -> Self {
        Self::new(2, 2, 2, 2, 15)
    }
}

/// Attribute names as they appear in live-stat keys.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    Physical,
    Dexterity,
    Mental,
    Perception,
}

/// Attributes after live-stat deltas, for read paths.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EffectiveAttributes {
    pub physical: i32,
    pub dexterity: i32,
    pub mental: i32,
    pub perception: i32,
    pub max_hp: i32,
}

impl EffectiveAttributes {
    /// Folds attribute deltas onto the base values.
    ///
    /// Attributes floor at zero; max HP floors at `config.min_max_hp`.
    pub fn compute(base: &BaseAttributes, live: &LiveStats, config: &EngineConfig) -> Self {
        let apply = |attribute: Attribute| {
            let delta = live.number(attribute.as_ref()).unwrap_or(0);
            base.get(attribute).saturating_add(delta).max(0)
        };

        Self {
            physical: apply(Attribute::Physical),
            dexterity: apply(Attribute::Dexterity),
            mental: apply(Attribute::Mental),
            perception: apply(Attribute::Perception),
            max_hp: live.effective_max_hp(base.max_hp, config),
        }
    }

    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Physical => self.physical,
            Attribute::Dexterity => self.dexterity,
            Attribute::Mental => self.mental,
            Attribute::Perception => self.perception,
        }
    }
}
