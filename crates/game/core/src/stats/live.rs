//! Live Stats - Layer 2 of the stat system.
//!
//! Live stats are the net modifiers of every active effect, keyed by stat
//! name. They are fully derived: any change to a character's effect list
//! must recompute them and overwrite the cached copy in the same update.
//!
//! Fold rules (commutative, so effect order never matters):
//! - `Delta + Delta` → sum
//! - `Flag + Flag` → set union
//! - `Delta + Flag` → the flags win (a control state overrides a number)

use std::collections::{BTreeMap, BTreeSet};

use crate::config::EngineConfig;
use crate::effect::ActiveEffect;
use crate::env::{EffectOracle, ModifierValue};

/// A single live-stat entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LiveStatValue {
    Number(i32),
    Flags(BTreeSet<String>),
}

impl LiveStatValue {
    /// Combines two contributions to the same stat.
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Self::Number(a.saturating_add(b)),
            (Self::Flags(mut a), Self::Flags(b)) => {
                a.extend(b);
                Self::Flags(a)
            }
            (flags @ Self::Flags(_), Self::Number(_)) | (Self::Number(_), flags @ Self::Flags(_)) => {
                flags
            }
        }
    }

    pub fn as_number(&self) -> Option<i32> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Flags(_) => None,
        }
    }
}

impl From<&ModifierValue> for LiveStatValue {
    fn from(value: &ModifierValue) -> Self {
        match value {
            ModifierValue::Delta(delta) => Self::Number(*delta),
            ModifierValue::Flag(flag) => Self::Flags(BTreeSet::from([flag.clone()])),
        }
    }
}

/// Net modifiers of a character's active effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LiveStats {
    stats: BTreeMap<String, LiveStatValue>,
}

impl LiveStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds the catalog deltas of `effects` into a fresh snapshot.
    ///
    /// Effects whose id is missing from the catalog contribute nothing.
    pub fn recalculate<C>(effects: &[ActiveEffect], catalog: &C) -> Self
    where
        C: EffectOracle + ?Sized,
    {
        let mut live = Self::new();
        for effect in effects {
            let Some(definition) = catalog.definition(&effect.effect_id) else {
                continue;
            };
            for modifier in &definition.modifiers {
                live.insert(modifier.stat.as_str(), LiveStatValue::from(&modifier.value));
            }
        }
        live
    }

    /// Accumulates a contribution into `stat`.
    pub fn insert(&mut self, stat: impl Into<String>, value: LiveStatValue) {
        let stat = stat.into();
        let merged = match self.stats.remove(&stat) {
            Some(existing) => existing.merge(value),
            None => value,
        };
        self.stats.insert(stat, merged);
    }

    pub fn get(&self, stat: &str) -> Option<&LiveStatValue> {
        self.stats.get(stat)
    }

    /// Numeric modifier for `stat`; `None` means no override.
    pub fn number(&self, stat: &str) -> Option<i32> {
        self.get(stat).and_then(LiveStatValue::as_number)
    }

    /// True when any active effect raised control flag `flag` on `stat`.
    pub fn has_flag(&self, stat: &str, flag: &str) -> bool {
        matches!(self.get(stat), Some(LiveStatValue::Flags(flags)) if flags.contains(flag))
    }

    /// Sum of all active `Health` deltas (temporary max HP change).
    pub fn health_delta(&self) -> i32 {
        self.number(EngineConfig::HEALTH_STAT).unwrap_or(0)
    }

    /// Base max HP adjusted by the `Health` delta, floored by config.
    pub fn effective_max_hp(&self, base_max_hp: i32, config: &EngineConfig) -> i32 {
        base_max_hp
            .saturating_add(self.health_delta())
            .max(config.min_max_hp)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LiveStatValue)> {
        self.stats.iter().map(|(stat, value)| (stat.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
