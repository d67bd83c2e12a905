use crate::effect::{DurationClass, EffectDuration};

/// Oracle providing effect definitions keyed by effect id.
///
/// Unknown ids are not an error: stored effects may reference catalog entries
/// that were removed since they were applied. Callers treat them as carrying
/// no stat deltas.
pub trait EffectOracle: Send + Sync {
    fn definition(&self, effect_id: &str) -> Option<&EffectDefinition>;

    /// Returns all definitions available in this oracle.
    fn all_definitions(&self) -> Vec<&EffectDefinition>;

    /// Duration class of a catalog entry, if the entry exists.
    fn duration_class(&self, effect_id: &str) -> Option<DurationClass> {
        self.definition(effect_id)
            .map(|definition| definition.duration.class())
    }
}

/// Static description of an effect.
///
/// # Design: Base + Modifiers Pattern
///
/// - `duration` drives decay policy of every instance
/// - `modifiers` are folded additively into the holder's live stats
/// - `target` documents who the effect may be applied to
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDefinition {
    pub id: String,
    pub name: String,
    pub duration: EffectDuration,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: EffectTarget,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: Vec<StatModifier>,
}

impl EffectDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration: EffectDuration) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            target: EffectTarget::default(),
            modifiers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: EffectTarget) -> Self {
        self.target = target;
        self
    }

    /// Adds a numeric delta (builder pattern).
    #[must_use]
    pub fn with_delta(mut self, stat: impl Into<String>, delta: i32) -> Self {
        self.modifiers.push(StatModifier {
            stat: stat.into(),
            value: ModifierValue::Delta(delta),
        });
        self
    }

    /// Adds a control-state flag (builder pattern).
    #[must_use]
    pub fn with_flag(mut self, stat: impl Into<String>, flag: impl Into<String>) -> Self {
        self.modifiers.push(StatModifier {
            stat: stat.into(),
            value: ModifierValue::Flag(flag.into()),
        });
        self
    }
}

/// Who an effect may be applied to.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectTarget {
    #[default]
    Caster,
    Ally,
    Enemy,
    Area,
}

/// One stat change carried by an effect definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: String,
    pub value: ModifierValue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierValue {
    /// Additive numeric delta (roll bonuses, attribute changes, `Health`).
    Delta(i32),
    /// Control-state flag such as `stun` or `fear`.
    Flag(String),
}
