use chrono::{DateTime, Utc};

use super::duration::{DurationClass, EffectLifetime};
use crate::env::EffectDefinition;

/// An effect currently applied to a character.
///
/// `name` is the catalog name denormalized at application time; the catalog
/// entry may since have been renamed or removed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "ActiveEffectRecord", into = "ActiveEffectRecord")
)]
pub struct ActiveEffect {
    pub effect_id: String,
    pub name: String,
    pub lifetime: EffectLifetime,
    /// Informational only; never used for decay.
    pub applied_at: Option<DateTime<Utc>>,
    /// `None` means self-cast.
    pub caster: Option<String>,
}

impl ActiveEffect {
    pub fn new(
        effect_id: impl Into<String>,
        name: impl Into<String>,
        lifetime: EffectLifetime,
    ) -> Self {
        Self {
            effect_id: effect_id.into(),
            name: name.into(),
            lifetime,
            applied_at: None,
            caster: None,
        }
    }

    /// Instantiates a catalog definition with a full countdown.
    pub fn from_definition(
        definition: &EffectDefinition,
        caster: Option<&str>,
        applied_at: DateTime<Utc>,
    ) -> Self {
        Self {
            effect_id: definition.id.clone(),
            name: definition.name.clone(),
            lifetime: EffectLifetime::from_duration(definition.duration),
            applied_at: Some(applied_at),
            caster: normalize_caster(caster),
        }
    }

    /// Sets the caster (builder pattern).
    #[must_use]
    pub fn with_caster(mut self, caster: impl AsRef<str>) -> Self {
        self.caster = normalize_caster(Some(caster.as_ref()));
        self
    }

    /// Sets the application timestamp (builder pattern).
    #[must_use]
    pub fn with_applied_at(mut self, applied_at: DateTime<Utc>) -> Self {
        self.applied_at = Some(applied_at);
        self
    }

    pub const fn class(&self) -> DurationClass {
        self.lifetime.class()
    }

    /// True when someone other than `requester` applied this effect.
    pub fn is_cast_by_other(&self, requester: &str) -> bool {
        self.caster
            .as_deref()
            .is_some_and(|caster| caster != requester)
    }
}

fn normalize_caster(caster: Option<&str>) -> Option<String> {
    caster
        .map(str::trim)
        .filter(|caster| !caster.is_empty())
        .map(str::to_string)
}

/// Stored JSON shape of an active effect.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEffectRecord {
    pub effect_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns_left: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caster_name: Option<String>,
}

#[cfg(feature = "serde")]
impl ActiveEffectRecord {
    /// Best-effort conversion for a record whose `duration` does not parse.
    ///
    /// The lifetime is inferred from `turnsLeft`: the scene sentinel maps to
    /// scene, any other count to a turn countdown, and a missing count to
    /// permanent. Well-formed records convert exactly as with `try_from`.
    pub fn recover(self) -> ActiveEffect {
        use crate::config::EngineConfig;

        if let Ok(effect) = ActiveEffect::try_from(self.clone()) {
            return effect;
        }

        let lifetime = match self.turns_left {
            Some(left) if left == i64::from(EngineConfig::SCENE_TURNS_SENTINEL) => {
                EffectLifetime::Scene
            }
            Some(left) => {
                let left = u32::try_from(left.max(0)).unwrap_or(u32::MAX);
                EffectLifetime::Turns {
                    total: left.max(1),
                    left,
                }
            }
            None => EffectLifetime::Permanent,
        };

        ActiveEffect {
            effect_id: self.effect_id,
            name: self.name,
            lifetime,
            applied_at: self.applied_at,
            caster: normalize_caster(self.caster_name.as_deref()),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ActiveEffectRecord> for ActiveEffect {
    type Error = super::ParseDurationError;

    fn try_from(record: ActiveEffectRecord) -> Result<Self, Self::Error> {
        use super::EffectDuration;

        let duration = EffectDuration::parse_optional(record.duration.as_deref())?;
        let lifetime = match duration {
            EffectDuration::Scene => EffectLifetime::Scene,
            EffectDuration::Turns(total) => {
                let left = match record.turns_left {
                    Some(left) => u32::try_from(left.max(0)).unwrap_or(u32::MAX),
                    None => total,
                };
                EffectLifetime::Turns { total, left }
            }
            EffectDuration::Permanent => EffectLifetime::Permanent,
        };

        Ok(Self {
            effect_id: record.effect_id,
            name: record.name,
            lifetime,
            applied_at: record.applied_at,
            caster: normalize_caster(record.caster_name.as_deref()),
        })
    }
}

#[cfg(feature = "serde")]
impl From<ActiveEffect> for ActiveEffectRecord {
    fn from(effect: ActiveEffect) -> Self {
        use crate::config::EngineConfig;

        let turns_left = match effect.lifetime {
            EffectLifetime::Scene => Some(i64::from(EngineConfig::SCENE_TURNS_SENTINEL)),
            EffectLifetime::Turns { left, .. } => Some(i64::from(left)),
            EffectLifetime::Permanent => None,
        };

        Self {
            effect_id: effect.effect_id,
            name: effect.name,
            duration: Some(effect.lifetime.duration().to_string()),
            turns_left,
            applied_at: effect.applied_at,
            caster_name: effect.caster,
        }
    }
}
