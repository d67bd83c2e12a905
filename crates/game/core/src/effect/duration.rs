//! Duration classes and their string wire form.
//!
//! Catalog definitions and stored effects both spell durations as strings:
//! `"scene"`, `"turns:N"` or `"permanent"` (an absent duration is permanent).

use core::fmt;
use core::str::FromStr;

use crate::error::{ErrorSeverity, GameError};

/// Decay policy of an effect, without any counter state.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DurationClass {
    /// Lasts until the scene ends or the owner cancels it.
    #[strum(serialize = "scene")]
    Scene,
    /// Counts down once per used turn.
    #[strum(serialize = "turn-based")]
    Turns,
    /// Never expires on its own.
    #[strum(serialize = "permanent")]
    Permanent,
}

impl DurationClass {
    /// Returns true for classes removed at the end of a scene.
    pub const fn is_temporary(&self) -> bool {
        !matches!(self, Self::Permanent)
    }
}

/// Duration template as written in the effect catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum EffectDuration {
    Scene,
    Turns(u32),
    Permanent,
}

impl EffectDuration {
    pub const fn class(&self) -> DurationClass {
        match self {
            Self::Scene => DurationClass::Scene,
            Self::Turns(_) => DurationClass::Turns,
            Self::Permanent => DurationClass::Permanent,
        }
    }

    /// Parses an optional wire duration; `None` means permanent.
    pub fn parse_optional(raw: Option<&str>) -> Result<Self, ParseDurationError> {
        match raw {
            Some(raw) => raw.parse(),
            None => Ok(Self::Permanent),
        }
    }
}

impl FromStr for EffectDuration {
    type Err = ParseDurationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("permanent") {
            return Ok(Self::Permanent);
        }
        if trimmed.eq_ignore_ascii_case("scene") {
            return Ok(Self::Scene);
        }

        let (prefix, count) = trimmed
            .split_once(':')
            .ok_or_else(|| ParseDurationError::Unknown(raw.to_string()))?;
        if !prefix.trim().eq_ignore_ascii_case("turns") {
            return Err(ParseDurationError::Unknown(raw.to_string()));
        }

        match count.trim().parse::<u32>() {
            Ok(turns) if turns > 0 => Ok(Self::Turns(turns)),
            _ => Err(ParseDurationError::InvalidTurnCount(raw.to_string())),
        }
    }
}

impl fmt::Display for EffectDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scene => f.pad("scene"),
            Self::Turns(turns) => f.pad(&format!("turns:{turns}")),
            Self::Permanent => f.pad("permanent"),
        }
    }
}

impl TryFrom<String> for EffectDuration {
    type Error = ParseDurationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<EffectDuration> for String {
    fn from(duration: EffectDuration) -> Self {
        duration.to_string()
    }
}

/// Lifetime of an applied effect, including its countdown.
///
/// `Turns::left` reaching zero means the effect is removed on the turn that
/// produced it; a stored zero is dropped on the next turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectLifetime {
    Scene,
    Turns { total: u32, left: u32 },
    Permanent,
}

impl EffectLifetime {
    /// Fresh lifetime for a newly applied effect.
    pub const fn from_duration(duration: EffectDuration) -> Self {
        match duration {
            EffectDuration::Scene => Self::Scene,
            EffectDuration::Turns(turns) => Self::Turns {
                total: turns,
                left: turns,
            },
            EffectDuration::Permanent => Self::Permanent,
        }
    }

    pub const fn class(&self) -> DurationClass {
        match self {
            Self::Scene => DurationClass::Scene,
            Self::Turns { .. } => DurationClass::Turns,
            Self::Permanent => DurationClass::Permanent,
        }
    }

    /// The duration template this lifetime was created from.
    pub const fn duration(&self) -> EffectDuration {
        match self {
            Self::Scene => EffectDuration::Scene,
            Self::Turns { total, .. } => EffectDuration::Turns(*total),
            Self::Permanent => EffectDuration::Permanent,
        }
    }

    /// Remaining turns for turn-based effects.
    pub const fn turns_left(&self) -> Option<u32> {
        match self {
            Self::Turns { left, .. } => Some(*left),
            _ => None,
        }
    }
}

/// Errors raised while parsing a wire duration string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDurationError {
    #[error("unknown effect duration '{0}'")]
    Unknown(String),

    #[error("invalid turn count in effect duration '{0}'")]
    InvalidTurnCount(String),
}

impl GameError for ParseDurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "DURATION_UNKNOWN",
            Self::InvalidTurnCount(_) => "DURATION_INVALID_TURN_COUNT",
        }
    }
}
