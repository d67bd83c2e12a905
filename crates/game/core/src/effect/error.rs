//! Errors raised by effect state transitions.

use super::duration::DurationClass;
use crate::error::{ErrorSeverity, GameError};

/// Precondition violations of the effect engine.
///
/// Display strings are surfaced verbatim to clients.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectError {
    /// The requested effect id is not in the character's active list.
    #[error("Effect not found in active effects")]
    NotFound { effect_id: String },

    /// Only scene effects can be cancelled by their owner.
    #[error("Cannot deactivate {class} effects")]
    InvalidState {
        effect_id: String,
        class: DurationClass,
    },

    /// The effect was applied by someone other than the requester.
    #[error("Cannot deactivate effects cast by others")]
    Forbidden { effect_id: String, caster: String },

    /// The catalog has no entry for the effect being applied.
    #[error("Unknown effect: {effect_id}")]
    UnknownEffect { effect_id: String },
}

impl EffectError {
    /// The effect id the failed operation targeted.
    pub fn effect_id(&self) -> &str {
        match self {
            Self::NotFound { effect_id }
            | Self::InvalidState { effect_id, .. }
            | Self::Forbidden { effect_id, .. }
            | Self::UnknownEffect { effect_id } => effect_id,
        }
    }
}

impl GameError for EffectError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } | Self::UnknownEffect { .. } => ErrorSeverity::NotFound,
            Self::InvalidState { .. } => ErrorSeverity::Validation,
            Self::Forbidden { .. } => ErrorSeverity::Forbidden,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "EFFECT_NOT_FOUND",
            Self::InvalidState { .. } => "EFFECT_INVALID_STATE",
            Self::Forbidden { .. } => "EFFECT_FORBIDDEN",
            Self::UnknownEffect { .. } => "EFFECT_UNKNOWN",
        }
    }
}
