//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the effect engine and repositories so clients can
//! bubble them up with consistent context.
use arkana_core::{CharacterId, EffectError, ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Engine precondition failure. Display is the client-facing message.
    #[error(transparent)]
    Effect(#[from] EffectError),

    #[error("Character not found")]
    CharacterNotFound(CharacterId),

    #[error("character {id} kept changing concurrently; gave up after {attempts} attempts")]
    ConflictRetriesExhausted { id: CharacterId, attempts: u32 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("effect service requires oracles to be configured before building")]
    MissingOracles,

    #[error("effect service requires a character repository before building")]
    MissingRepository,
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Effect(err) => err.severity(),
            Self::CharacterNotFound(_) => ErrorSeverity::NotFound,
            Self::ConflictRetriesExhausted { .. }
            | Self::Repository(_)
            | Self::MissingOracles
            | Self::MissingRepository => ErrorSeverity::Internal,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Effect(err) => err.error_code(),
            Self::CharacterNotFound(_) => "CHARACTER_NOT_FOUND",
            Self::ConflictRetriesExhausted { .. } => "CONFLICT_RETRIES_EXHAUSTED",
            Self::Repository(_) => "REPOSITORY_ERROR",
            Self::MissingOracles | Self::MissingRepository => "SERVICE_MISCONFIGURED",
        }
    }
}
