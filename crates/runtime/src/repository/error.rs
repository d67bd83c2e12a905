//! Error types raised by repository implementations.

use arkana_core::CharacterId;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("character repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("character {0} already exists")]
    AlreadyExists(CharacterId),

    #[error("character {0} is not stored")]
    Missing(CharacterId),

    /// Another writer committed since the record was loaded.
    #[error("character {id} changed concurrently: expected version {expected}, found {actual}")]
    VersionConflict {
        id: CharacterId,
        expected: u64,
        actual: u64,
    },
}

impl RepositoryError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::VersionConflict { .. })
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
