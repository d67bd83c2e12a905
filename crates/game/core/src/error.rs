//! Common error infrastructure for arkana-core.
//!
//! Domain-specific errors (e.g. [`crate::effect::EffectError`]) are defined in
//! their respective modules alongside the operations they validate. This
//! module provides the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error type
//! - **Terminal**: Engine errors are detected locally and never retried
//! - **Stable Codes**: Every variant maps to a static error code for callers

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Caller referenced something that does not exist.
    ///
    /// Examples: character absent, effect not in the active list
    NotFound,

    /// Caller is not allowed to perform the operation.
    ///
    /// Examples: deactivating an effect cast by another character
    Forbidden,

    /// Invalid input or precondition, should not retry without changes.
    ///
    /// Examples: deactivating a turn-based effect, malformed duration
    Validation,

    /// Unexpected inconsistency in stored data. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Forbidden => "forbidden",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all arkana-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by what the caller must do, not by impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
