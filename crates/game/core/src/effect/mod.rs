//! Active effect model.
//!
//! Effects are stored on a character as an untyped JSON array. This module
//! parses that array once at the boundary into [`ActiveEffect`] values whose
//! [`EffectLifetime`] encodes the decay policy, so engine code never touches
//! raw `"turns:N"` strings.
mod active;
mod duration;
mod error;

pub use active::ActiveEffect;
#[cfg(feature = "serde")]
pub use active::ActiveEffectRecord;
pub use duration::{DurationClass, EffectDuration, EffectLifetime, ParseDurationError};
pub use error::EffectError;
