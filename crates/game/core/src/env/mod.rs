//! Traits describing read-only effect data.
//!
//! The catalog of effect definitions is loaded once by the host and handed to
//! the engine as an [`EffectOracle`] reference. The engine never reaches into
//! ambient global state for it.
mod effects;

pub use effects::{EffectDefinition, EffectOracle, EffectTarget, ModifierValue, StatModifier};
