//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration or infrastructure.

pub mod errors;
pub mod report;

pub use errors::{Result, RuntimeError};
pub use report::{CharacterSheet, EffectReport};
