//! Deterministic effect and live-stat rules shared across hosts.
//!
//! `arkana-core` defines the canonical effect lifecycle (turn decay, scene
//! end, self-deactivation) and the derived stat layers, and exposes pure APIs
//! that can be reused by the runtime and by offline tools. Every effect-list
//! change flows through [`engine::EffectEngine`], and supporting crates depend
//! on the types re-exported here.
pub mod config;
pub mod effect;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use config::EngineConfig;
#[cfg(feature = "serde")]
pub use effect::ActiveEffectRecord;
pub use effect::{
    ActiveEffect, DurationClass, EffectDuration, EffectError, EffectLifetime, ParseDurationError,
};
pub use engine::{
    Deactivation, EffectEngine, EffectPass, EffectUpdate, clear_scene_effects, deactivate_effect,
    process_turn, recalculate_live_stats,
};
pub use env::{EffectDefinition, EffectOracle, EffectTarget, ModifierValue, StatModifier};
pub use error::{ErrorSeverity, GameError};
pub use state::{CharacterEffects, CharacterId, Universe};
pub use stats::{
    Attribute, BaseAttributes, EffectiveAttributes, LiveStatValue, LiveStats, Vitals, VitalsUpdate,
};
