//! Character-side state consumed by the effect engine.
//!
//! The engine never owns character storage. Hosts build a
//! [`CharacterEffects`] snapshot from their stored row, run the engine, and
//! write the resulting update back in one unit of work.
mod character;

pub use character::{CharacterEffects, CharacterId, Universe};
