//! Stat system for effect-bearing characters.
//!
//! # Architecture
//!
//! ```text
//! [ Base Attributes (Layer 1, stored) ]
//!      ↓
//! [ Live Stats (Layer 2, folded from active effects, cached) ]
//!      ↓
//! [ Effective Attributes / Vitals (Layer 3, computed on demand) ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Base attributes, base max HP and current health only
//! 2. **Unidirectional Flow**: Upper layers never depend on lower layers
//! 3. **Deterministic**: Pure functions, order-independent folds
//! 4. **Absent is not zero**: a stat with no contributing effect has no entry

pub mod attributes;
pub mod live;
pub mod vitals;

pub use attributes::{Attribute, BaseAttributes, EffectiveAttributes};
pub use live::{LiveStatValue, LiveStats};
pub use vitals::{Vitals, VitalsUpdate};
