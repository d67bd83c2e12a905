//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML data files a host reads
//! before running the effect engine:
//! - Effect catalog (data-driven via RON)
//! - Character fixtures (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in character
//! state. All loaders use arkana-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterLoader, CharacterTemplate, ConfigLoader, ContentFactory, EffectCatalogFile,
    EffectLoader,
};
