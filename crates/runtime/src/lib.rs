//! Runtime orchestration for the effect engine.
//!
//! This crate wires the pure engine from `arkana-core` to oracle access and
//! character repositories. Consumers embed [`EffectService`] to run turns,
//! end scenes and cancel effects as atomic units of work.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the service and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod oracle;
pub mod repository;
pub mod runtime;

pub use api::{CharacterSheet, EffectReport, Result, RuntimeError};
pub use oracle::{EffectOracleImpl, OracleManager};
pub use repository::{
    CharacterRecord, CharacterRepository, CharacterStats, FileCharacterRepository,
    InMemoryCharacterRepo, RepositoryError,
};
pub use runtime::{EffectService, EffectServiceBuilder, RuntimeConfig};
