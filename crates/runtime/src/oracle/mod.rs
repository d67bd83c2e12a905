//! Runtime wrappers around static effect content.
//!
//! The catalog is loaded once by the host and bundled into an
//! [`OracleManager`], which hands out [`arkana_core::EffectEngine`] instances
//! on demand. The data is immutable at runtime; dynamic state lives in
//! repositories.
mod effects;

use std::sync::Arc;

use arkana_core::{EffectDefinition, EffectEngine, EngineConfig};

pub use effects::EffectOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) effects: Arc<EffectOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(effects: Arc<EffectOracleImpl>) -> Self {
        Self { effects }
    }

    /// Builds the effect oracle from loaded catalog entries
    pub fn from_definitions(definitions: impl IntoIterator<Item = EffectDefinition>) -> Self {
        Self::new(Arc::new(EffectOracleImpl::from_definitions(definitions)))
    }

    /// Binds an engine to the effect catalog
    pub fn engine(&self, config: &EngineConfig) -> EffectEngine<'_, EffectOracleImpl> {
        EffectEngine::new(self.effects.as_ref(), config.clone())
    }

    /// Get access to the effect oracle
    pub fn effects(&self) -> &EffectOracleImpl {
        &self.effects
    }
}
