//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use arkana_runtime::RuntimeConfig;

/// Configuration for the `arkana` binary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding `effects.ron`, `characters.ron`, `config.toml`.
    pub data_dir: Option<PathBuf>,
    /// Directory holding character records.
    pub save_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    pub max_conflict_retries: Option<u32>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARKANA_DATA_DIR` - Content directory (default: `./data`)
    /// - `ARKANA_SAVE_DIR` - Character records (default: platform-specific)
    /// - `ARKANA_SESSION_ID` - Log session name (default: auto-generated)
    /// - `ARKANA_MAX_RETRIES` - Conflict retries per operation (default: 16)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            data_dir: read("ARKANA_DATA_DIR").map(PathBuf::from),
            save_dir: read("ARKANA_SAVE_DIR").map(PathBuf::from),
            session_id: read("ARKANA_SESSION_ID"),
            max_conflict_retries: read("ARKANA_MAX_RETRIES").and_then(|value| value.parse().ok()),
        }
    }

    pub fn runtime_config(&self, engine: arkana_core::EngineConfig) -> RuntimeConfig {
        RuntimeConfig {
            engine,
            max_conflict_retries: self
                .max_conflict_retries
                .unwrap_or(RuntimeConfig::DEFAULT_MAX_CONFLICT_RETRIES),
        }
    }
}
