//! Effect service: the unit of work around the pure engine.
//!
//! Every operation loads one character, runs the engine on a snapshot, and
//! commits effects, live stats and vitals in a single versioned write. A
//! concurrent writer makes the commit fail with a version conflict, in which
//! case the whole load/compute/commit cycle is retried from fresh state, so
//! no decrement is ever lost and nothing is partially written.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use arkana_content::CharacterTemplate;
use arkana_core::{
    CharacterEffects, CharacterId, EffectEngine, EffectError, EffectUpdate, EngineConfig,
};

use crate::api::{CharacterSheet, EffectReport, Result, RuntimeError};
use crate::oracle::{EffectOracleImpl, OracleManager};
use crate::repository::{CharacterRecord, CharacterRepository, RepositoryError};

/// Runtime configuration shared across the service and engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    /// Extra attempts after a version conflict before giving up.
    pub max_conflict_retries: u32,
}

impl RuntimeConfig {
    pub const DEFAULT_MAX_CONFLICT_RETRIES: u32 = 16;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            max_conflict_retries: Self::DEFAULT_MAX_CONFLICT_RETRIES,
        }
    }
}

/// Loads, transforms and commits character effect state.
///
/// Cheap to clone; clones share the catalog and the repository.
#[derive(Clone)]
pub struct EffectService {
    oracles: OracleManager,
    repository: Arc<dyn CharacterRepository>,
    config: RuntimeConfig,
}

impl EffectService {
    /// Create a new service builder
    pub fn builder() -> EffectServiceBuilder {
        EffectServiceBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn repository(&self) -> &Arc<dyn CharacterRepository> {
        &self.repository
    }

    /// Stores a new character built from `template` under the next free id.
    pub fn register(&self, template: &CharacterTemplate) -> Result<CharacterRecord> {
        let mut attempts = 0;
        loop {
            let id = self.repository.next_id()?;
            let record = CharacterRecord::from_template(id, template);

            match self.repository.insert(&record) {
                Ok(()) => {
                    info!("Registered character {} ({})", record.name, id);
                    return Ok(record);
                }
                Err(RepositoryError::AlreadyExists(_)) if attempts < self.config.max_conflict_retries => {
                    attempts += 1;
                    debug!("Id {} taken concurrently, retrying registration", id);
                }
                Err(RepositoryError::AlreadyExists(_)) => {
                    return Err(RuntimeError::ConflictRetriesExhausted {
                        id,
                        attempts: attempts + 1,
                    });
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Read view with effective attributes.
    pub fn character(&self, id: CharacterId) -> Result<CharacterSheet> {
        let record = self.load(id)?;
        Ok(CharacterSheet::new(record, &self.config.engine))
    }

    /// All stored characters in id order.
    pub fn characters(&self) -> Result<Vec<CharacterSheet>> {
        self.repository
            .list_ids()?
            .into_iter()
            .map(|id| self.character(id))
            .collect()
    }

    /// A turn-consuming action occurred for the character.
    pub fn use_turn(&self, id: CharacterId) -> Result<EffectReport> {
        self.commit(id, "use_turn", |engine, character| {
            Ok(engine.use_turn(character))
        })
    }

    /// The character's scene ended.
    pub fn end_scene(&self, id: CharacterId) -> Result<EffectReport> {
        self.commit(id, "end_scene", |engine, character| {
            Ok(engine.end_scene(character))
        })
    }

    /// The character cancels one of its own scene effects.
    ///
    /// `requester` is the character's display name, compared against the
    /// effect's caster.
    pub fn deactivate(
        &self,
        id: CharacterId,
        effect_id: &str,
        requester: &str,
    ) -> Result<EffectReport> {
        self.commit(id, "deactivate", |engine, character| {
            engine.deactivate(character, effect_id, requester)
        })
    }

    /// Self-deactivation where the requester is the stored character name.
    pub fn deactivate_own(&self, id: CharacterId, effect_id: &str) -> Result<EffectReport> {
        let name = self.load(id)?.name;
        self.deactivate(id, effect_id, &name)
    }

    /// Applies catalog effect `effect_id`, cast by `caster` (`None` = self).
    pub fn apply(
        &self,
        id: CharacterId,
        effect_id: &str,
        caster: Option<&str>,
    ) -> Result<EffectReport> {
        let now = Utc::now();
        self.commit(id, "apply", |engine, character| {
            engine.apply(character, effect_id, caster, now)
        })
    }

    /// Recomputes cached live stats and vitals from the stored effect list.
    pub fn refresh(&self, id: CharacterId) -> Result<EffectReport> {
        self.commit(id, "refresh", |engine, character| Ok(engine.refresh(character)))
    }

    fn load(&self, id: CharacterId) -> Result<CharacterRecord> {
        self.repository
            .load(id)?
            .ok_or(RuntimeError::CharacterNotFound(id))
    }

    /// Load, run `operation`, commit; retry the whole cycle on conflict.
    ///
    /// Engine errors abort immediately without writing.
    fn commit<F>(&self, id: CharacterId, label: &'static str, operation: F) -> Result<EffectReport>
    where
        F: Fn(
            &EffectEngine<'_, EffectOracleImpl>,
            &CharacterEffects,
        ) -> std::result::Result<EffectUpdate, EffectError>,
    {
        let engine = self.oracles.engine(&self.config.engine);
        let mut attempts = 0;

        loop {
            let mut record = self.load(id)?;
            let expected_version = record.version;

            let update = operation(&engine, &record.effects_snapshot()).inspect_err(|err| {
                debug!("{} rejected for character {}: {}", label, id, err);
            })?;
            record.apply_update(&update);

            match self.repository.update(&record, expected_version) {
                Ok(version) => {
                    let report = EffectReport::new(id, &update, version);
                    info!(
                        "{} committed for character {} (removed: {}, remaining: {}, hp: {}/{}, v{})",
                        label,
                        id,
                        report.effects_removed,
                        report.effects_remaining,
                        report.health,
                        report.max_hp,
                        version
                    );
                    return Ok(report);
                }
                Err(err) if err.is_conflict() && attempts < self.config.max_conflict_retries => {
                    attempts += 1;
                    warn!("{} for character {} hit {}; retry {}", label, id, err, attempts);
                }
                Err(err) if err.is_conflict() => {
                    return Err(RuntimeError::ConflictRetriesExhausted {
                        id,
                        attempts: attempts + 1,
                    });
                }
                Err(RepositoryError::Missing(missing)) => {
                    return Err(RuntimeError::CharacterNotFound(missing));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// Builder for [`EffectService`].
pub struct EffectServiceBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    repository: Option<Arc<dyn CharacterRepository>>,
}

impl EffectServiceBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set required character repository
    pub fn repository(mut self, repository: Arc<dyn CharacterRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(self) -> Result<EffectService> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let repository = self.repository.ok_or(RuntimeError::MissingRepository)?;

        Ok(EffectService {
            oracles,
            repository,
            config: self.config,
        })
    }
}
