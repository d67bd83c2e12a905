//! In-memory CharacterRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use arkana_core::CharacterId;

use crate::repository::{CharacterRecord, CharacterRepository, RepositoryError, Result};

/// In-memory implementation of CharacterRepository.
///
/// The version check and the write happen under one write lock, so
/// concurrent updates from many threads serialize cleanly.
pub struct InMemoryCharacterRepo {
    characters: RwLock<BTreeMap<CharacterId, CharacterRecord>>,
}

impl InMemoryCharacterRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            characters: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let characters = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        Self {
            characters: RwLock::new(characters),
        }
    }
}

impl Default for InMemoryCharacterRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRepository for InMemoryCharacterRepo {
    fn load(&self, id: CharacterId) -> Result<Option<CharacterRecord>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.get(&id).cloned())
    }

    fn insert(&self, record: &CharacterRecord) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if characters.contains_key(&record.id) {
            return Err(RepositoryError::AlreadyExists(record.id));
        }

        let mut record = record.clone();
        record.version = 0;
        characters.insert(record.id, record);
        Ok(())
    }

    fn update(&self, record: &CharacterRecord, expected_version: u64) -> Result<u64> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let stored = characters
            .get_mut(&record.id)
            .ok_or(RepositoryError::Missing(record.id))?;

        if stored.version != expected_version {
            return Err(RepositoryError::VersionConflict {
                id: record.id,
                expected: expected_version,
                actual: stored.version,
            });
        }

        let version = expected_version + 1;
        *stored = CharacterRecord {
            version,
            ..record.clone()
        };
        Ok(version)
    }

    fn delete(&self, id: CharacterId) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters.remove(&id);
        Ok(())
    }

    fn exists(&self, id: CharacterId) -> bool {
        self.characters
            .read()
            .map(|characters| characters.contains_key(&id))
            .unwrap_or(false)
    }

    fn list_ids(&self) -> Result<Vec<CharacterId>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.keys().copied().collect())
    }
}
