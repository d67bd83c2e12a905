//! File-based CharacterRepository implementation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use arkana_core::CharacterId;
use fd_lock::RwLock;

use crate::repository::{CharacterRecord, CharacterRepository, RepositoryError, Result};

/// File-based implementation of CharacterRepository.
///
/// Stores each character as `character_{id}.json` in camelCase JSON, the
/// same shape a database row would carry.
///
/// Writes go to a uniquely named temp file first and are renamed into place,
/// so a reader never observes a half-written record. Every mutation holds an
/// exclusive OS lock on `character_{id}.lock` from the version check to the
/// rename, which serializes writers across repository instances and
/// processes sharing the directory.
pub struct FileCharacterRepository {
    base_dir: PathBuf,
}

impl FileCharacterRepository {
    /// Create a new file-based character repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a character file.
    fn character_path(&self, id: CharacterId) -> PathBuf {
        self.base_dir.join(format!("character_{}.json", id.0))
    }

    fn lock_path(&self, id: CharacterId) -> PathBuf {
        self.base_dir.join(format!("character_{}.lock", id.0))
    }

    /// Runs `critical` while holding the character's exclusive file lock.
    fn locked<T>(&self, id: CharacterId, critical: impl FnOnce() -> Result<T>) -> Result<T> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(self.lock_path(id))
            .map_err(RepositoryError::Io)?;
        let mut lock = RwLock::new(file);
        let _guard = lock.write().map_err(RepositoryError::Io)?;

        critical()
    }

    fn read(&self, id: CharacterId) -> Result<Option<CharacterRecord>> {
        let path = self.character_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let record: CharacterRecord = serde_json::from_slice(&bytes)?;

        if record.id != id {
            return Err(RepositoryError::CorruptedData(format!(
                "{} holds character {}",
                path.display(),
                record.id
            )));
        }

        Ok(Some(record))
    }

    fn write(&self, record: &CharacterRecord) -> Result<()> {
        let path = self.character_path(record.id);
        let bytes = serde_json::to_vec_pretty(record)?;

        let mut temp = tempfile::Builder::new()
            .prefix(".character_")
            .tempfile_in(&self.base_dir)
            .map_err(RepositoryError::Io)?;
        temp.write_all(&bytes).map_err(RepositoryError::Io)?;
        temp.as_file().sync_all().map_err(RepositoryError::Io)?;

        // Atomic rename
        temp.persist(&path).map_err(|err| RepositoryError::Io(err.error))?;

        tracing::debug!(
            "Saved character[{}] v{} to {}",
            record.id,
            record.version,
            path.display()
        );

        Ok(())
    }
}

impl CharacterRepository for FileCharacterRepository {
    fn load(&self, id: CharacterId) -> Result<Option<CharacterRecord>> {
        let record = self.read(id)?;
        if record.is_some() {
            tracing::debug!("Loaded character[{}]", id);
        }
        Ok(record)
    }

    fn insert(&self, record: &CharacterRecord) -> Result<()> {
        self.locked(record.id, || {
            if self.character_path(record.id).exists() {
                return Err(RepositoryError::AlreadyExists(record.id));
            }

            self.write(&CharacterRecord {
                version: 0,
                ..record.clone()
            })
        })
    }

    fn update(&self, record: &CharacterRecord, expected_version: u64) -> Result<u64> {
        self.locked(record.id, || {
            let stored = self
                .read(record.id)?
                .ok_or(RepositoryError::Missing(record.id))?;
            if stored.version != expected_version {
                return Err(RepositoryError::VersionConflict {
                    id: record.id,
                    expected: expected_version,
                    actual: stored.version,
                });
            }

            let version = expected_version + 1;
            self.write(&CharacterRecord {
                version,
                ..record.clone()
            })?;
            Ok(version)
        })
    }

    fn delete(&self, id: CharacterId) -> Result<()> {
        self.locked(id, || {
            let path = self.character_path(id);

            if path.exists() {
                fs::remove_file(&path).map_err(RepositoryError::Io)?;
                tracing::debug!("Deleted character[{}]", id);
            }

            Ok(())
        })
    }

    fn exists(&self, id: CharacterId) -> bool {
        self.character_path(id).exists()
    }

    fn list_ids(&self) -> Result<Vec<CharacterId>> {
        let mut ids = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename
                    .strip_prefix("character_")
                    .and_then(|s| s.strip_suffix(".json"))
                && let Ok(id) = id_str.parse::<u64>()
            {
                ids.push(CharacterId(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}
