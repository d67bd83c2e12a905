//! Repository contracts for loading and committing character records.

use arkana_core::CharacterId;

use super::error::Result;
use super::types::CharacterRecord;

/// Repository for character persistence.
///
/// This is for DYNAMIC data that the effect engine rewrites:
/// - Active effects, live stats and vitals, written together
/// - A version counter for optimistic concurrency
///
/// Static effect content is handled by oracles, not repositories.
pub trait CharacterRepository: Send + Sync {
    /// Load a character by id.
    fn load(&self, id: CharacterId) -> Result<Option<CharacterRecord>>;

    /// Store a new character at version 0.
    fn insert(&self, record: &CharacterRecord) -> Result<()>;

    /// Commit `record` if the stored version still equals `expected_version`.
    ///
    /// Returns the new version. The whole record is replaced atomically.
    fn update(&self, record: &CharacterRecord, expected_version: u64) -> Result<u64>;

    /// Delete a character. Deleting an absent id is not an error.
    fn delete(&self, id: CharacterId) -> Result<()>;

    /// Check if a character exists.
    fn exists(&self, id: CharacterId) -> bool;

    /// List all stored character ids in ascending order.
    fn list_ids(&self) -> Result<Vec<CharacterId>>;

    /// Smallest id greater than every stored one.
    fn next_id(&self) -> Result<CharacterId> {
        let next = self
            .list_ids()?
            .last()
            .map_or(1, |CharacterId(last)| last + 1);
        Ok(CharacterId(next))
    }
}
