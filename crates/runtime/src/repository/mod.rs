//! Repository layer for dynamic character data.
//!
//! Repositories handle data that CHANGES as effects decay:
//! - Active effects and their cached live stats
//! - Current health and effective max HP
//!
//! Static effect content is handled by oracles, not repositories.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileCharacterRepository;
pub use memory::InMemoryCharacterRepo;
pub use traits::CharacterRepository;
pub use types::{CharacterRecord, CharacterStats};
