//! Platform-specific directory utilities
//!
//! Follows platform conventions for cache and data directories.

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/arkana/logs`
/// - Linux: `~/.cache/arkana/logs` (or `$XDG_CACHE_HOME/arkana/logs`)
/// - Windows: `%LOCALAPPDATA%\arkana\logs`
/// - Fallback: `/tmp/arkana/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arkana")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/arkana"))
        .join("logs")
}

/// Get the platform-specific save directory for character records
///
/// - macOS: `~/Library/Application Support/arkana/characters`
/// - Linux: `~/.local/share/arkana/characters` (or `$XDG_DATA_HOME/arkana/characters`)
/// - Windows: `%APPDATA%\arkana\characters`
/// - Fallback: `./save_data/characters`
pub fn save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arkana")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("characters")
}
