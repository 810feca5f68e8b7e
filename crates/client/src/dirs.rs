//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for data directories.

use std::path::PathBuf;

/// Get the platform-specific data directory for Skirmish
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/skirmish`
/// - Linux: `~/.local/share/skirmish` (or `$XDG_DATA_HOME/skirmish`)
/// - Windows: `%APPDATA%\skirmish`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "skirmish")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Default location of the learned value table.
pub fn default_table_path() -> PathBuf {
    data_dir().join("q_table.bin")
}
