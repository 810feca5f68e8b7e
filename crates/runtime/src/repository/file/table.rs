//! File-based TableRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::learning::QTable;
use crate::repository::types::{decode, encode};
use crate::repository::{RepositoryError, Result, TableRepository};

/// File-based implementation of TableRepository.
///
/// Stores the table as a single file inside a versioned envelope.
///
/// # File Format
///
/// bincode, for:
/// - Compact size
/// - Composite map keys (state keys are not strings)
pub struct FileTableRepository {
    path: PathBuf,
}

impl FileTableRepository {
    /// Create a repository backed by `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableRepository for FileTableRepository {
    fn save(&self, table: &QTable) -> Result<()> {
        let temp_path = self.path.with_extension("bin.tmp");

        let bytes = encode(table)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved value table ({} states) to {}",
            table.len(),
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<QTable>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let table = decode(&bytes)?;

        tracing::debug!(
            "Loaded value table ({} states) from {}",
            table.len(),
            self.path.display()
        );

        Ok(Some(table))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted value table {}", self.path.display());
        }

        Ok(())
    }
}
