//! In-memory TableRepository implementation for tests and local runs.

use std::sync::RwLock;

use crate::learning::QTable;
use crate::repository::{RepositoryError, Result, TableRepository};

/// In-memory implementation of TableRepository.
pub struct InMemoryTableRepo {
    table: RwLock<Option<QTable>>,
}

impl InMemoryTableRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(None),
        }
    }
}

impl Default for InMemoryTableRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRepository for InMemoryTableRepo {
    fn save(&self, table: &QTable) -> Result<()> {
        let mut stored = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(table.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<QTable>> {
        let stored = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(stored.clone())
    }

    fn exists(&self) -> bool {
        self.table
            .read()
            .map(|stored| stored.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut stored = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = None;
        Ok(())
    }
}
