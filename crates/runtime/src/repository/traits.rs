//! Repository contract for saving and loading the value table.

use super::Result;
use crate::learning::QTable;

/// Repository for value table persistence.
///
/// A repository holds at most one table. Saving replaces the stored table as
/// a whole, and loading returns a fully decoded table or an error, never a
/// partial one.
pub trait TableRepository: Send + Sync {
    /// Save the table, replacing any stored one.
    fn save(&self, table: &QTable) -> Result<()>;

    /// Load the stored table, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<QTable>>;

    /// Check if a table is stored
    fn exists(&self) -> bool;

    /// Delete the stored table
    fn delete(&self) -> Result<()>;
}
