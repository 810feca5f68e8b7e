//! Repository layer for the learned value table.
//!
//! The value table is the only data that outlives a match. Repositories
//! persist it as a whole; there is no incremental or partial storage.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileTableRepository;
pub use memory::InMemoryTableRepo;
pub use traits::TableRepository;
pub use types::FORMAT_VERSION;
