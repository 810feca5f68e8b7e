//! File-based repository implementations.

mod table;

pub use table::FileTableRepository;
