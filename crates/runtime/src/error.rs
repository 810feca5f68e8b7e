//! Unified error type surfaced by the runtime API.
//!
//! Wraps failures from repositories, board construction and configuration so
//! the binary can bubble them up with consistent context.
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to build initial game state")]
    InitialState(#[source] game_core::InitializationError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
