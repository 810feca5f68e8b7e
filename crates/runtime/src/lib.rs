//! Runtime orchestration for skirmish matches and value learning.
//!
//! This crate wires the pure rules of `game-core` to a tabular Q-learning
//! agent. Consumers build a [`MatchRunner`] (or a [`Trainer`]) and pass a
//! [`QStore`] explicitly to every match.
//!
//! Modules are organized by responsibility:
//! - [`learning`] holds the value table, value store and action policy
//! - [`turn`] runs one faction's turn
//! - [`runtime`] hosts the match runner and builder
//! - [`scenario`] generates starting boards
//! - [`trainer`] runs the episode loop
//! - [`repository`] persists the value table
pub mod config;
pub mod error;
pub mod learning;
pub mod repository;
pub mod runtime;
pub mod scenario;
pub mod trainer;
pub mod turn;

mod utils;

pub use config::{LearningConfig, RuntimeConfig, ScenarioConfig, TrainerConfig, TurnConfig};
pub use error::{Result, RuntimeError};
pub use learning::{
    Decision, DecisionSource, Heuristic, Policy, PolicyContext, QStore, QTable, TableStats,
};
pub use repository::{
    FileTableRepository, InMemoryTableRepo, RepositoryError, TableRepository,
};
pub use runtime::{MatchEnd, MatchOutcome, MatchRunner, MatchRunnerBuilder, UnitCounts};
pub use trainer::{EpisodeReport, Trainer, TrainingSummary};
pub use turn::{TurnOrchestrator, TurnReport, UnitTurn};
pub use utils::hash::key_digest;
