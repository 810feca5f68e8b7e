//! Deterministic skirmish rules and data types.
//!
//! `game-core` defines the canonical board model and the pure rule functions
//! that act on it: state encoding, candidate generation, action resolution
//! (movement plus two-hit knockback), per-unit rewards and objective scoring.
//! Nothing here draws random numbers or performs I/O; learning, turn
//! orchestration and persistence live in the `runtime` crate.
pub mod action;
pub mod combat;
pub mod config;
pub mod error;
pub mod reward;
pub mod scoring;
pub mod state;

pub use action::{Action, Candidates, candidates};
pub use combat::{AttackOutcome, EliminationCause, Resolution, resolve};
pub use config::{RewardWeights, RuleConfig};
pub use error::{ErrorSeverity, GameError};
pub use scoring::{Scoreboard, Victory, VictoryReason, check_victory, control_points};
pub use state::{
    Faction, GameState, InitializationError, KeyOrdering, KnockState, Objective, ObjectiveKind,
    Position, StateKey, UnitId, UnitState,
};
