//! Runtime configuration shared by the orchestrator, match runner and trainer.
//!
//! Every struct deserializes with per-field defaults, so a TOML file only has
//! to name the values it overrides.

use game_core::{KeyOrdering, RuleConfig};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// Q-learning hyperparameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Discount factor applied to the next state's best value.
    pub gamma: f64,
    /// Learning rate.
    pub alpha: f64,
    /// Exploration rate used outside of training.
    pub epsilon: f64,
    pub ordering: KeyOrdering,
}

impl LearningConfig {
    pub const DEFAULT_GAMMA: f64 = 0.95;
    pub const DEFAULT_ALPHA: f64 = 0.1;
    pub const DEFAULT_EPSILON: f64 = 0.1;
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            gamma: Self::DEFAULT_GAMMA,
            alpha: Self::DEFAULT_ALPHA,
            epsilon: Self::DEFAULT_EPSILON,
            ordering: KeyOrdering::Insertion,
        }
    }
}

/// Per-turn shaping applied by the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnConfig {
    /// Added to a unit's reward when it ends its action on its starting tile.
    pub no_move_penalty: f64,
    /// Reward of the extra update every unit receives when any unit stayed put.
    pub blanket_penalty: f64,
    /// Objective holders required before forced reassignment kicks in.
    pub min_objective_holders: usize,
    /// Maximum units reassigned to objectives per turn.
    pub forced_assignment_cap: usize,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            no_move_penalty: -1.0,
            blanket_penalty: -5.0,
            min_objective_holders: 2,
            forced_assignment_cap: 2,
        }
    }
}

/// Headless scenario generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub units_per_faction: usize,
    pub minor_objectives: usize,
    /// Max distance of the Major objective from the board centre, per axis.
    pub major_spread: i32,
    /// Max distance of Minor objectives from the board centre, per axis.
    pub minor_spread: i32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            units_per_faction: 7,
            minor_objectives: 3,
            major_spread: 3,
            minor_spread: 5,
        }
    }
}

/// Episode loop settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub episodes: u32,
    pub initial_epsilon: f64,
    /// Multiplier applied to ε after every episode.
    pub epsilon_decay: f64,
    pub min_epsilon: f64,
    /// Faction turns after which a match is declared a draw.
    pub max_turns: Option<u32>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            initial_epsilon: 1.0,
            epsilon_decay: 0.1,
            min_epsilon: 0.01,
            max_turns: None,
        }
    }
}

impl TrainerConfig {
    /// Exploration rate for the episode after one played at `epsilon`.
    pub fn decay(&self, epsilon: f64) -> f64 {
        (epsilon * self.epsilon_decay).max(self.min_epsilon)
    }
}

/// Complete runtime configuration, as loaded from a TOML file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub rules: RuleConfig,
    pub learning: LearningConfig,
    pub turn: TurnConfig,
    pub scenario: ScenarioConfig,
    pub trainer: TrainerConfig,
}

impl RuntimeConfig {
    /// Rejects settings no match could be played with.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(RuntimeError::InvalidConfig(msg));

        if self.rules.grid_size <= 0 {
            return invalid(format!("grid_size must be positive, got {}", self.rules.grid_size));
        }
        if self.rules.starting_health == 0
            || self.rules.starting_health > game_core::UnitState::MAX_HEALTH
        {
            return invalid(format!(
                "starting_health must be in 1..={}, got {}",
                game_core::UnitState::MAX_HEALTH,
                self.rules.starting_health
            ));
        }
        for (name, value) in [
            ("gamma", self.learning.gamma),
            ("alpha", self.learning.alpha),
            ("epsilon", self.learning.epsilon),
            ("initial_epsilon", self.trainer.initial_epsilon),
            ("epsilon_decay", self.trainer.epsilon_decay),
            ("min_epsilon", self.trainer.min_epsilon),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return invalid(format!("{name} must be in [0, 1], got {value}"));
            }
        }
        let rows = usize::try_from(self.rules.grid_size).unwrap_or(0);
        if self.scenario.units_per_faction > rows {
            return invalid(format!(
                "units_per_faction ({}) exceeds grid rows ({rows})",
                self.scenario.units_per_faction
            ));
        }
        if self.scenario.major_spread < 0 || self.scenario.minor_spread < 0 {
            return invalid("objective spreads must be non-negative".to_string());
        }
        Ok(())
    }
}
