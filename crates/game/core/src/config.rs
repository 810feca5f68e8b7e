/// Weights of the per-unit reward terms.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardWeights {
    /// Per Major objective under the unit.
    pub major_objective: f64,
    /// Per Minor objective under the unit.
    pub minor_objective: f64,
    /// Per opposing unit within one king-step (same tile included).
    pub adjacent_opponent: f64,
    /// Applied once when the unit stands on a board corner.
    pub corner: f64,
}

impl RewardWeights {
    pub const DEFAULT_MAJOR_OBJECTIVE: f64 = 3.0;
    pub const DEFAULT_MINOR_OBJECTIVE: f64 = 1.0;
    pub const DEFAULT_ADJACENT_OPPONENT: f64 = 10.0;
    pub const DEFAULT_CORNER: f64 = -5.0;

    pub const fn new() -> Self {
        Self {
            major_objective: Self::DEFAULT_MAJOR_OBJECTIVE,
            minor_objective: Self::DEFAULT_MINOR_OBJECTIVE,
            adjacent_opponent: Self::DEFAULT_ADJACENT_OPPONENT,
            corner: Self::DEFAULT_CORNER,
        }
    }
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Board rules shared by every match.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleConfig {
    /// Side length of the square board.
    pub grid_size: i32,
    /// Health every freshly spawned unit starts with.
    pub starting_health: u8,
    /// Control points at which a faction wins.
    pub victory_score: u32,
    pub rewards: RewardWeights,
}

impl RuleConfig {
    pub const DEFAULT_GRID_SIZE: i32 = 20;
    pub const DEFAULT_VICTORY_SCORE: u32 = 500;

    pub const fn new() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            starting_health: crate::state::UnitState::MAX_HEALTH,
            victory_score: Self::DEFAULT_VICTORY_SCORE,
            rewards: RewardWeights::new(),
        }
    }

    pub const fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size;
        self
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::new()
    }
}
