//! State construction errors.
//!
//! Rule functions never fail; only building a board from external input can.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, UnitState};

/// Errors raised while assembling a [`crate::GameState`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// Board must have at least one tile.
    #[error("grid size must be positive (got {grid_size})")]
    InvalidGridSize { grid_size: i32 },

    /// Unit placed outside the board.
    #[error("unit position {position} is outside a {grid_size}x{grid_size} grid")]
    UnitOutOfBounds { position: Position, grid_size: i32 },

    /// Objective placed outside the board.
    #[error("objective position {position} is outside a {grid_size}x{grid_size} grid")]
    ObjectiveOutOfBounds { position: Position, grid_size: i32 },

    /// Units enter play alive and never above the health cap.
    #[error("unit health {health} is outside 1..={}", UnitState::MAX_HEALTH)]
    InvalidHealth { health: u8 },

    /// Sequential id allocation exhausted.
    #[error("unit id overflow (current: {current})")]
    UnitIdOverflow { current: u32 },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnitIdOverflow { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidGridSize { .. } => "INIT_INVALID_GRID_SIZE",
            Self::UnitOutOfBounds { .. } => "INIT_UNIT_OUT_OF_BOUNDS",
            Self::ObjectiveOutOfBounds { .. } => "INIT_OBJECTIVE_OUT_OF_BOUNDS",
            Self::InvalidHealth { .. } => "INIT_INVALID_HEALTH",
            Self::UnitIdOverflow { .. } => "INIT_UNIT_ID_OVERFLOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_id_overflow_is_internal() {
        let overflow = InitializationError::UnitIdOverflow { current: u32::MAX };
        assert_eq!(overflow.severity(), ErrorSeverity::Internal);
        assert_eq!(overflow.error_code(), "INIT_UNIT_ID_OVERFLOW");

        let bad_grid = InitializationError::InvalidGridSize { grid_size: 0 };
        assert_eq!(bad_grid.severity().as_str(), "validation");
        assert_eq!(bad_grid.to_string(), "grid size must be positive (got 0)");
    }
}
