//! Outcome types reported by action resolution.

use crate::state::{Position, UnitId};

/// Why a defender left the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EliminationCause {
    /// Second hit in a turn took the last health point.
    Slain,
    /// Knockback drove the defender into a blocked tile.
    Crushed { at: Position },
}

/// Effect of one attack on its defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attacker was not adjacent; nothing happened.
    OutOfReach,
    /// First hit would push the defender off the grid; nothing happened.
    Whiff,
    /// First hit: defender pushed and now `Knocked`.
    Knocked { to: Position },
    /// Second hit: defender lost health and was pushed.
    Wounded { health: u8, to: Position },
    /// Second hit: defender lost health but the push left the grid, so it stayed.
    Braced { health: u8 },
    /// Defender removed from the board.
    Eliminated { cause: EliminationCause },
}

impl AttackOutcome {
    pub fn is_elimination(&self) -> bool {
        matches!(self, Self::Eliminated { .. })
    }
}

/// Result of resolving one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// Acting unit changed tile.
    Moved { from: Position, to: Position },
    /// Target was off the board or not adjacent; the unit stayed.
    MoveRejected { target: Position },
    /// Target tile held an opponent.
    Attacked {
        defender: UnitId,
        outcome: AttackOutcome,
    },
    /// Acting unit is no longer on the board.
    MissingActor,
}
