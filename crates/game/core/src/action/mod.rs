//! Action domain.
//!
//! An [`Action`] is an absolute target tile for one unit. Whether it resolves
//! as a move or an attack depends on what stands on the tile when the action is
//! resolved (see [`crate::combat`]).
//!
//! - `available`: legal candidate generation over the 8-neighbourhood

pub mod available;

pub use available::{Candidates, candidates};

use std::fmt;

use crate::state::Position;

/// Target tile chosen for a unit this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub target: Position,
}

impl Action {
    /// Fallback returned by value lookups over an empty action set.
    pub const ORIGIN: Self = Self {
        target: Position::ORIGIN,
    };

    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            target: Position::new(x, y),
        }
    }

    pub const fn to(target: Position) -> Self {
        Self { target }
    }
}

impl From<Position> for Action {
    fn from(target: Position) -> Self {
        Self::to(target)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-> {}", self.target)
    }
}
