//! Generate legal candidate actions for a unit.
//!
//! A unit may step to any of its eight neighbours that lies on the board and
//! is not already held by an ally. Tiles held by an opponent stay in the set:
//! choosing one resolves as an attack.

use arrayvec::ArrayVec;

use crate::action::Action;
use crate::state::{GameState, UnitState};

/// Candidate list; at most the eight neighbouring tiles.
pub type Candidates = ArrayVec<Action, 8>;

/// Neighbour offsets in enumeration order: x offset outer, y offset inner.
const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Get all candidate actions for `unit` on the current board.
///
/// The unit's own tile never appears: it is always held by an ally (the unit
/// itself). Returns an empty list when the unit is boxed in by allies and
/// board edges.
pub fn candidates(unit: &UnitState, state: &GameState) -> Candidates {
    OFFSETS
        .iter()
        .map(|&(dx, dy)| unit.position.offset(dx, dy))
        .filter(|&target| state.in_bounds(target) && !state.is_held_by(target, unit.faction))
        .map(Action::to)
        .collect()
}
