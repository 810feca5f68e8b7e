//! Single-step movement rule shared by voluntary moves and knockback pushes.

use crate::state::{Position, UnitState};

/// Moves `unit` to `target` if the target is on the board and at most one
/// king-step away. No occupancy check: any number of units may share a tile.
///
/// Returns `true` when the unit changed tile.
pub fn step(unit: &mut UnitState, target: Position, grid_size: i32) -> bool {
    if !target.in_bounds(grid_size) || unit.position.chebyshev(target) > 1 {
        return false;
    }
    unit.position = target;
    unit.moved = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Faction, UnitId};

    #[test]
    fn step_sets_moved_flag() {
        let mut unit = UnitState::new(UnitId(0), Position::new(3, 3), Faction::Player);
        assert!(step(&mut unit, Position::new(4, 2), 8));
        assert_eq!(unit.position, Position::new(4, 2));
        assert!(unit.moved);
    }

    #[test]
    fn step_rejects_far_and_off_board_targets() {
        let mut unit = UnitState::new(UnitId(0), Position::new(0, 0), Faction::Enemy);
        assert!(!step(&mut unit, Position::new(2, 0), 8));
        assert!(!step(&mut unit, Position::new(-1, 0), 8));
        assert_eq!(unit.position, Position::ORIGIN);
        assert!(!unit.moved);
    }
}
