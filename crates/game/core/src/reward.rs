//! Immediate reward for a unit after its action has been resolved.

use crate::config::RewardWeights;
use crate::state::{GameState, ObjectiveKind, UnitState};

/// Scores `unit`'s position on the post-resolution board.
///
/// Terms are additive: every objective under the unit counts (stacked
/// objectives all pay), every opponent within one king-step counts, and a
/// corner tile costs a flat penalty.
pub fn evaluate(unit: &UnitState, state: &GameState, weights: &RewardWeights) -> f64 {
    let objectives: f64 = state
        .objectives_at(unit.position)
        .map(|objective| match objective.kind {
            ObjectiveKind::Major => weights.major_objective,
            ObjectiveKind::Minor => weights.minor_objective,
        })
        .sum();

    let nearby_opponents = state
        .units()
        .iter()
        .filter(|other| other.is_opponent_of(unit.faction))
        .filter(|other| other.position.chebyshev(unit.position) <= 1)
        .count();

    let corner = if unit.position.is_corner(state.grid_size()) {
        weights.corner
    } else {
        0.0
    };

    objectives + nearby_opponents as f64 * weights.adjacent_opponent + corner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Faction, Objective, Position};

    fn reward_of(state: &GameState, x: i32, y: i32) -> f64 {
        let unit = state
            .units()
            .iter()
            .find(|u| u.position == Position::new(x, y))
            .unwrap();
        evaluate(unit, state, &RewardWeights::default())
    }

    #[test]
    fn lone_unit_in_corner_is_penalised() {
        for (x, y) in [(0, 0), (0, 19), (19, 0), (19, 19)] {
            let mut state = GameState::new(20).unwrap();
            state.add_unit(Faction::Player, Position::new(x, y)).unwrap();
            assert_eq!(reward_of(&state, x, y), -5.0);
        }
    }

    #[test]
    fn major_objective_with_diagonal_enemy() {
        let mut state = GameState::new(20).unwrap();
        state.add_objective(Objective::major(10, 10)).unwrap();
        state.add_unit(Faction::Player, Position::new(10, 10)).unwrap();
        state.add_unit(Faction::Enemy, Position::new(11, 11)).unwrap();

        assert_eq!(reward_of(&state, 10, 10), 13.0);
    }

    #[test]
    fn stacked_objectives_all_count() {
        let mut state = GameState::new(20).unwrap();
        state.add_objective(Objective::major(4, 4)).unwrap();
        state.add_objective(Objective::minor(4, 4)).unwrap();
        state.add_objective(Objective::minor(4, 4)).unwrap();
        state.add_unit(Faction::Enemy, Position::new(4, 4)).unwrap();

        assert_eq!(reward_of(&state, 4, 4), 5.0);
    }

    #[test]
    fn allies_and_distant_opponents_do_not_count() {
        let mut state = GameState::new(20).unwrap();
        state.add_unit(Faction::Player, Position::new(5, 5)).unwrap();
        state.add_unit(Faction::Player, Position::new(5, 6)).unwrap();
        state.add_unit(Faction::Enemy, Position::new(7, 5)).unwrap();

        assert_eq!(reward_of(&state, 5, 5), 0.0);
    }

    #[test]
    fn opponent_on_same_tile_counts() {
        let mut state = GameState::new(20).unwrap();
        state.add_unit(Faction::Player, Position::new(5, 5)).unwrap();
        state.add_unit(Faction::Enemy, Position::new(5, 5)).unwrap();
        state.add_unit(Faction::Enemy, Position::new(4, 5)).unwrap();

        assert_eq!(reward_of(&state, 4, 5), 10.0);
        let player = state.units_of(Faction::Player).next().unwrap();
        assert_eq!(
            evaluate(player, &state, &RewardWeights::default()),
            20.0
        );
    }
}
