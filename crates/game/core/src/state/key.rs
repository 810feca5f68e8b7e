//! Hashable identity of a board snapshot, used to index the value table.

use super::{Faction, GameState, ObjectiveKind};

/// How unit and objective sequences are arranged inside a [`StateKey`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyOrdering {
    /// Collection order as-is. Two boards that differ only in the order of
    /// their collections produce different keys.
    #[default]
    Insertion,
    /// Both sequences sorted, so equal boards always share a key.
    Canonical,
}

/// Encoded board: `(x, y, faction)` per unit followed by `(x, y, kind)` per
/// objective.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateKey {
    pub units: Vec<(i32, i32, Faction)>,
    pub objectives: Vec<(i32, i32, ObjectiveKind)>,
}

impl StateKey {
    /// Encodes `state` preserving collection order.
    pub fn encode(state: &GameState) -> Self {
        Self::encode_with(state, KeyOrdering::Insertion)
    }

    pub fn encode_with(state: &GameState, ordering: KeyOrdering) -> Self {
        let mut units: Vec<_> = state
            .units()
            .iter()
            .map(|unit| (unit.position.x, unit.position.y, unit.faction))
            .collect();
        let mut objectives: Vec<_> = state
            .objectives()
            .iter()
            .map(|objective| (objective.position.x, objective.position.y, objective.kind))
            .collect();

        if ordering == KeyOrdering::Canonical {
            units.sort_unstable();
            objectives.sort_unstable();
        }

        Self { units, objectives }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Objective, Position};

    fn board(order: &[(i32, i32, Faction)]) -> GameState {
        let mut state = GameState::new(6).unwrap();
        for &(x, y, faction) in order {
            state.add_unit(faction, Position::new(x, y)).unwrap();
        }
        state.add_objective(Objective::major(3, 3)).unwrap();
        state
    }

    #[test]
    fn key_follows_collection_order() {
        let a = board(&[(0, 1, Faction::Player), (5, 4, Faction::Enemy)]);
        let b = board(&[(5, 4, Faction::Enemy), (0, 1, Faction::Player)]);

        assert_ne!(StateKey::encode(&a), StateKey::encode(&b));
        assert_eq!(
            StateKey::encode(&a).units,
            vec![(0, 1, Faction::Player), (5, 4, Faction::Enemy)]
        );
        assert_eq!(
            StateKey::encode(&a).objectives,
            vec![(3, 3, ObjectiveKind::Major)]
        );
    }

    #[test]
    fn canonical_ordering_merges_permutations() {
        let a = board(&[(0, 1, Faction::Player), (5, 4, Faction::Enemy)]);
        let b = board(&[(5, 4, Faction::Enemy), (0, 1, Faction::Player)]);

        assert_eq!(
            StateKey::encode_with(&a, KeyOrdering::Canonical),
            StateKey::encode_with(&b, KeyOrdering::Canonical)
        );
    }

    #[test]
    fn distinct_boards_get_distinct_keys() {
        let a = board(&[(0, 1, Faction::Player)]);
        let b = board(&[(0, 2, Faction::Player)]);
        let c = board(&[(0, 1, Faction::Enemy)]);

        assert_ne!(StateKey::encode(&a), StateKey::encode(&b));
        assert_ne!(StateKey::encode(&a), StateKey::encode(&c));
    }
}
