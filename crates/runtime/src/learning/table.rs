//! Two-level value table: state key → (action → value).

use game_core::{Action, StateKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Values of every action seen in one state, in first-seen order.
pub type ActionValues = IndexMap<Action, f64>;

/// Tabular action-value function.
///
/// Both levels keep insertion order so that tie-breaks over "first maximal
/// action" and serialized dumps are stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    entries: IndexMap<StateKey, ActionValues>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &StateKey) -> Option<&ActionValues> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &StateKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Value of `action` in `key`, zero when either level is missing.
    pub fn value(&self, key: &StateKey, action: &Action) -> f64 {
        self.entries
            .get(key)
            .and_then(|values| values.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    pub(crate) fn insert(&mut self, key: StateKey, values: ActionValues) {
        self.entries.insert(key, values);
    }

    pub(crate) fn set(&mut self, key: StateKey, action: Action, value: f64) {
        self.entries.entry(key).or_default().insert(action, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &ActionValues)> {
        self.entries.iter()
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            states: self.entries.len(),
            ..TableStats::default()
        };
        let mut sum = 0.0;
        for value in self.entries.values().flat_map(|values| values.values()) {
            stats.entries += 1;
            sum += value;
            stats.min = Some(stats.min.map_or(*value, |min: f64| min.min(*value)));
            stats.max = Some(stats.max.map_or(*value, |max: f64| max.max(*value)));
        }
        if stats.entries > 0 {
            stats.mean = Some(sum / stats.entries as f64);
        }
        stats
    }
}

/// Summary figures for a value table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    pub states: usize,
    pub entries: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Faction, ObjectiveKind};

    fn key(x: i32) -> StateKey {
        StateKey {
            units: vec![(x, 0, Faction::Player)],
            objectives: vec![(5, 5, ObjectiveKind::Major)],
        }
    }

    #[test]
    fn missing_levels_read_as_zero() {
        let mut table = QTable::new();
        assert_eq!(table.value(&key(0), &Action::new(1, 1)), 0.0);

        table.insert(key(0), ActionValues::new());
        assert_eq!(table.value(&key(0), &Action::new(1, 1)), 0.0);
    }

    #[test]
    fn stats_cover_every_entry() {
        let mut table = QTable::new();
        table.set(key(0), Action::new(1, 0), -2.0);
        table.set(key(0), Action::new(1, 1), 4.0);
        table.set(key(1), Action::new(0, 0), 1.0);

        let stats = table.stats();
        assert_eq!(stats.states, 2);
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.min, Some(-2.0));
        assert_eq!(stats.max, Some(4.0));
        assert_eq!(stats.mean, Some(1.0));
    }

    #[test]
    fn empty_table_has_no_range() {
        let stats = QTable::new().stats();
        assert_eq!(stats, TableStats::default());
    }
}
