//! Q-learning value store.

use std::path::Path;

use game_core::{Action, GameState, StateKey, candidates};

use super::table::{ActionValues, QTable, TableStats};
use crate::config::LearningConfig;
use crate::repository::{FileTableRepository, TableRepository};
use crate::utils::hash::key_digest;

/// Owns the value table and applies the temporal-difference update.
///
/// The store is passed explicitly to every consumer; there is no global
/// table.
#[derive(Clone, Debug, Default)]
pub struct QStore {
    table: QTable,
    config: LearningConfig,
}

impl QStore {
    pub fn new(config: LearningConfig) -> Self {
        Self {
            table: QTable::new(),
            config,
        }
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn stats(&self) -> TableStats {
        self.table.stats()
    }

    /// Encodes `state` with the configured key ordering.
    pub fn key(&self, state: &GameState) -> StateKey {
        StateKey::encode_with(state, self.config.ordering)
    }

    /// Q(s, a); zero for unseen states or actions.
    pub fn value_of(&self, state: &GameState, action: Action) -> f64 {
        self.table.value(&self.key(state), &action)
    }

    /// First action with the maximal value in `key`, or [`Action::ORIGIN`]
    /// when the state has no entries.
    pub fn best_action(&self, key: &StateKey) -> Action {
        self.table
            .get(key)
            .and_then(first_max)
            .unwrap_or(Action::ORIGIN)
    }

    /// Creates the row for `state` if it does not exist yet.
    ///
    /// A new row gets a zero entry for every candidate action of every unit
    /// on the board, in unit order then candidate order. Existing rows are
    /// left untouched.
    pub fn ensure_initialized(&mut self, state: &GameState) -> StateKey {
        let key = self.key(state);
        if self.table.contains(&key) {
            return key;
        }

        let mut values = ActionValues::new();
        for unit in state.units() {
            for action in candidates(unit, state) {
                values.entry(action).or_insert(0.0);
            }
        }
        tracing::trace!(
            "Initialized state {} with {} actions",
            key_digest(&key),
            values.len()
        );
        self.table.insert(key.clone(), values);
        key
    }

    /// Q(s, a) += α · (r + γ · Q(s', best(s')) − Q(s, a)).
    ///
    /// Both states are initialized first. `state` and `next_state` may be the
    /// same board.
    pub fn update(
        &mut self,
        state: &GameState,
        action: Action,
        reward: f64,
        next_state: &GameState,
    ) {
        let key = self.ensure_initialized(state);
        let next_key = self.ensure_initialized(next_state);

        let best_next = self.best_action(&next_key);
        let td_target = reward + self.config.gamma * self.table.value(&next_key, &best_next);
        let current = self.table.value(&key, &action);
        let updated = current + self.config.alpha * (td_target - current);

        tracing::trace!(
            "Q[{}][{}] {:.4} -> {:.4} (r = {})",
            key_digest(&key),
            action,
            current,
            updated,
            reward
        );
        self.table.set(key, action, updated);
    }

    pub fn save(&self, repository: &dyn TableRepository) -> crate::Result<()> {
        repository.save(&self.table)?;
        tracing::info!("Saved value table: {} states", self.table.len());
        Ok(())
    }

    /// Replaces the table with the stored one.
    ///
    /// Returns `false` if the repository holds no table. On error the current
    /// table is left as it was.
    pub fn load(&mut self, repository: &dyn TableRepository) -> crate::Result<bool> {
        let Some(table) = repository.load()? else {
            return Ok(false);
        };
        tracing::info!("Loaded value table: {} states", table.len());
        self.table = table;
        Ok(true)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        self.save(&FileTableRepository::new(path)?)
    }

    pub fn load_from(&mut self, path: impl AsRef<Path>) -> crate::Result<bool> {
        self.load(&FileTableRepository::new(path)?)
    }
}

fn first_max(values: &ActionValues) -> Option<Action> {
    let mut best: Option<(Action, f64)> = None;
    for (&action, &value) in values {
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((action, value)),
        }
    }
    best.map(|(action, _)| action)
}
