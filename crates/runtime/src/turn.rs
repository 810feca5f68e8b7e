//! Per-faction turn orchestration.
//!
//! A faction turn runs three passes over the acting faction's units:
//!
//! 1. **Act**: every living unit, in collection order, chooses and resolves
//!    an action and receives a value update
//! 2. **Objective coverage**: if too few units ended on an objective, up to
//!    a fixed number of units are sent towards the first free objective
//! 3. **Blanket penalty**: if any unit stayed on its tile, every unit of the
//!    faction receives an extra penalty update
//!
//! Resolution effects are visible immediately: a unit removed by an earlier
//! attack in the same turn simply drops out.

use game_core::{
    Action, Faction, GameState, Resolution, RuleConfig, UnitId, reward, resolve,
};
use rand::Rng;

use crate::config::TurnConfig;
use crate::learning::{DecisionSource, Policy, QStore};
use crate::utils::hash::key_digest;

/// Per-unit record of the act pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitTurn {
    pub unit: UnitId,
    pub action: Action,
    pub source: DecisionSource,
    pub resolution: Resolution,
    /// Reward passed to the value update, penalties included.
    pub reward: f64,
}

/// Summary of one faction turn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurnReport {
    pub units: Vec<UnitTurn>,
    /// Units that ended the act pass on an objective tile.
    pub objective_holders: usize,
    /// Units sent towards a free objective by the coverage pass.
    pub forced: Vec<UnitId>,
    /// Whether the blanket penalty was applied.
    pub blanket_penalty: bool,
    /// Defenders removed during this turn.
    pub eliminated: Vec<UnitId>,
    /// Value updates performed across all passes.
    pub updates: usize,
}

impl TurnReport {
    pub fn all_moved(&self) -> bool {
        !self.blanket_penalty
    }
}

/// Drives one faction's turn against a shared value store.
#[derive(Clone, Debug, Default)]
pub struct TurnOrchestrator {
    rules: RuleConfig,
    config: TurnConfig,
    policy: Policy,
}

impl TurnOrchestrator {
    pub fn new(rules: RuleConfig, config: TurnConfig) -> Self {
        Self {
            rules,
            config,
            policy: Policy::default(),
        }
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Plays one turn for `faction`, mutating `state` and `store` in place.
    pub fn run_faction_turn<R: Rng + ?Sized>(
        &self,
        state: &mut GameState,
        faction: Faction,
        store: &mut QStore,
        epsilon: f64,
        rng: &mut R,
    ) -> TurnReport {
        let turn_start = state.clone();
        let mut report = TurnReport::default();
        let mut all_moved = true;

        // Pass 1: act
        for id in state.unit_ids_of(faction) {
            let Some(unit) = state.unit(id).cloned() else {
                continue;
            };

            let before = state.clone();
            let decision = self.policy.choose(&before, &unit, store, epsilon, rng);
            let resolution = resolve(state, id, decision.action);

            tracing::debug!(
                "{} unit {} at {}: {} via {:?} => {:?}",
                faction,
                id,
                unit.position,
                decision.action,
                decision.source,
                resolution
            );
            if let Resolution::Attacked { defender, outcome } = resolution {
                if outcome.is_elimination() {
                    report.eliminated.push(defender);
                }
            }

            let Some(after) = state.unit(id) else {
                continue;
            };
            let mut value = reward::evaluate(after, state, &self.rules.rewards);
            if after.position == unit.position {
                value += self.config.no_move_penalty;
                all_moved = false;
            }
            let holds_objective = state.has_objective_at(after.position);

            store.update(&before, decision.action, value, state);
            report.updates += 1;
            if holds_objective {
                report.objective_holders += 1;
            }
            report.units.push(UnitTurn {
                unit: id,
                action: decision.action,
                source: decision.source,
                resolution,
                reward: value,
            });
        }

        // Pass 2: objective coverage
        if report.objective_holders < self.config.min_objective_holders {
            self.enforce_coverage(state, faction, store, &turn_start, &mut report);
        }

        // Pass 3: blanket penalty
        if !all_moved {
            let snapshot = state.clone();
            for unit in snapshot.units_of(faction) {
                store.update(
                    &snapshot,
                    Action::to(unit.position),
                    self.config.blanket_penalty,
                    &snapshot,
                );
                report.updates += 1;
            }
            report.blanket_penalty = true;
        }

        tracing::debug!(
            "{} turn done: {} acted, {} on objectives, {} forced, blanket={}, state {}",
            faction,
            report.units.len(),
            report.objective_holders,
            report.forced.len(),
            report.blanket_penalty,
            key_digest(&store.key(state))
        );

        report
    }

    /// Sends up to `forced_assignment_cap` units, in collection order, to the
    /// first objective no unit stands on.
    ///
    /// An assignment counts even when the objective is too far away for the
    /// move to succeed. The update uses the turn-start board as its "before"
    /// state and carries no stay penalty.
    fn enforce_coverage(
        &self,
        state: &mut GameState,
        faction: Faction,
        store: &mut QStore,
        turn_start: &GameState,
        report: &mut TurnReport,
    ) {
        let mut assigned = 0;
        for id in state.unit_ids_of(faction) {
            if assigned >= self.config.forced_assignment_cap {
                break;
            }
            let Some(objective) = state
                .objectives()
                .iter()
                .find(|objective| !state.is_occupied(objective.position))
                .copied()
            else {
                tracing::warn!(
                    "{} has {} objective holders but no free objective to reassign to",
                    faction,
                    report.objective_holders
                );
                break;
            };

            let action = Action::to(objective.position);
            let resolution = resolve(state, id, action);
            let Some(unit) = state.unit(id) else {
                continue;
            };
            let value = reward::evaluate(unit, state, &self.rules.rewards);
            tracing::debug!(
                "{} unit {} forced towards {:?} objective at {} => {:?}",
                faction,
                id,
                objective.kind,
                objective.position,
                resolution
            );

            store.update(turn_start, action, value, state);
            report.updates += 1;
            report.forced.push(id);
            assigned += 1;
        }
    }
}
