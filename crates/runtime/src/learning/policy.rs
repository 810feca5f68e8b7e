//! Heuristic-gated ε-greedy action policy.
//!
//! A decision is made in three stages:
//!
//! 1. **Stay**: a unit with no candidates keeps its own tile
//! 2. **Explore**: with probability ε, a uniformly random candidate
//! 3. **Exploit**: the first heuristic (in priority order) that selects a
//!    candidate decides
//!
//! # Heuristics
//!
//! - [`Heuristic::ObjectiveSeek`]: random candidate on an unoccupied objective
//! - [`Heuristic::AttackPreference`]: first candidate holding an opponent
//! - [`Heuristic::AvoidCorners`]: random candidate that is not a board corner
//! - [`Heuristic::GreedyValue`]: highest-valued candidate, first on ties

use game_core::{Action, GameState, StateKey, UnitState, candidates};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::{Display, EnumIter, IntoEnumIterator};

use super::store::QStore;

/// One exploitation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Heuristic {
    ObjectiveSeek,
    AttackPreference,
    AvoidCorners,
    GreedyValue,
}

/// Everything a heuristic may look at.
pub struct PolicyContext<'a> {
    pub state: &'a GameState,
    pub unit: &'a UnitState,
    pub key: &'a StateKey,
    pub store: &'a QStore,
}

impl Heuristic {
    /// Picks a candidate, or `None` to defer to the next heuristic.
    pub fn select<R: Rng + ?Sized>(
        self,
        ctx: &PolicyContext<'_>,
        options: &[Action],
        rng: &mut R,
    ) -> Option<Action> {
        match self {
            Self::ObjectiveSeek => {
                let open: Vec<Action> = options
                    .iter()
                    .copied()
                    .filter(|action| {
                        ctx.state.has_objective_at(action.target)
                            && !ctx.state.is_occupied(action.target)
                    })
                    .collect();
                open.choose(rng).copied()
            }
            Self::AttackPreference => options
                .iter()
                .copied()
                .find(|action| ctx.state.opponent_at(action.target, ctx.unit.faction).is_some()),
            Self::AvoidCorners => {
                let grid_size = ctx.state.grid_size();
                let safe: Vec<Action> = options
                    .iter()
                    .copied()
                    .filter(|action| !action.target.is_corner(grid_size))
                    .collect();
                safe.choose(rng).copied()
            }
            Self::GreedyValue => {
                let mut best: Option<(Action, f64)> = None;
                for &action in options {
                    let value = ctx.store.table().value(ctx.key, &action);
                    match best {
                        Some((_, top)) if value <= top => {}
                        _ => best = Some((action, value)),
                    }
                }
                best.map(|(action, _)| action)
            }
        }
    }
}

/// What produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionSource {
    /// No candidates; the unit keeps its own tile.
    Stay,
    /// Random exploration.
    Explore,
    Heuristic(Heuristic),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub source: DecisionSource,
}

/// Ordered heuristic list plus the exploration gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    heuristics: Vec<Heuristic>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            heuristics: Heuristic::iter().collect(),
        }
    }
}

impl Policy {
    /// Policy with a custom priority order. [`Heuristic::GreedyValue`] is
    /// appended when missing so that every non-empty candidate list yields a
    /// decision.
    pub fn with_heuristics(mut heuristics: Vec<Heuristic>) -> Self {
        if !heuristics.contains(&Heuristic::GreedyValue) {
            heuristics.push(Heuristic::GreedyValue);
        }
        Self { heuristics }
    }

    pub fn heuristics(&self) -> &[Heuristic] {
        &self.heuristics
    }

    /// Chooses an action for `unit` on `state`.
    ///
    /// Creates the row for `state` in the store if it is missing.
    pub fn choose<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        unit: &UnitState,
        store: &mut QStore,
        epsilon: f64,
        rng: &mut R,
    ) -> Decision {
        let key = store.ensure_initialized(state);

        let options = candidates(unit, state);
        if options.is_empty() {
            return Decision {
                action: Action::to(unit.position),
                source: DecisionSource::Stay,
            };
        }

        if rng.gen_bool(exploration_rate(epsilon)) {
            if let Some(&action) = options.choose(rng) {
                return Decision {
                    action,
                    source: DecisionSource::Explore,
                };
            }
        }

        let ctx = PolicyContext {
            state,
            unit,
            key: &key,
            store,
        };
        for &heuristic in &self.heuristics {
            if let Some(action) = heuristic.select(&ctx, &options, rng) {
                return Decision {
                    action,
                    source: DecisionSource::Heuristic(heuristic),
                };
            }
        }

        // Unreachable while GreedyValue is in the list.
        Decision {
            action: options[0],
            source: DecisionSource::Heuristic(Heuristic::GreedyValue),
        }
    }
}

/// Probability of exploring. Non-finite rates never explore.
fn exploration_rate(epsilon: f64) -> f64 {
    if epsilon.is_finite() {
        epsilon.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
