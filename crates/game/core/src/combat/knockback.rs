//! Two-hit knockback state machine.
//!
//! Every attack pushes the defender one tile further along the
//! attacker → defender line. Per turn a defender moves between two states:
//!
//! ```text
//!            first hit (push in bounds)
//!   Fresh ─────────────────────────────────▶ Knocked
//!     ▲        blocked push: removed             │
//!     │                                          │ second hit: -1 health
//!     └──────────────────────────────────────────┘
//!              health 0 or blocked push: removed
//! ```
//!
//! A first hit whose push leaves the grid is a whiff: no movement, no health
//! loss, and the defender stays `Fresh`. Only a second hit costs health. A
//! first-hit push is blocked by an opponent of the defender or a Major
//! objective; a second-hit push is blocked by an opponent or any objective.

use crate::state::{Faction, GameState, KnockState, ObjectiveKind, Position, UnitId};

use super::movement::step;
use super::result::{AttackOutcome, EliminationCause};

/// Which objectives stop a pushed defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockRule {
    /// First hit: only Major objectives block.
    MajorObjectives,
    /// Second hit: any objective blocks.
    AnyObjective,
}

impl BlockRule {
    fn blocks(self, kind: ObjectiveKind) -> bool {
        match self {
            Self::MajorObjectives => kind == ObjectiveKind::Major,
            Self::AnyObjective => true,
        }
    }
}

/// True if a defender of `faction` pushed onto `destination` would be crushed.
pub fn is_blocked(
    state: &GameState,
    destination: Position,
    faction: Faction,
    rule: BlockRule,
) -> bool {
    state
        .units()
        .iter()
        .any(|unit| unit.position == destination && unit.is_opponent_of(faction))
        || state
            .objectives_at(destination)
            .any(|objective| rule.blocks(objective.kind))
}

/// Applies one attack from `attacker` on `defender`.
pub fn attack(state: &mut GameState, attacker: UnitId, defender: UnitId) -> AttackOutcome {
    let (Some(attacker_pos), Some(target)) = (
        state.unit(attacker).map(|unit| unit.position),
        state.unit(defender).cloned(),
    ) else {
        return AttackOutcome::OutOfReach;
    };

    if attacker_pos.chebyshev(target.position) > 1 {
        return AttackOutcome::OutOfReach;
    }

    let (dx, dy) = attacker_pos.delta_to(target.position);
    let destination = target.position.offset(dx, dy);
    let grid_size = state.grid_size();

    match target.knock {
        KnockState::Fresh => {
            if !destination.in_bounds(grid_size) {
                return AttackOutcome::Whiff;
            }
            if is_blocked(state, destination, target.faction, BlockRule::MajorObjectives) {
                state.remove_unit(defender);
                return AttackOutcome::Eliminated {
                    cause: EliminationCause::Crushed { at: destination },
                };
            }
            let Some(unit) = state.unit_mut(defender) else {
                return AttackOutcome::OutOfReach;
            };
            unit.knock = KnockState::Knocked;
            step(unit, destination, grid_size);
            AttackOutcome::Knocked { to: destination }
        }
        KnockState::Knocked => {
            let health = target.health.saturating_sub(1);
            if health == 0 {
                state.remove_unit(defender);
                return AttackOutcome::Eliminated {
                    cause: EliminationCause::Slain,
                };
            }

            let blocked = destination.in_bounds(grid_size)
                && is_blocked(state, destination, target.faction, BlockRule::AnyObjective);
            if blocked {
                state.remove_unit(defender);
                return AttackOutcome::Eliminated {
                    cause: EliminationCause::Crushed { at: destination },
                };
            }

            let Some(unit) = state.unit_mut(defender) else {
                return AttackOutcome::OutOfReach;
            };
            unit.health = health;
            unit.knock = KnockState::Fresh;
            if step(unit, destination, grid_size) {
                AttackOutcome::Wounded {
                    health,
                    to: destination,
                }
            } else {
                AttackOutcome::Braced { health }
            }
        }
    }
}
