//! Action resolution: movement and combat.
//!
//! [`resolve`] turns a chosen [`Action`] into a board mutation. If the target
//! tile holds a unit opposing the actor, the action is an attack on the first
//! such unit (collection order); otherwise it is a single-step move.
//!
//! # Core Functions
//!
//! - `resolve`: dispatch an action to move or attack
//! - `attack`: the two-hit knockback state machine
//! - `step`: the shared single-tile movement rule

pub mod knockback;
pub mod movement;
pub mod result;

pub use knockback::{BlockRule, attack, is_blocked};
pub use movement::step;
pub use result::{AttackOutcome, EliminationCause, Resolution};

use crate::action::Action;
use crate::state::{GameState, UnitId};

/// Resolves `action` for `actor` in place.
///
/// No legality re-check is made beyond the movement rule itself: candidate
/// generation has already filtered allied tiles.
pub fn resolve(state: &mut GameState, actor: UnitId, action: Action) -> Resolution {
    let Some(faction) = state.unit(actor).map(|unit| unit.faction) else {
        return Resolution::MissingActor;
    };

    if let Some(defender) = state.opponent_at(action.target, faction).map(|unit| unit.id) {
        let outcome = attack(state, actor, defender);
        return Resolution::Attacked { defender, outcome };
    }

    let grid_size = state.grid_size();
    let Some(unit) = state.unit_mut(actor) else {
        return Resolution::MissingActor;
    };
    let from = unit.position;
    if step(unit, action.target, grid_size) {
        Resolution::Moved {
            from,
            to: action.target,
        }
    } else {
        Resolution::MoveRejected {
            target: action.target,
        }
    }
}
