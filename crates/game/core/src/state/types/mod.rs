pub mod common;
pub mod objective;
pub mod unit;

pub use common::{Position, UnitId};
pub use objective::{Objective, ObjectiveKind};
pub use unit::{Faction, KnockState, UnitState};
