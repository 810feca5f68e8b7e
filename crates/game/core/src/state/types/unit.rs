//! Units, factions and the per-turn flags carried by each unit.

use strum::{Display, EnumIter};

use super::common::{Position, UnitId};

/// The two opposing sides of a skirmish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Faction {
    Player,
    Enemy,
}

impl Faction {
    /// The faction on the other side of the board.
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Knockback state of a defender within the current turn.
///
/// A `Fresh` unit absorbs the first hit as a push; a `Knocked` unit loses
/// health on the next hit and returns to `Fresh`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KnockState {
    #[default]
    Fresh,
    Knocked,
}

/// A grid-bound unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: UnitId,
    pub position: Position,
    pub faction: Faction,
    /// Remaining health points, never above [`UnitState::MAX_HEALTH`].
    pub health: u8,
    /// Set when the unit changes tile during the current turn.
    pub moved: bool,
    pub knock: KnockState,
    /// Carried for data-shape compatibility; no rule reads it.
    pub stunned: bool,
}

impl UnitState {
    pub const MAX_HEALTH: u8 = 2;

    pub fn new(id: UnitId, position: Position, faction: Faction) -> Self {
        Self {
            id,
            position,
            faction,
            health: Self::MAX_HEALTH,
            moved: false,
            knock: KnockState::Fresh,
            stunned: false,
        }
    }

    pub fn with_health(mut self, health: u8) -> Self {
        self.health = health;
        self
    }

    #[inline]
    pub fn is_opponent_of(&self, faction: Faction) -> bool {
        self.faction != faction
    }

    /// Clears the transient flags at the end of a faction turn.
    pub fn reset_turn_flags(&mut self) {
        self.moved = false;
        self.knock = KnockState::Fresh;
    }
}
