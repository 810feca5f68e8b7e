use strum::{Display, EnumIter};

use super::common::Position;

/// Objective tier. Major tiles are worth more and block first-hit knockbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectiveKind {
    Major,
    Minor,
}

impl ObjectiveKind {
    /// Control points credited per turn to the faction holding the tile.
    pub const fn control_points(self) -> u32 {
        match self {
            Self::Major => 3,
            Self::Minor => 1,
        }
    }
}

/// A static scored tile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub position: Position,
    pub kind: ObjectiveKind,
}

impl Objective {
    pub const fn new(position: Position, kind: ObjectiveKind) -> Self {
        Self { position, kind }
    }

    pub const fn major(x: i32, y: i32) -> Self {
        Self::new(Position::new(x, y), ObjectiveKind::Major)
    }

    pub const fn minor(x: i32, y: i32) -> Self {
        Self::new(Position::new(x, y), ObjectiveKind::Minor)
    }
}
