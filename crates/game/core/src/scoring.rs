//! Objective control points and match termination.

use crate::state::{Faction, GameState};

/// Accumulated control points per faction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub player: u32,
    pub enemy: u32,
}

impl Scoreboard {
    pub const fn new(player: u32, enemy: u32) -> Self {
        Self { player, enemy }
    }

    pub const fn of(&self, faction: Faction) -> u32 {
        match faction {
            Faction::Player => self.player,
            Faction::Enemy => self.enemy,
        }
    }

    /// Adds one turn's worth of control points.
    pub fn accrue(&mut self, turn: Scoreboard) {
        self.player = self.player.saturating_add(turn.player);
        self.enemy = self.enemy.saturating_add(turn.enemy);
    }
}

/// Control points for the current board.
///
/// Each objective is credited at most once: to the Player if any Player unit
/// stands on it, otherwise to the Enemy if any Enemy unit does.
pub fn control_points(state: &GameState) -> Scoreboard {
    let mut board = Scoreboard::default();
    for objective in state.objectives() {
        let points = objective.kind.control_points();
        if state.is_held_by(objective.position, Faction::Player) {
            board.player += points;
        } else if state.is_held_by(objective.position, Faction::Enemy) {
            board.enemy += points;
        }
    }
    board
}

/// Why a match ended with a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VictoryReason {
    /// Winner's accumulated control points reached the victory score.
    #[strum(to_string = "score reached")]
    ScoreReached,
    /// The losing faction has no units left.
    #[strum(to_string = "opponent eliminated")]
    Annihilation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Victory {
    pub winner: Faction,
    pub reason: VictoryReason,
}

/// Termination check run after each faction turn.
///
/// Checked in order: Player score, Enemy score, Player wiped out, Enemy wiped
/// out. The first condition that holds decides the match.
pub fn check_victory(
    state: &GameState,
    scores: &Scoreboard,
    victory_score: u32,
) -> Option<Victory> {
    let by = |winner, reason| Some(Victory { winner, reason });

    if scores.player >= victory_score {
        by(Faction::Player, VictoryReason::ScoreReached)
    } else if scores.enemy >= victory_score {
        by(Faction::Enemy, VictoryReason::ScoreReached)
    } else if state.count(Faction::Player) == 0 {
        by(Faction::Enemy, VictoryReason::Annihilation)
    } else if state.count(Faction::Enemy) == 0 {
        by(Faction::Player, VictoryReason::Annihilation)
    } else {
        None
    }
}
