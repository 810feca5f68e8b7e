//! High-level match orchestrator.
//!
//! [`MatchRunner`] alternates faction turns (Player first), clears per-turn
//! flags, accrues control points and stops when a faction wins or an optional
//! turn limit is hit. It is built through [`MatchRunnerBuilder`].

use game_core::{
    Faction, GameState, RuleConfig, Scoreboard, VictoryReason, check_victory, control_points,
};
use rand::Rng;

use crate::config::{RuntimeConfig, TurnConfig};
use crate::learning::{Policy, QStore};
use crate::turn::{TurnOrchestrator, TurnReport};

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchEnd {
    Victory(VictoryReason),
    /// The turn limit was reached without a winner.
    TurnLimit,
}

/// Living units per faction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitCounts {
    pub player: usize,
    pub enemy: usize,
}

impl UnitCounts {
    pub fn of(state: &GameState) -> Self {
        Self {
            player: state.count(Faction::Player),
            enemy: state.count(Faction::Enemy),
        }
    }
}

/// Final result of a match.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    /// `None` for a draw.
    pub winner: Option<Faction>,
    pub end: MatchEnd,
    pub scores: Scoreboard,
    /// Faction turns played.
    pub turns: u32,
    pub survivors: UnitCounts,
    pub final_state: GameState,
}

/// Runs whole matches against a shared value store.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    orchestrator: TurnOrchestrator,
    rules: RuleConfig,
    max_turns: Option<u32>,
}

impl MatchRunner {
    /// Create a new match runner builder
    pub fn builder() -> MatchRunnerBuilder {
        MatchRunnerBuilder::new()
    }

    pub fn orchestrator(&self) -> &TurnOrchestrator {
        &self.orchestrator
    }

    /// Plays `state` to the end.
    pub fn run<R: Rng + ?Sized>(
        &self,
        state: GameState,
        store: &mut QStore,
        epsilon: f64,
        rng: &mut R,
    ) -> MatchOutcome {
        self.run_with(state, store, epsilon, rng, |_, _, _| {})
    }

    /// Plays `state` to the end, calling `on_turn` after every faction turn
    /// with the acting faction, its report and the running scores.
    pub fn run_with<R, F>(
        &self,
        mut state: GameState,
        store: &mut QStore,
        epsilon: f64,
        rng: &mut R,
        mut on_turn: F,
    ) -> MatchOutcome
    where
        R: Rng + ?Sized,
        F: FnMut(Faction, &TurnReport, &Scoreboard),
    {
        let mut scores = Scoreboard::default();
        let mut faction = Faction::Player;
        let mut turns = 0;

        let end = loop {
            if self.max_turns.is_some_and(|limit| turns >= limit) {
                break (None, MatchEnd::TurnLimit);
            }

            let report = self
                .orchestrator
                .run_faction_turn(&mut state, faction, store, epsilon, rng);
            state.reset_turn_flags();
            turns += 1;

            scores.accrue(control_points(&state));
            on_turn(faction, &report, &scores);

            if let Some(victory) = check_victory(&state, &scores, self.rules.victory_score) {
                break (Some(victory.winner), MatchEnd::Victory(victory.reason));
            }
            faction = faction.opponent();
        };

        let (winner, end) = end;
        let survivors = UnitCounts::of(&state);
        match winner {
            Some(winner) => tracing::info!(
                "Match over after {} turns: {} wins ({:?}), score {}-{}, survivors {}-{}",
                turns,
                winner,
                end,
                scores.player,
                scores.enemy,
                survivors.player,
                survivors.enemy
            ),
            None => tracing::info!(
                "Match drawn after {} turns, score {}-{}",
                turns,
                scores.player,
                scores.enemy
            ),
        }

        MatchOutcome {
            winner,
            end,
            scores,
            turns,
            survivors,
            final_state: state,
        }
    }
}

/// Builder for [`MatchRunner`] with flexible configuration.
pub struct MatchRunnerBuilder {
    rules: RuleConfig,
    turn: TurnConfig,
    policy: Policy,
    max_turns: Option<u32>,
}

impl MatchRunnerBuilder {
    fn new() -> Self {
        Self {
            rules: RuleConfig::default(),
            turn: TurnConfig::default(),
            policy: Policy::default(),
            max_turns: None,
        }
    }

    /// Take rules, turn shaping and turn limit from a runtime configuration
    pub fn config(mut self, config: &RuntimeConfig) -> Self {
        self.rules = config.rules;
        self.turn = config.turn;
        self.max_turns = config.trainer.max_turns;
        self
    }

    pub fn rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn turn_config(mut self, turn: TurnConfig) -> Self {
        self.turn = turn;
        self
    }

    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// End matches as a draw after this many faction turns
    pub fn max_turns(mut self, max_turns: Option<u32>) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn build(self) -> MatchRunner {
        MatchRunner {
            orchestrator: TurnOrchestrator::new(self.rules, self.turn).with_policy(self.policy),
            rules: self.rules,
            max_turns: self.max_turns,
        }
    }
}
