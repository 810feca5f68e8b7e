//! Episode loop for self-play training.
//!
//! Each episode generates a fresh scenario and plays it to the end against the
//! shared value store. Exploration starts high and decays multiplicatively
//! after every episode down to a floor. The table is saved once at the end.

use game_core::Faction;
use rand::Rng;

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::learning::QStore;
use crate::repository::TableRepository;
use crate::runtime::{MatchEnd, MatchRunner};
use crate::scenario;

/// Result of one training episode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpisodeReport {
    pub episode: u32,
    pub epsilon: f64,
    pub winner: Option<Faction>,
    pub end: MatchEnd,
    pub player_score: u32,
    pub enemy_score: u32,
    pub turns: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainingSummary {
    pub episodes: Vec<EpisodeReport>,
    /// States in the table after training.
    pub states: usize,
}

impl TrainingSummary {
    pub fn wins(&self, faction: Faction) -> usize {
        self.episodes
            .iter()
            .filter(|episode| episode.winner == Some(faction))
            .count()
    }

    pub fn draws(&self) -> usize {
        self.episodes
            .iter()
            .filter(|episode| episode.winner.is_none())
            .count()
    }
}

pub struct Trainer {
    runner: MatchRunner,
    config: RuntimeConfig,
}

impl Trainer {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            runner: MatchRunner::builder().config(&config).build(),
            config,
        }
    }

    /// Runs all episodes, then saves the table to `repository`.
    pub fn train<R: Rng + ?Sized>(
        &self,
        store: &mut QStore,
        repository: &dyn TableRepository,
        rng: &mut R,
    ) -> Result<TrainingSummary> {
        let trainer = &self.config.trainer;
        let mut epsilon = trainer.initial_epsilon;
        let mut summary = TrainingSummary::default();

        for episode in 1..=trainer.episodes {
            tracing::info!("Starting episode {}/{}", episode, trainer.episodes);

            let state = scenario::generate(&self.config.rules, &self.config.scenario, rng)?;
            let outcome = self.runner.run(state, store, epsilon, rng);

            tracing::info!(
                "Episode {}/{} finished: player {}, enemy {} (eps {:.3}, {} states)",
                episode,
                trainer.episodes,
                outcome.scores.player,
                outcome.scores.enemy,
                epsilon,
                store.table().len()
            );

            summary.episodes.push(EpisodeReport {
                episode,
                epsilon,
                winner: outcome.winner,
                end: outcome.end,
                player_score: outcome.scores.player,
                enemy_score: outcome.scores.enemy,
                turns: outcome.turns,
            });
            epsilon = trainer.decay(epsilon);
        }

        store.save(repository)?;
        summary.states = store.table().len();
        tracing::info!("Training finished: {} states learned", summary.states);

        Ok(summary)
    }
}
