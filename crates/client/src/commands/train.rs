use anyhow::{Context, Result};
use clap::Args;
use console::style;
use game_core::Faction;
use rand::SeedableRng;
use rand::rngs::StdRng;
use runtime::{FileTableRepository, QStore, Trainer};

use crate::config::ClientConfig;

#[derive(Args)]
pub struct TrainCommand {
    /// Number of episodes (overrides the config file)
    #[arg(long, short)]
    episodes: Option<u32>,

    /// Declare a match drawn after this many faction turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Start from an empty table instead of the saved one
    #[arg(long)]
    fresh: bool,
}

impl TrainCommand {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let mut runtime_config = config.runtime;
        if let Some(episodes) = self.episodes {
            runtime_config.trainer.episodes = episodes;
        }
        if self.max_turns.is_some() {
            runtime_config.trainer.max_turns = self.max_turns;
        }

        let seed = config.seed_or_random();
        let mut rng = StdRng::seed_from_u64(seed);
        let repository = FileTableRepository::new(&config.table_path)
            .context("Failed to open value table location")?;

        let mut store = QStore::new(runtime_config.learning);
        if !self.fresh && store.load(&repository)? {
            tracing::info!(
                "Resuming from {} ({} states)",
                config.table_path.display(),
                store.table().len()
            );
        }

        println!(
            "{} {} episodes (seed {})",
            style("Training").bold().cyan(),
            runtime_config.trainer.episodes,
            seed
        );

        let trainer = Trainer::new(runtime_config);
        let summary = trainer.train(&mut store, &repository, &mut rng)?;

        println!();
        println!("{}", style("Training complete").bold().green());
        println!("  Player wins: {}", summary.wins(Faction::Player));
        println!("  Enemy wins:  {}", summary.wins(Faction::Enemy));
        println!("  Draws:       {}", summary.draws());
        println!("  States:      {}", summary.states);
        if let Some(last) = summary.episodes.last() {
            println!(
                "  Last episode: {} turns, score {}-{}, ε {:.3}",
                last.turns, last.player_score, last.enemy_score, last.epsilon
            );
        }
        println!("  Saved to:    {}", repository.path().display());

        Ok(())
    }
}
