use anyhow::{Context, Result};
use clap::Args;
use console::style;
use game_core::{Faction, GameState, ObjectiveKind, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use runtime::{FileTableRepository, MatchEnd, MatchRunner, QStore, scenario};

use crate::config::ClientConfig;

#[derive(Args)]
pub struct PlayCommand {
    /// Exploration rate (overrides the config file)
    #[arg(long)]
    epsilon: Option<f64>,

    /// Declare the match drawn after this many faction turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Print the board before and after the match
    #[arg(long)]
    board: bool,

    /// Print a line after every faction turn
    #[arg(long, short)]
    verbose: bool,

    /// Save what the agent learned during the match
    #[arg(long)]
    save: bool,
}

impl PlayCommand {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let runtime_config = config.runtime;
        let epsilon = self.epsilon.unwrap_or(runtime_config.learning.epsilon);
        if !(0.0..=1.0).contains(&epsilon) {
            anyhow::bail!("epsilon must be in [0, 1], got {epsilon}");
        }

        let seed = config.seed_or_random();
        let mut rng = StdRng::seed_from_u64(seed);
        let repository = FileTableRepository::new(&config.table_path)
            .context("Failed to open value table location")?;

        let mut store = QStore::new(runtime_config.learning);
        if store.load(&repository)? {
            println!(
                "{} {} ({} states)",
                style("Loaded").bold().cyan(),
                repository.path().display(),
                store.table().len()
            );
        } else {
            println!(
                "{} no table at {}, playing untrained",
                style("Note:").yellow(),
                repository.path().display()
            );
        }

        let state = scenario::generate(&runtime_config.rules, &runtime_config.scenario, &mut rng)?;
        if self.board {
            println!("\n{}", style("Starting board").bold());
            print_board(&state);
        }

        let runner = MatchRunner::builder()
            .config(&runtime_config)
            .max_turns(self.max_turns.or(runtime_config.trainer.max_turns))
            .build();

        let mut turn = 0u32;
        let verbose = self.verbose;
        let outcome = runner.run_with(state, &mut store, epsilon, &mut rng, |faction, report, scores| {
            turn += 1;
            if verbose {
                println!(
                    "turn {:>4}  {:<6}  holders {}  forced {}  eliminated {}  score {}-{}",
                    turn,
                    faction,
                    report.objective_holders,
                    report.forced.len(),
                    report.eliminated.len(),
                    scores.player,
                    scores.enemy
                );
            }
        });

        if self.board {
            println!("\n{}", style("Final board").bold());
            print_board(&outcome.final_state);
        }

        println!();
        match (outcome.winner, outcome.end) {
            (Some(winner), MatchEnd::Victory(reason)) => println!(
                "{} {} wins by {} after {} turns",
                style("Result:").bold(),
                style(winner).bold().green(),
                reason,
                outcome.turns
            ),
            _ => println!(
                "{} draw after {} turns",
                style("Result:").bold(),
                outcome.turns
            ),
        }
        println!("  Score:     {}-{}", outcome.scores.player, outcome.scores.enemy);
        println!(
            "  Survivors: {}-{}",
            outcome.survivors.player, outcome.survivors.enemy
        );
        println!("  Seed:      {}", seed);

        if self.save {
            store.save(&repository)?;
            println!("  Saved to:  {}", repository.path().display());
        }

        Ok(())
    }
}

/// Render the board, one row per line. Units take precedence over objectives, Major over Minor.
fn print_board(state: &GameState) {
    for y in 0..state.grid_size() {
        let row: String = (0..state.grid_size())
            .map(|x| tile_glyph(state, Position::new(x, y)))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}", row);
    }
}

fn tile_glyph(state: &GameState, position: Position) -> String {
    if let Some(unit) = state.units().iter().find(|unit| unit.position == position) {
        return match unit.faction {
            Faction::Player => style("P").blue().bold().to_string(),
            Faction::Enemy => style("E").red().bold().to_string(),
        };
    }
    let kind = state.objectives_at(position).map(|o| o.kind).min();
    match kind {
        Some(ObjectiveKind::Major) => style("M").yellow().bold().to_string(),
        Some(ObjectiveKind::Minor) => style("m").yellow().to_string(),
        None => style(".").dim().to_string(),
    }
}
