use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use runtime::{FileTableRepository, QStore, TableStats, key_digest};
use serde::Serialize;

use crate::config::ClientConfig;

#[derive(Args)]
pub struct InspectCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// List this many states, largest rows first
    #[arg(long, default_value_t = 0)]
    top: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// JSON report
    Json,
}

#[derive(Serialize)]
struct TableReport {
    path: String,
    stats: TableStats,
    states: Vec<StateSummary>,
}

#[derive(Serialize)]
struct StateSummary {
    digest: String,
    units: usize,
    objectives: usize,
    actions: usize,
    best_action: String,
    best_value: f64,
}

impl InspectCommand {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let repository = FileTableRepository::new(&config.table_path)
            .context("Failed to open value table location")?;

        let mut store = QStore::new(config.runtime.learning);
        if !store.load(&repository)? {
            anyhow::bail!("No value table at {}", repository.path().display());
        }

        let report = TableReport {
            path: repository.path().display().to_string(),
            stats: store.stats(),
            states: top_states(&store, self.top),
        };

        match self.format {
            OutputFormat::Summary => print_summary(&report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        Ok(())
    }
}

fn top_states(store: &QStore, limit: usize) -> Vec<StateSummary> {
    let mut states: Vec<StateSummary> = store
        .table()
        .iter()
        .map(|(key, values)| {
            let best = store.best_action(key);
            StateSummary {
                digest: key_digest(key),
                units: key.units.len(),
                objectives: key.objectives.len(),
                actions: values.len(),
                best_action: best.to_string(),
                best_value: values.get(&best).copied().unwrap_or(0.0),
            }
        })
        .collect();

    states.sort_by(|a, b| b.actions.cmp(&a.actions));
    states.truncate(limit);
    states
}

fn print_summary(report: &TableReport) {
    let stats = &report.stats;

    println!("{}", style("Value Table").bold().cyan());
    println!("  Path:    {}", report.path);
    println!("  States:  {}", stats.states);
    println!("  Entries: {}", stats.entries);
    match (stats.min, stats.max, stats.mean) {
        (Some(min), Some(max), Some(mean)) => {
            println!("  Values:  min {:.4}, max {:.4}, mean {:.4}", min, max, mean)
        }
        _ => println!("  Values:  none"),
    }

    if report.states.is_empty() {
        return;
    }

    println!();
    println!("{}", style("Largest states").bold());
    for state in &report.states {
        println!(
            "  {}  {:>2} units  {:>2} objectives  {:>3} actions  best {} ({:.4})",
            style(&state.digest).dim(),
            state.units,
            state.objectives,
            state.actions,
            state.best_action,
            state.best_value
        );
    }
}
