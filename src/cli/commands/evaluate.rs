//! Evaluate command - Greedy self-play with a trained agent

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{format_number, print_kv, print_outcomes, print_section},
    q_learning::{OutcomeCounts, SavedAgent},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a trained agent with greedy self-play")]
pub struct EvaluateArgs {
    /// Path to a saved agent snapshot
    pub snapshot: PathBuf,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 10_000)]
    pub games: usize,

    /// Random seed for tie-breaking (defaults to the saved seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EvaluationExport {
    snapshot: String,
    episodes_trained: usize,
    games: usize,
    outcomes: OutcomeCounts,
    x_win_rate: f64,
    o_win_rate: f64,
    draw_rate: f64,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    println!("Loading trained agent from: {}", args.snapshot.display());
    let saved = SavedAgent::load_from_file(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;

    let config = match args.seed {
        Some(seed) => saved.config.with_seed(seed),
        None => saved.config,
    };
    let mut agent = saved.to_agent(Some(config))?;

    print_section("Loaded Agent Info");
    print_kv("Episodes trained", &format_number(agent.episodes_trained()));
    print_kv("Table entries", &format_number(agent.table_size()));
    print_kv("Value player", &agent.config().value_player.to_string());
    print_kv("Games", &format_number(args.games));

    let counts = agent.evaluate(args.games)?;
    println!();
    print_outcomes("Evaluation results:", &counts);

    if let Some(ref path) = args.export {
        let export = EvaluationExport {
            snapshot: args.snapshot.display().to_string(),
            episodes_trained: agent.episodes_trained(),
            games: args.games,
            outcomes: counts,
            x_win_rate: counts.x_win_rate(),
            o_win_rate: counts.o_win_rate(),
            draw_rate: counts.draw_rate(),
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create export file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &export).context("Failed to serialize results")?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}
