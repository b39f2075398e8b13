//! Demo command - Show one greedy game turn by turn

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{q_learning::SavedAgent, tictactoe::GameOutcome};

#[derive(Parser, Debug)]
#[command(about = "Play and print one greedy game")]
pub struct DemoArgs {
    /// Path to a saved agent snapshot
    pub snapshot: PathBuf,

    /// Random seed for tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: DemoArgs) -> Result<()> {
    let saved = SavedAgent::load_from_file(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;
    let config = match args.seed {
        Some(seed) => saved.config.with_seed(seed),
        None => saved.config,
    };
    let mut agent = saved.to_agent(Some(config))?;

    let demo = agent.demo_game()?;
    for (turn, board) in demo.boards.iter().enumerate() {
        println!(" \nTurn {turn}\n");
        print!("{}", board.pretty());
    }

    match demo.outcome {
        GameOutcome::Win(player) => println!("\n{player} is the winner!"),
        GameOutcome::Draw => println!("\nIt's a draw!"),
    }
    Ok(())
}
