//! Show command - Pretty-print a Q-table CSV

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::q_learning::serialization::load_records_csv;

#[derive(Parser, Debug)]
#[command(about = "Print every row of a Q-table CSV as boards")]
pub struct ShowArgs {
    /// Path to a CSV written by `train --csv` or `export`
    pub csv: PathBuf,

    /// Print at most this many rows
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let records = load_records_csv(&args.csv)
        .with_context(|| format!("Failed to read {}", args.csv.display()))?;
    let limit = args.limit.unwrap_or(records.len());

    for record in records.iter().take(limit) {
        println!("State before win:\n{}", record.state.pretty());
        println!("Last action:\n{}", record.action.pretty());
        println!("Reward: {}", record.value);
        println!("\n{}\n", "-".repeat(30));
    }
    Ok(())
}
