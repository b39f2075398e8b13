//! Export command - Write the table of a snapshot as CSV

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::q_learning::{SavedAgent, serialization::save_table_csv};

#[derive(Parser, Debug)]
#[command(about = "Export the learned table of a snapshot to CSV")]
pub struct ExportArgs {
    /// Path to a saved agent snapshot
    pub snapshot: PathBuf,

    /// Output CSV path
    #[arg(long, short = 'o', default_value = "q_table.csv")]
    pub output: PathBuf,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let saved = SavedAgent::load_from_file(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;
    let rows = save_table_csv(&args.output, saved.table())
        .with_context(|| format!("Failed to write CSV {}", args.output.display()))?;
    println!("✓ Exported {} rows to: {}", rows, args.output.display());
    Ok(())
}
