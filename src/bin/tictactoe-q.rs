//! tictactoe-q CLI - train and inspect a tabular Q-learning agent
//!
//! - Train through self-play in stages, reporting greedy results after each
//! - Evaluate or demo a saved agent
//! - Export the learned table to CSV and pretty-print it

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictactoe-q")]
#[command(version, about = "Tabular Q-learning for tic-tac-toe", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the agent through self-play
    Train(tictactoe_q::cli::commands::train::TrainArgs),

    /// Evaluate a saved agent with greedy self-play
    Evaluate(tictactoe_q::cli::commands::evaluate::EvaluateArgs),

    /// Play and print one greedy game
    Demo(tictactoe_q::cli::commands::demo::DemoArgs),

    /// Export the learned table of a snapshot to CSV
    Export(tictactoe_q::cli::commands::export::ExportArgs),

    /// Pretty-print a Q-table CSV
    Show(tictactoe_q::cli::commands::show::ShowArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tictactoe_q::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Train(args) => tictactoe_q::cli::commands::train::execute(args),
        Commands::Evaluate(args) => tictactoe_q::cli::commands::evaluate::execute(args),
        Commands::Demo(args) => tictactoe_q::cli::commands::demo::execute(args),
        Commands::Export(args) => tictactoe_q::cli::commands::export::execute(args),
        Commands::Show(args) => tictactoe_q::cli::commands::show::execute(args),
    }
}
