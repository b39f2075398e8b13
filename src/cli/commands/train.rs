//! Train command - Train the agent through self-play in stages

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;
use tracing::info;

use crate::{
    cli::{
        config::{AgentArgs, parse_stages},
        output::{
            create_training_progress, format_number, print_kv, print_outcomes, print_section,
        },
    },
    q_learning::{
        AgentConfig, OutcomeCounts, QLearningAgent, SavedAgent, serialization::save_table_csv,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Train the agent through self-play")]
pub struct TrainArgs {
    #[command(flatten)]
    pub agent: AgentArgs,

    /// Episodes per training stage, comma separated; greedy evaluation runs after each
    #[arg(long, short = 's', default_value = "1000,4000,5000,10000,10000")]
    pub stages: String,

    /// Number of greedy evaluation games after each stage
    #[arg(long, short = 'g', default_value_t = 10_000)]
    pub eval_games: usize,

    /// Continue training from a saved snapshot
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Output file for the trained agent snapshot
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Write the learned table as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

#[derive(Debug, Serialize)]
struct StageSummary {
    episodes: usize,
    episodes_trained: usize,
    table_size: usize,
    training: OutcomeCounts,
    evaluation: OutcomeCounts,
}

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    config: AgentConfig,
    baseline: OutcomeCounts,
    stages: Vec<StageSummary>,
    training_total: OutcomeCounts,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let stages = parse_stages(&args.stages)?;

    let mut agent = match &args.resume {
        Some(path) => {
            let saved = SavedAgent::load_from_file(path)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
            let config = args.agent.apply(saved.config)?;
            println!(
                "Resuming from {} ({} episodes, {} entries)",
                path.display(),
                format_number(saved.episodes_trained),
                format_number(saved.table().size())
            );
            saved.to_agent(Some(config))?
        }
        None => QLearningAgent::new(args.agent.apply(AgentConfig::default())?)?,
    };

    print_configuration(&agent, &stages, args.eval_games);

    let baseline = agent.evaluate(args.eval_games)?;
    print_outcomes("Before learning:", &baseline);

    let mut summaries = Vec::with_capacity(stages.len());
    let mut training_total = OutcomeCounts::default();
    for &episodes in &stages {
        let training = run_stage(&mut agent, episodes, !args.no_progress)?;
        training_total = training_total.merge(&training);

        let evaluation = agent.evaluate(args.eval_games)?;
        print_outcomes(
            &format!(
                "After {} learning games:",
                format_number(agent.episodes_trained())
            ),
            &evaluation,
        );
        info!(
            episodes_trained = agent.episodes_trained(),
            table_size = agent.table_size(),
            "stage complete"
        );

        summaries.push(StageSummary {
            episodes,
            episodes_trained: agent.episodes_trained(),
            table_size: agent.table_size(),
            training,
            evaluation,
        });
    }

    print_section("Training Complete");
    print_kv("Episodes trained", &format_number(agent.episodes_trained()));
    print_kv("Table entries", &format_number(agent.table_size()));

    if let Some(ref path) = args.output {
        SavedAgent::from_agent(&agent)
            .save_to_file(path)
            .with_context(|| format!("Failed to save snapshot {}", path.display()))?;
        println!("\n✓ Agent saved to: {}", path.display());
    }

    if let Some(ref path) = args.csv {
        let rows = save_table_csv(path, agent.q_table())
            .with_context(|| format!("Failed to write CSV {}", path.display()))?;
        println!("✓ Q-table ({} rows) written to: {}", rows, path.display());
    }

    if let Some(ref path) = args.summary {
        let summary = TrainingSummaryFile {
            config: *agent.config(),
            baseline,
            stages: summaries,
            training_total,
        };
        write_summary(path, &summary)?;
        println!("✓ Summary written to: {}", path.display());
    }

    Ok(())
}

fn print_configuration(agent: &QLearningAgent, stages: &[usize], eval_games: usize) {
    let config = agent.config();
    print_section("Training Configuration");
    print_kv("Epsilon", &config.epsilon.to_string());
    print_kv("Learning rate", &config.learning_rate.to_string());
    print_kv("Discount factor", &config.discount_factor.to_string());
    print_kv("Value player", &config.value_player.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }
    let stage_list: Vec<String> = stages.iter().map(|&s| format_number(s)).collect();
    print_kv("Stages", &stage_list.join(", "));
    print_kv("Evaluation games", &format_number(eval_games));
    println!();
}

fn run_stage(
    agent: &mut QLearningAgent,
    episodes: usize,
    progress: bool,
) -> Result<OutcomeCounts> {
    if !progress {
        return Ok(agent.train(episodes)?);
    }

    let pb = create_training_progress(episodes as u64)?;
    let counts = agent.train_with_progress(episodes, |_| pb.inc(1))?;
    pb.finish_with_message(format!("{} entries", format_number(agent.table_size())));
    Ok(counts)
}

fn write_summary(path: &Path, summary: &TrainingSummaryFile) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create summary file {}", path.display()))?;
    to_writer_pretty(file, summary).context("Failed to serialize training summary")?;
    Ok(())
}
