//! Output formatting and progress bars for CLI

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::q_learning::OutcomeCounts;

/// Create a progress bar for a training stage
pub fn create_training_progress(total_episodes: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_episodes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
            .context("Invalid progress bar template")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print outcome percentages of a batch of games
pub fn print_outcomes(label: &str, counts: &OutcomeCounts) {
    println!("{label}");
    println!("    percentage results: {counts}");
}
