//! Shared agent flags for CLI commands

use anyhow::{Result, anyhow};
use clap::Args;

use crate::{q_learning::AgentConfig, tictactoe::Player};

/// Hyperparameter flags; unset flags keep the value of the base configuration
#[derive(Args, Debug, Clone, Default)]
pub struct AgentArgs {
    /// Exploration rate ε (0.0-1.0) [default: 0.1]
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Learning rate α (0.0 exclusive to 1.0) [default: 0.5]
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Discount factor γ (0.0-1.0) [default: 0.9]
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Player whose wins are rewarded (`x` or `o`) [default: x]
    #[arg(long)]
    pub value_player: Option<String>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AgentArgs {
    /// Overlay the flags that were given on top of `base` and validate.
    pub fn apply(&self, base: AgentConfig) -> Result<AgentConfig> {
        let mut config = base;
        if let Some(epsilon) = self.epsilon {
            config = config.with_epsilon(epsilon);
        }
        if let Some(alpha) = self.alpha {
            config = config.with_learning_rate(alpha);
        }
        if let Some(gamma) = self.gamma {
            config = config.with_discount_factor(gamma);
        }
        if let Some(ref player) = self.value_player {
            config = config.with_value_player(parse_player_token(player, "--value-player")?);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Parse comma-separated episode counts (e.g., "1000,4000,5000")
pub(crate) fn parse_stages(s: &str) -> Result<Vec<usize>> {
    let stages = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|e| anyhow!("Invalid stage '{part}' in '{s}': {e}"))
        })
        .collect::<Result<Vec<_>>>()?;

    if stages.is_empty() {
        return Err(anyhow!("At least one training stage is required"));
    }
    Ok(stages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_unset_values() {
        let base = AgentConfig::default().with_learning_rate(1.0);
        let args = AgentArgs {
            gamma: Some(0.8),
            ..AgentArgs::default()
        };
        let config = args.apply(base).unwrap();
        assert_eq!(config.learning_rate, 1.0);
        assert_eq!(config.discount_factor, 0.8);
        assert_eq!(config.epsilon, 0.1);
    }

    #[test]
    fn test_apply_validates() {
        let args = AgentArgs {
            epsilon: Some(3.0),
            ..AgentArgs::default()
        };
        assert!(args.apply(AgentConfig::default()).is_err());
    }

    #[test]
    fn test_parse_player_token() {
        assert_eq!(
            parse_player_token("X", "--value-player").unwrap(),
            Player::X
        );
        assert_eq!(
            parse_player_token(" o ", "--value-player").unwrap(),
            Player::O
        );
        assert!(parse_player_token("z", "--value-player").is_err());
    }

    #[test]
    fn test_parse_stages() {
        assert_eq!(
            parse_stages("1000, 4000,5000").unwrap(),
            vec![1000, 4000, 5000]
        );
        assert!(parse_stages("").is_err());
        assert!(parse_stages("10,abc").is_err());
    }
}
