//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::Player};

/// Hyperparameters of a [`QLearningAgent`](super::QLearningAgent).
///
/// # Examples
///
/// ```
/// use tictactoe_q::q_learning::AgentConfig;
/// use tictactoe_q::tictactoe::Player;
///
/// let config = AgentConfig::default()
///     .with_learning_rate(1.0)
///     .with_value_player(Player::O)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Exploration rate ε in [0, 1]
    pub epsilon: f64,
    /// Learning rate α in (0, 1]
    pub learning_rate: f64,
    /// Discount factor γ in [0, 1]
    pub discount_factor: f64,
    /// Player whose wins are rewarded with +1
    pub value_player: Player,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    pub const DEFAULT_EPSILON: f64 = 0.1;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.5;
    pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.9;

    /// Create a configuration with every parameter given explicitly.
    pub fn new(
        epsilon: f64,
        learning_rate: f64,
        discount_factor: f64,
        value_player: Player,
    ) -> Self {
        Self {
            epsilon,
            learning_rate,
            discount_factor,
            value_player,
            seed: None,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_value_player(mut self, value_player: Player) -> Self {
        self.value_player = value_player;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every rate lies in its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(invalid(format!(
                "epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(invalid(format!(
                "learning rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(invalid(format!(
                "discount factor must be in [0, 1], got {}",
                self.discount_factor
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfiguration { message }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_EPSILON,
            Self::DEFAULT_LEARNING_RATE,
            Self::DEFAULT_DISCOUNT_FACTOR,
            Player::X,
        )
    }
}
