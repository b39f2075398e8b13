//! Tabular Q-learning for Tic-Tac-Toe
//!
//! The agent learns action values for both players through self-play. States
//! and actions are both boards: an action is the board produced by the move,
//! so the table is keyed by `(board before, board after)`.
//!
//! ## Update rule
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use tictactoe_q::q_learning::{AgentConfig, QLearningAgent};
//!
//! let mut agent = QLearningAgent::new(AgentConfig::default().with_seed(1)).unwrap();
//! agent.train(20_000).unwrap();
//! let counts = agent.evaluate(1_000).unwrap();
//! println!("{counts}");
//! ```

pub mod agent;
pub mod config;
pub mod q_table;
pub mod serialization;
pub mod stats;

// Public re-exports
pub use agent::{DemoGame, QLearningAgent};
pub use config::AgentConfig;
pub use q_table::QTable;
pub use serialization::{QTableRecord, SavedAgent, read_table_csv, write_table_csv};
pub use stats::OutcomeCounts;
