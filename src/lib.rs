//! Tabular Q-learning for Tic-Tac-Toe
//!
//! This crate provides:
//! - A Tic-Tac-Toe game engine with move validation and win detection
//! - A Q-learning agent that learns action values through self-play
//! - CSV and MessagePack persistence for the learned table
//! - A command-line driver for staged training and inspection

pub mod cli;
pub mod error;
pub mod q_learning;
pub mod tictactoe;

pub use error::{Error, Result};
pub use q_learning::{AgentConfig, OutcomeCounts, QLearningAgent, QTable};
pub use tictactoe::{Board, GameEngine, GameOutcome, Player};
