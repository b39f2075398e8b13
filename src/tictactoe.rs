//! Tic-Tac-Toe game implementation

pub mod board;
pub mod engine;
pub mod lines;

pub use board::{Board, Cell, PieceCount, Player};
pub use engine::{GameEngine, GameOutcome};
pub use lines::{WINNING_LINES, has_won, winner_of};
