//! Outcome histograms for training and evaluation runs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameOutcome, Player};

/// Counts of finished games by outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn wins_for(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        rate(self.x_wins, self.total())
    }

    pub fn o_win_rate(&self) -> f64 {
        rate(self.o_wins, self.total())
    }

    pub fn draw_rate(&self) -> f64 {
        rate(self.draws, self.total())
    }

    /// Combine two histograms
    pub fn merge(&self, other: &OutcomeCounts) -> OutcomeCounts {
        OutcomeCounts {
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            draws: self.draws + other.draws,
        }
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {:.2}%, O: {:.2}%, draw: {:.2}%",
            self.x_win_rate() * 100.0,
            self.o_win_rate() * 100.0,
            self.draw_rate() * 100.0
        )
    }
}
