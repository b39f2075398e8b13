//! Game state machine for a single game

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    lines::winner_of,
};
use crate::{Error, Result};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A single game of Tic-Tac-Toe.
///
/// The engine only changes through [`GameEngine::apply_move`]. Once a player
/// has three in a row or the board is full, the game is terminal and every
/// further move is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    state: Board,
    player_to_move: Option<Player>,
    winner: Option<Player>,
}

impl GameEngine {
    /// Create a new game on the empty board with X to move
    pub fn new() -> Self {
        GameEngine {
            state: Board::empty(),
            player_to_move: Some(Player::X),
            winner: None,
        }
    }

    /// Create a game positioned at an arbitrary board.
    ///
    /// The mover is inferred from piece parity and the winner from the board's
    /// lines. A board that already has a winner has nobody to move.
    pub fn at(state: Board) -> Self {
        let winner = winner_of(&state);
        let player_to_move = if winner.is_some() {
            None
        } else {
            Some(state.mover_by_parity())
        };
        GameEngine {
            state,
            player_to_move,
            winner,
        }
    }

    pub fn state(&self) -> Board {
        self.state
    }

    /// Player to move, or `None` once somebody has won
    pub fn player_to_move(&self) -> Option<Player> {
        self.player_to_move
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Every board reachable with one move, in increasing cell order
    pub fn allowed_moves(&self) -> Vec<Board> {
        let Some(player) = self.player_to_move else {
            return Vec::new();
        };
        let mark = player.to_cell();
        self.state
            .empty_positions()
            .into_iter()
            .map(|pos| self.state.with_cell(pos, mark))
            .collect()
    }

    /// Move to `next_state`, which must be one of [`Self::allowed_moves`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the game is over or `next_state` is not
    /// a single-cell completion by the player to move.
    pub fn apply_move(&mut self, next_state: Board) -> Result<()> {
        if !self.is_playable() {
            return Err(Error::IllegalMove {
                from: self.state,
                to: next_state,
                reason: "game already completed",
            });
        }
        if !self.allowed_moves().contains(&next_state) {
            return Err(Error::IllegalMove {
                from: self.state,
                to: next_state,
                reason: "not a single empty cell filled by the player to move",
            });
        }

        self.state = next_state;
        self.winner = winner_of(&self.state);
        self.player_to_move = match (self.winner, self.player_to_move) {
            (Some(_), _) => None,
            (None, player) => player.map(Player::opponent),
        };
        Ok(())
    }

    /// True while nobody has won and an empty cell remains
    pub fn is_playable(&self) -> bool {
        self.winner.is_none() && !self.state.is_full()
    }

    /// `None` while the game is still playable
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner {
            Some(player) => Some(GameOutcome::Win(player)),
            None if self.state.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
