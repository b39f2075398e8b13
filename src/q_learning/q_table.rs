//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tictactoe::Board;

/// Q-table mapping (state, action) pairs to Q-values
///
/// An action is the board that results from the move, so both halves of the
/// key are plain boards. Pairs that were never written read as 0.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    q_values: HashMap<(Board, Board), f64>,
}

impl QTable {
    /// Create an empty Q-table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: &Board, action: &Board) -> f64 {
        self.q_values
            .get(&(*state, *action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: Board, action: Board, value: f64) {
        self.q_values.insert((state, action), value);
    }

    /// Maximum Q-value over `actions`, or 0.0 when there are none
    pub fn max_q(&self, state: &Board, actions: &[Board]) -> f64 {
        if actions.is_empty() {
            return 0.0;
        }
        actions
            .iter()
            .map(|action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// All actions whose Q-value equals the maximum over `actions`
    pub fn best_actions(&self, state: &Board, actions: &[Board]) -> Vec<Board> {
        let max_q = self.max_q(state, actions);
        actions
            .iter()
            .filter(|action| self.get(state, action) == max_q)
            .copied()
            .collect()
    }

    /// Iterate over every stored `(state, action, value)` triple
    pub fn iter(&self) -> impl Iterator<Item = (Board, Board, f64)> + '_ {
        self.q_values
            .iter()
            .map(|(&(state, action), &value)| (state, action, value))
    }

    /// Get total number of Q-values stored
    pub fn size(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }
}

impl FromIterator<(Board, Board, f64)> for QTable {
    fn from_iter<I: IntoIterator<Item = (Board, Board, f64)>>(iter: I) -> Self {
        Self {
            q_values: iter
                .into_iter()
                .map(|(state, action, value)| ((state, action), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_qtable_initialization() {
        let qtable = QTable::new();
        assert_eq!(qtable.get(&Board::empty(), &board("X        ")), 0.0);
        assert!(qtable.is_empty());
    }

    #[test]
    fn test_qtable_set_get() {
        let mut qtable = QTable::new();
        let state = Board::empty();
        qtable.set(state, board("    X    "), 1.5);
        assert_eq!(qtable.get(&state, &board("    X    ")), 1.5);
        assert_eq!(qtable.size(), 1);
    }

    #[test]
    fn test_max_q() {
        let mut qtable = QTable::new();
        let state = Board::empty();
        let actions = vec![board("X        "), board(" X       "), board("  X      ")];
        qtable.set(state, actions[0], 0.5);
        qtable.set(state, actions[1], 1.5);
        qtable.set(state, actions[2], 0.8);

        assert_eq!(qtable.max_q(&state, &actions), 1.5);
        assert_eq!(qtable.max_q(&state, &[]), 0.0);
    }

    #[test]
    fn test_max_q_all_negative() {
        let mut qtable = QTable::new();
        let state = Board::empty();
        let actions = vec![board("X        "), board(" X       ")];
        qtable.set(state, actions[0], -0.5);
        qtable.set(state, actions[1], -0.25);

        assert_eq!(qtable.max_q(&state, &actions), -0.25);
    }

    #[test]
    fn test_best_actions_keeps_ties() {
        let mut qtable = QTable::new();
        let state = Board::empty();
        let actions = vec![board("X        "), board(" X       "), board("  X      ")];
        qtable.set(state, actions[0], 1.0);
        qtable.set(state, actions[2], 1.0);

        assert_eq!(
            qtable.best_actions(&state, &actions),
            vec![actions[0], actions[2]]
        );
    }
}
