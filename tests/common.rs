//! Common test utilities for the tictactoe-q test suite.

use std::collections::{HashMap, VecDeque};

use tictactoe_q::{AgentConfig, Board, GameEngine};

/// Parse a nine-character board literal.
pub fn board(s: &str) -> Board {
    s.parse().expect("valid board literal")
}

/// Every game position reachable from the empty board by legal play.
///
/// The engine stored for each board is the one reached by playing there.
pub fn reachable_games() -> HashMap<Board, GameEngine> {
    let mut seen = HashMap::new();
    let mut queue = VecDeque::new();
    let start = GameEngine::new();
    seen.insert(start.state(), start.clone());
    queue.push_back(start);

    while let Some(game) = queue.pop_front() {
        for next in game.allowed_moves() {
            if seen.contains_key(&next) {
                continue;
            }
            let mut child = game.clone();
            child.apply_move(next).expect("allowed move applies");
            seen.insert(next, child.clone());
            queue.push_back(child);
        }
    }
    seen
}

/// Default hyperparameters with a fixed seed
pub fn seeded_config(seed: u64) -> AgentConfig {
    AgentConfig::default().with_seed(seed)
}
