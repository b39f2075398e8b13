//! Q-learning agent trained through self-play
//!
//! One agent chooses the moves of both players. Rewards are always measured
//! from the perspective of the configured value player, so the table holds
//! that player's view of every move regardless of who made it.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    q_learning::{AgentConfig, OutcomeCounts, QTable},
    tictactoe::{Board, GameEngine, GameOutcome},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// A game played greedily from the empty board
#[derive(Debug, Clone, PartialEq)]
pub struct DemoGame {
    /// Every board visited, starting with the empty board
    pub boards: Vec<Board>,
    pub outcome: GameOutcome,
}

/// Tabular Q-learning agent (off-policy TD control)
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    config: AgentConfig,
    rng: StdRng,
    episodes_trained: usize,
}

impl QLearningAgent {
    /// Create an agent with an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a rate is out of range.
    pub fn new(config: AgentConfig) -> Result<Self> {
        Self::with_table(config, QTable::new())
    }

    /// Create an agent that continues from an existing table.
    pub fn with_table(config: AgentConfig, q_table: QTable) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            q_table,
            rng: build_rng(config.seed),
            config,
            episodes_trained: 0,
        })
    }

    pub(crate) fn with_episodes_trained(mut self, episodes_trained: usize) -> Self {
        self.episodes_trained = episodes_trained;
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Number of training episodes this table has seen
    pub fn episodes_trained(&self) -> usize {
        self.episodes_trained
    }

    pub fn table_size(&self) -> usize {
        self.q_table.size()
    }

    /// Every `(state, action, value)` triple learned so far, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (Board, Board, f64)> + '_ {
        self.q_table.iter()
    }

    /// Estimated value of moving from `state` to `action`; 0.0 if never updated
    pub fn value_of(&self, state: &Board, action: &Board) -> f64 {
        self.q_table.get(state, action)
    }

    /// ε-greedy action selection
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] if `legal_actions` is empty.
    pub fn choose_action_training(
        &mut self,
        state: &Board,
        legal_actions: &[Board],
    ) -> Result<Board> {
        if legal_actions.is_empty() {
            return Err(Error::NoLegalActions { state: *state });
        }
        if self.rng.random::<f64>() < self.config.epsilon {
            // Explore: random action
            return self.pick_uniform(state, legal_actions);
        }
        self.choose_action_greedy(state, legal_actions)
    }

    /// Pick uniformly among the highest-valued actions, with no exploration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] if `legal_actions` is empty.
    pub fn choose_action_greedy(
        &mut self,
        state: &Board,
        legal_actions: &[Board],
    ) -> Result<Board> {
        let best = self.q_table.best_actions(state, legal_actions);
        self.pick_uniform(state, &best)
    }

    fn pick_uniform(&mut self, state: &Board, actions: &[Board]) -> Result<Board> {
        actions
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoLegalActions { state: *state })
    }

    /// Reward for the position the engine has just reached
    pub fn reward_signal(&self, engine: &GameEngine) -> f64 {
        match engine.winner() {
            Some(winner) if winner == self.config.value_player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    /// Q-learning update
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// The successors a' are the allowed moves of a fresh engine placed at
    /// `next_state`, so the player to move there follows from piece parity.
    /// A terminal `next_state` has no successors and contributes 0.
    pub fn update(&mut self, state: Board, action: Board, reward: f64, next_state: Board) {
        let current_q = self.q_table.get(&state, &action);
        let next_actions = GameEngine::at(next_state).allowed_moves();
        let max_next_q = self.q_table.max_q(&next_state, &next_actions);
        let td_target = reward + self.config.discount_factor * max_next_q;
        let new_q = current_q + self.config.learning_rate * (td_target - current_q);
        self.q_table.set(state, action, new_q);
    }

    /// Play one self-play game from the empty board, updating after every move.
    pub fn run_episode(&mut self) -> Result<GameOutcome> {
        let mut game = GameEngine::new();
        let mut state = game.state();
        let outcome = loop {
            if let Some(outcome) = game.outcome() {
                break outcome;
            }
            let action = self.choose_action_training(&state, &game.allowed_moves())?;
            game.apply_move(action)?;
            let reward = self.reward_signal(&game);
            let next_state = game.state();
            self.update(state, action, reward, next_state);
            state = next_state;
        };
        self.episodes_trained += 1;
        trace!(?outcome, table_size = self.table_size(), "episode finished");
        Ok(outcome)
    }

    /// Run `num_episodes` independent episodes; only the table carries over.
    pub fn train(&mut self, num_episodes: usize) -> Result<OutcomeCounts> {
        self.train_with_progress(num_episodes, |_| {})
    }

    /// Like [`Self::train`], calling `on_episode` with the outcome of each episode.
    pub fn train_with_progress<F>(
        &mut self,
        num_episodes: usize,
        mut on_episode: F,
    ) -> Result<OutcomeCounts>
    where
        F: FnMut(GameOutcome),
    {
        let mut counts = OutcomeCounts::default();
        for _ in 0..num_episodes {
            let outcome = self.run_episode()?;
            counts.record(outcome);
            on_episode(outcome);
        }
        debug!(
            episodes = num_episodes,
            table_size = self.table_size(),
            %counts,
            "training finished"
        );
        Ok(counts)
    }

    /// Play `num_games` greedy games against itself without learning.
    pub fn evaluate(&mut self, num_games: usize) -> Result<OutcomeCounts> {
        let mut counts = OutcomeCounts::default();
        for _ in 0..num_games {
            counts.record(self.play_greedy(|_| {})?);
        }
        debug!(games = num_games, %counts, "evaluation finished");
        Ok(counts)
    }

    /// Play a single greedy game, keeping every board for display.
    pub fn demo_game(&mut self) -> Result<DemoGame> {
        let mut boards = vec![Board::empty()];
        let outcome = self.play_greedy(|board| boards.push(board))?;
        Ok(DemoGame { boards, outcome })
    }

    /// Greedy self-play game; `on_move` sees each board after it is reached.
    fn play_greedy<F>(&mut self, mut on_move: F) -> Result<GameOutcome>
    where
        F: FnMut(Board),
    {
        let mut game = GameEngine::new();
        loop {
            if let Some(outcome) = game.outcome() {
                return Ok(outcome);
            }
            let state = game.state();
            let action = self.choose_action_greedy(&state, &game.allowed_moves())?;
            game.apply_move(action)?;
            on_move(action);
        }
    }
}
