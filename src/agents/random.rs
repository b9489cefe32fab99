//! Uniformly random opponent ("easy")

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::debug;

use super::Agent;
use crate::{
    Error, Result,
    tictactoe::{Board, Position},
};

/// Picks uniformly among the empty cells.
///
/// The generator is owned by the agent, so two agents never share random
/// state and a seeded agent replays the same choices on the same boards.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent seeded from the thread RNG
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Result<Position> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let choice = moves[self.rng.random_range(0..moves.len())];
        debug!(agent = %self.name, row = choice.row, col = choice.col, "random move");
        Ok(choice)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
