//! Search-backed opponent ("hard")

use tracing::debug;

use super::Agent;
use crate::{
    Error, Result,
    search::{Minimax, Objective, SearchStats},
    tictactoe::{Board, Position},
};

/// Plays the move chosen by a full-depth alpha-beta search.
///
/// With the default [`Objective::FixedSign`] this agent only plays
/// optimally as O; see [`crate::search::minimax`].
pub struct MinimaxAgent {
    name: String,
    engine: Minimax,
}

impl MinimaxAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            engine: Minimax::new(),
        }
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.engine = self.engine.with_objective(objective);
        self
    }

    /// Counters from the last move selection
    pub fn last_stats(&self) -> SearchStats {
        self.engine.stats()
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board) -> Result<Position> {
        let choice = self.engine.best_move(board).ok_or(Error::NoValidMoves)?;
        let stats = self.engine.stats();
        debug!(
            agent = %self.name,
            objective = %self.engine.objective(),
            row = choice.row,
            col = choice.col,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "minimax move"
        );
        Ok(choice)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
