//! Per-candidate search results for a single position

use serde::{Deserialize, Serialize};

use super::minimax::{Objective, SearchStats};
use crate::tictactoe::{Player, Position};

/// Fixed-sign score of one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub position: Position,
    pub score: i32,
}

/// Result of [`Minimax::analyze`](super::Minimax::analyze)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Side that was to move in the analysed position
    pub to_move: Player,
    pub objective: Objective,
    /// Every candidate in row-major order
    pub candidates: Vec<MoveScore>,
    /// Selected move; `None` when the position was already finished
    pub best: Option<Position>,
    pub best_score: Option<i32>,
    pub stats: SearchStats,
}

impl Analysis {
    /// Score of a candidate, if it was searched
    pub fn score_of(&self, position: Position) -> Option<i32> {
        self.candidates
            .iter()
            .find(|c| c.position == position)
            .map(|c| c.score)
    }
}
