//! Full-depth minimax with alpha-beta pruning.
//!
//! Every terminal position is scored from one fixed frame: an X win is
//! [`X_WIN_SCORE`] (-1), an O win is [`O_WIN_SCORE`] (+1) and a draw is
//! [`DRAW_SCORE`] (0). O is therefore always the maximizer and X the
//! minimizer, whoever asks for a move.
//!
//! # Fixed-sign move selection
//!
//! [`best_move`] evaluates each candidate with X (the minimizer) to reply and
//! keeps the candidate with the strictly highest score. That is optimal when
//! O is to move. When X is to move the same rule still picks the highest
//! score, which favours O; callers that want X to play well must opt into
//! [`Objective::SideToMove`] explicitly.
//!
//! There is no depth limit and no transposition table: each node clones the
//! board and searches to the end of the game.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::analysis::{Analysis, MoveScore};
use crate::tictactoe::{Board, Player, Position};

/// Score of a position X has won
pub const X_WIN_SCORE: i32 = -1;
/// Score of a position O has won
pub const O_WIN_SCORE: i32 = 1;
/// Score of a full board without a winner
pub const DRAW_SCORE: i32 = 0;

/// Initial alpha; lower than any reachable score
pub const NEG_INFINITY: i32 = -1_000_000;
/// Initial beta; higher than any reachable score
pub const POS_INFINITY: i32 = 1_000_000;

/// Frame in which top-level candidates are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Objective {
    /// Always keep the highest fixed-sign score, i.e. play for O.
    #[default]
    FixedSign,
    /// Play for whichever side is to move. For X the reply is searched with
    /// O maximizing and the lowest score is kept.
    SideToMove,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Objective::FixedSign => "fixed-sign",
            Objective::SideToMove => "side-to-move",
        };
        f.write_str(label)
    }
}

impl FromStr for Objective {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "fixed-sign" | "fixed_sign" | "fixed" => Ok(Objective::FixedSign),
            "side-to-move" | "side_to_move" | "side" => Ok(Objective::SideToMove),
            _ => Err(crate::Error::ParseObjective {
                input: s.to_string(),
                expected: "fixed-sign, side-to-move".to_string(),
            }),
        }
    }
}

/// Node and cutoff counters for one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited by [`Minimax::evaluate`], terminal ones included
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped
    pub cutoffs: u64,
}

/// Score a terminal position, or `None` if the game is still open
pub fn terminal_score(board: &Board) -> Option<i32> {
    if board.has_won(Player::X) {
        Some(X_WIN_SCORE)
    } else if board.has_won(Player::O) {
        Some(O_WIN_SCORE)
    } else if board.is_draw() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Alpha-beta search engine.
///
/// The engine only carries configuration and counters; boards are passed in
/// by reference and every child position is an independent clone.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    objective: Objective,
    stats: SearchStats,
}

impl Minimax {
    /// Create an engine with the fixed-sign objective
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frame used to compare top-level candidates
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Counters of the most recent [`best_move`](Self::best_move) or
    /// [`analyze`](Self::analyze), plus any direct `evaluate` calls since.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimax value of `board` in the fixed-sign frame.
    ///
    /// `maximizing` says whether the side to move is treated as the
    /// maximizer. Children are explored in row-major order and the loop stops
    /// as soon as `beta <= alpha`.
    pub fn evaluate(
        &mut self,
        board: &Board,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board) {
            return score;
        }

        if maximizing {
            let mut best = NEG_INFINITY;
            for mv in board.legal_moves() {
                let mut child = board.clone();
                if !child.place(mv.row, mv.col) {
                    continue;
                }
                let score = self.evaluate(&child, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = POS_INFINITY;
            for mv in board.legal_moves() {
                let mut child = board.clone();
                if !child.place(mv.row, mv.col) {
                    continue;
                }
                let score = self.evaluate(&child, true, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Pick a move for the side to move.
    ///
    /// Returns `None` on a finished board, which drivers should never ask
    /// about.
    ///
    /// Ties go to the first candidate in row-major order.
    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        self.analyze(board).best
    }

    /// Score every candidate move and report the one [`best_move`](Self::best_move) picks.
    pub fn analyze(&mut self, board: &Board) -> Analysis {
        self.stats = SearchStats::default();

        let to_move = board.current_player();
        // Only an X request under SideToMove leaves the fixed-sign frame.
        let flip = self.objective == Objective::SideToMove && to_move == Player::X;

        let mut candidates = Vec::new();
        let mut best: Option<(Position, i32)> = None;
        let moves = if board.is_finished() {
            Vec::new()
        } else {
            board.legal_moves()
        };
        let mut best_preference = NEG_INFINITY;

        for mv in moves {
            let mut child = board.clone();
            if !child.place(mv.row, mv.col) {
                continue;
            }
            let score = self.evaluate(&child, flip, NEG_INFINITY, POS_INFINITY);
            candidates.push(MoveScore {
                position: mv,
                score,
            });

            let preference = if flip { -score } else { score };
            if preference > best_preference {
                best_preference = preference;
                best = Some((mv, score));
            }
        }

        Analysis {
            to_move,
            objective: self.objective,
            candidates,
            best: best.map(|(mv, _)| mv),
            best_score: best.map(|(_, score)| score),
            stats: self.stats,
        }
    }
}

/// Evaluate `board` with a fresh fixed-sign engine
pub fn evaluate(board: &Board, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    Minimax::new().evaluate(board, maximizing, alpha, beta)
}

/// Fixed-sign best move for `board`; `None` is the "no move" sentinel
pub fn best_move(board: &Board) -> Option<Position> {
    Minimax::new().best_move(board)
}
