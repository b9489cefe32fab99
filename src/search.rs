//! Adversarial search over board positions

pub mod analysis;
pub mod minimax;

pub use analysis::{Analysis, MoveScore};
pub use minimax::{
    DRAW_SCORE, Minimax, NEG_INFINITY, O_WIN_SCORE, Objective, POS_INFINITY, SearchStats,
    X_WIN_SCORE, best_move, evaluate, terminal_score,
};
