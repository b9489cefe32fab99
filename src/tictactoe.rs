//! Tic-Tac-Toe game state on an N×N grid

pub mod board;
pub mod lines;

pub use board::{Board, Cell, Player, Position};
pub use lines::LineAnalyzer;
