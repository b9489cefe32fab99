//! Noughts: N×N tic-tac-toe with an alpha-beta minimax engine
//!
//! This crate provides:
//! - A square board of any size with win and draw detection
//! - Full-depth minimax search with alpha-beta pruning and per-move analysis
//! - Human, random and minimax agents behind one [`agents::Agent`] trait
//! - A session driver that alternates agents until the game ends
//! - The `noughts` command line front end

pub mod agents;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use config::{GameConfig, Mode, PlayerKind};
pub use error::{Error, Result};
pub use search::{Minimax, Objective, best_move};
pub use session::{GameOutcome, Session};
pub use tictactoe::{Board, Cell, Player, Position};
