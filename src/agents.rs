//! Move sources for the game driver.
//!
//! An [`Agent`] is asked for a move whenever its side is to play. The
//! search engine and the board never talk to agents; the [`Session`]
//! loop does.
//!
//! [`Session`]: crate::session::Session

pub mod human;
pub mod minimax;
pub mod random;

use std::io;

pub use human::{HumanAgent, LineSource};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

use crate::{
    Result,
    config::{GameConfig, PlayerKind},
    tictactoe::{Board, Player, Position},
};

/// Anything that can pick a move for the side to play.
pub trait Agent {
    /// Select a move for the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no empty cell or the agent's input
    /// is exhausted.
    fn select_move(&mut self, board: &Board) -> Result<Position>;

    /// Name used in log events and error messages
    fn name(&self) -> &str;
}

/// Build the agent configured for `player`.
///
/// Human agents read from stdin and prompt on stdout. Random agents are
/// seeded from `config.seed`, offset by one for O so the two sides of a
/// random-vs-random game do not mirror each other.
pub fn from_config(config: &GameConfig, player: Player) -> Box<dyn Agent> {
    let name = format!("{} ({player})", config.kind_for(player));
    match config.kind_for(player) {
        PlayerKind::Human => Box::new(HumanAgent::new(name, io::stdin(), io::stdout())),
        PlayerKind::Random => match config.seed {
            Some(seed) => {
                let offset = match player {
                    Player::X => 0,
                    Player::O => 1,
                };
                Box::new(RandomAgent::with_seed(name, seed.wrapping_add(offset)))
            }
            None => Box::new(RandomAgent::new(name)),
        },
        PlayerKind::Minimax => Box::new(MinimaxAgent::new(name).with_objective(config.objective)),
    }
}
