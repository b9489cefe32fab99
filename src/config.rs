//! Game configuration: board size, who plays each side, and search options.
//!
//! A [`GameConfig`] can be built in code with the `with_*` setters, derived
//! from one of the classic menu [`Mode`]s, or loaded from a JSON file.
//!
//! ```
//! use noughts::config::{GameConfig, Mode, PlayerKind};
//!
//! let config = GameConfig::from_mode(Mode::PlayerVsEasy).with_seed(7);
//! assert_eq!(config.o, PlayerKind::Random);
//! assert!(config.validate().is_ok());
//! ```

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    search::Objective,
    tictactoe::Player,
};

/// Side length used when nothing else is configured
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest board a minimax agent is allowed on. Search always runs to the
/// end of the game without a transposition table; a single 4×4 move already
/// takes minutes.
pub const MAX_SEARCH_SIZE: usize = 3;

/// Who supplies the moves for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    /// Moves typed at the console
    Human,
    /// Uniformly random legal moves ("easy")
    Random,
    /// Full-depth alpha-beta search ("hard")
    Minimax,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::Minimax => "minimax",
        };
        f.write_str(label)
    }
}

impl FromStr for PlayerKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" | "easy" => Ok(PlayerKind::Random),
            "minimax" | "hard" | "optimal" => Ok(PlayerKind::Minimax),
            _ => Err(Error::ParsePlayerKind {
                input: s.to_string(),
                expected: "human, random/easy, minimax/hard".to_string(),
            }),
        }
    }
}

/// Preset pairings, matching the entries of the classic game menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans at one console
    PlayerVsPlayer,
    /// Human X against the random agent
    PlayerVsEasy,
    /// Human X against the minimax agent
    #[default]
    PlayerVsHard,
    /// Random X against the minimax agent as O, no input needed
    ComputerVsComputer,
}

impl Mode {
    /// Kinds for X and O, in that order
    pub fn players(self) -> (PlayerKind, PlayerKind) {
        match self {
            Mode::PlayerVsPlayer => (PlayerKind::Human, PlayerKind::Human),
            Mode::PlayerVsEasy => (PlayerKind::Human, PlayerKind::Random),
            Mode::PlayerVsHard => (PlayerKind::Human, PlayerKind::Minimax),
            Mode::ComputerVsComputer => (PlayerKind::Random, PlayerKind::Minimax),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::PlayerVsPlayer => "pvp",
            Mode::PlayerVsEasy => "easy",
            Mode::PlayerVsHard => "hard",
            Mode::ComputerVsComputer => "cvc",
        };
        f.write_str(label)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "pvp" | "1" => Ok(Mode::PlayerVsPlayer),
            "easy" | "2" => Ok(Mode::PlayerVsEasy),
            "hard" | "3" => Ok(Mode::PlayerVsHard),
            "cvc" | "demo" => Ok(Mode::ComputerVsComputer),
            _ => Err(Error::ParseMode {
                input: s.to_string(),
                expected: "pvp/1, easy/2, hard/3, cvc".to_string(),
            }),
        }
    }
}

/// Everything needed to set up one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Who plays X (moves first)
    pub x: PlayerKind,
    /// Who plays O
    pub o: PlayerKind,
    /// Seed for the random agent; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Frame used by minimax agents when choosing a move
    pub objective: Objective,
}

impl GameConfig {
    /// Configuration for one of the preset modes on a 3×3 board
    pub fn from_mode(mode: Mode) -> Self {
        let (x, o) = mode.players();
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            x,
            o,
            seed: None,
            objective: Objective::default(),
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_players(mut self, x: PlayerKind, o: PlayerKind) -> Self {
        self.x = x;
        self.o = o;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Kind configured for `player`
    pub fn kind_for(&self, player: Player) -> PlayerKind {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Check the configuration can be played.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardSize`] for a zero size and
    /// [`Error::InvalidConfiguration`] when a minimax agent is placed on a
    /// board larger than [`MAX_SEARCH_SIZE`].
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(Error::InvalidBoardSize {
                size: self.board_size,
            });
        }

        let uses_search = self.x == PlayerKind::Minimax || self.o == PlayerKind::Minimax;
        if uses_search && self.board_size > MAX_SEARCH_SIZE {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "minimax search is limited to boards up to {MAX_SEARCH_SIZE}x{MAX_SEARCH_SIZE}, got {0}x{0}",
                    self.board_size
                ),
            });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_mode(Mode::default())
    }
}
