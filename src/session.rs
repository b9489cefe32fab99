//! Game driver: alternates agents on one board until the game ends.

use std::{fmt, io::Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    Error, Result,
    agents::{self, Agent},
    config::GameConfig,
    tictactoe::{Board, Player, Position},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a finished board, `None` while the game is open
    pub fn of(board: &Board) -> Option<Self> {
        if !board.is_finished() {
            return None;
        }
        Some(match board.winner() {
            Some(player) => GameOutcome::Win(player),
            None => GameOutcome::Draw,
        })
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "Player {player} wins!"),
            GameOutcome::Draw => f.write_str("It's a draw!"),
        }
    }
}

/// A completed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub size: usize,
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Rebuild the final board from the move list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the history does not replay, which
    /// indicates a corrupted record.
    pub fn replay(&self) -> Result<Board> {
        let mut board = Board::new(self.size)?;
        for (i, mv) in self.moves.iter().enumerate() {
            let Position { row, col } = mv.position;
            if board.current_player() != mv.player || !board.place(row, col) {
                return Err(Error::IllegalMove {
                    row,
                    col,
                    agent: format!("history entry {i}"),
                });
            }
        }
        Ok(board)
    }
}

/// Hooks called around every turn of [`Session::play_observed`].
///
/// Both methods default to doing nothing. `on_turn_end` runs after every
/// attempt, with `None` when the step failed, so anything started in
/// `on_turn_start` can be torn down.
pub trait TurnObserver {
    /// Called with the position the side to move is about to answer
    fn on_turn_start(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called with the position after the attempt and the applied move
    fn on_turn_end(&mut self, _board: &Board, _mv: Option<Move>) -> Result<()> {
        Ok(())
    }
}

/// Observer for [`Session::play`]
struct Unobserved;

impl TurnObserver for Unobserved {}

/// One game between two agents.
///
/// The session is the only caller of [`Board::place`] during play and never
/// calls it once the board reports it is finished.
pub struct Session {
    board: Board,
    x: Box<dyn Agent>,
    o: Box<dyn Agent>,
    moves: Vec<Move>,
}

impl Session {
    /// Start a session on `board` with X and O played by the given agents
    pub fn new(board: Board, x: Box<dyn Agent>, o: Box<dyn Agent>) -> Self {
        Self {
            board,
            x,
            o,
            moves: Vec::new(),
        }
    }

    /// Build the board and both agents described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        Ok(Self::new(
            board,
            agents::from_config(config, Player::X),
            agents::from_config(config, Player::O),
        ))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::of(&self.board)
    }

    /// Ask the side to move for a move and apply it.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the board is already finished
    /// - [`Error::IllegalMove`] if the agent picks an occupied or off-board cell
    /// - any error the agent itself reports
    pub fn step(&mut self) -> Result<Move> {
        if self.board.is_finished() {
            return Err(Error::GameOver);
        }

        let player = self.board.current_player();
        let agent = match player {
            Player::X => self.x.as_mut(),
            Player::O => self.o.as_mut(),
        };

        let position = agent.select_move(&self.board)?;
        let Position { row, col } = position;
        if !self.board.is_legal_move(row, col) || !self.board.place(row, col) {
            warn!(agent = agent.name(), row, col, "agent proposed an illegal move");
            return Err(Error::IllegalMove {
                row,
                col,
                agent: agent.name().to_string(),
            });
        }

        debug!(agent = agent.name(), %player, row, col, ply = self.moves.len() + 1, "move applied");
        let mv = Move { position, player };
        self.moves.push(mv);
        Ok(mv)
    }

    /// Play to the end, rendering the board to `out` before every move and
    /// once more at the end.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`step`](Self::step) and from writing to `out`.
    pub fn play(&mut self, out: &mut impl Write) -> Result<GameRecord> {
        self.play_observed(out, &mut Unobserved)
    }

    /// [`play`](Self::play) with `observer` notified around every turn.
    ///
    /// # Errors
    ///
    /// As for [`play`](Self::play), plus any error the observer returns. A
    /// failed step is reported ahead of an observer error for the same turn.
    pub fn play_observed(
        &mut self,
        out: &mut impl Write,
        observer: &mut impl TurnObserver,
    ) -> Result<GameRecord> {
        info!(
            size = self.board.size(),
            x = self.x.name(),
            o = self.o.name(),
            "game started"
        );

        while !self.board.is_finished() {
            writeln!(out, "{}", self.board)?;
            observer.on_turn_start(&self.board)?;
            let result = self.step();
            let ended = observer.on_turn_end(&self.board, result.as_ref().ok().copied());
            result?;
            ended?;
        }
        writeln!(out, "{}", self.board)?;

        let outcome = self.outcome().ok_or(Error::GameOver)?;
        info!(%outcome, moves = self.moves.len(), "game finished");

        Ok(GameRecord {
            size: self.board.size(),
            moves: self.moves.clone(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{MinimaxAgent, RandomAgent};

    /// Plays a fixed list of moves, then whatever it is handed
    struct ScriptedAgent {
        moves: Vec<Position>,
    }

    impl ScriptedAgent {
        fn boxed(moves: &[(usize, usize)]) -> Box<dyn Agent> {
            Box::new(Self {
                moves: moves
                    .iter()
                    .rev()
                    .map(|&(r, c)| Position::new(r, c))
                    .collect(),
            })
        }
    }

    impl Agent for ScriptedAgent {
        fn select_move(&mut self, _board: &Board) -> Result<Position> {
            self.moves.pop().ok_or(Error::NoValidMoves)
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_scripted_row_win() {
        let mut session = Session::new(
            Board::default(),
            ScriptedAgent::boxed(&[(0, 0), (0, 1), (0, 2)]),
            ScriptedAgent::boxed(&[(1, 0), (1, 1)]),
        );

        let mut out = Vec::new();
        let record = session.play(&mut out).unwrap();

        assert_eq!(record.outcome, GameOutcome::Win(Player::X));
        assert_eq!(record.moves.len(), 5);
        assert_eq!(record.moves[1].player, Player::O);
        assert_eq!(record.outcome.to_string(), "Player X wins!");

        // Board rendered before each of the 5 moves and once at the end
        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(rendered.matches("    0   1   2").count(), 6);
    }

    #[derive(Default)]
    struct RecordingObserver {
        starts: Vec<Player>,
        ends: Vec<Option<Move>>,
    }

    impl TurnObserver for RecordingObserver {
        fn on_turn_start(&mut self, board: &Board) -> Result<()> {
            self.starts.push(board.current_player());
            Ok(())
        }

        fn on_turn_end(&mut self, _board: &Board, mv: Option<Move>) -> Result<()> {
            self.ends.push(mv);
            Ok(())
        }
    }

    #[test]
    fn test_observer_sees_every_turn() {
        let mut session = Session::new(
            Board::default(),
            ScriptedAgent::boxed(&[(0, 0), (0, 1), (0, 2)]),
            ScriptedAgent::boxed(&[(1, 0), (1, 1)]),
        );
        let mut observer = RecordingObserver::default();
        let record = session
            .play_observed(&mut std::io::sink(), &mut observer)
            .unwrap();

        assert_eq!(
            observer.starts,
            vec![Player::X, Player::O, Player::X, Player::O, Player::X]
        );
        let ended: Vec<Move> = observer.ends.iter().flatten().copied().collect();
        assert_eq!(ended, record.moves);
    }

    #[test]
    fn test_observer_turn_ends_after_failed_step() {
        let mut session = Session::new(
            Board::default(),
            ScriptedAgent::boxed(&[(1, 1)]),
            ScriptedAgent::boxed(&[(1, 1)]),
        );
        let mut observer = RecordingObserver::default();
        let err = session
            .play_observed(&mut std::io::sink(), &mut observer)
            .unwrap_err();

        assert!(matches!(err, Error::IllegalMove { row: 1, col: 1, .. }));
        assert_eq!(observer.starts.len(), 2);
        assert_eq!(observer.ends.len(), 2);
        assert!(observer.ends[0].is_some());
        assert_eq!(observer.ends[1], None);
    }

    #[test]
    fn test_illegal_agent_move_is_reported() {
        let mut session = Session::new(
            Board::default(),
            ScriptedAgent::boxed(&[(0, 0), (1, 1)]),
            ScriptedAgent::boxed(&[(0, 0)]),
        );

        session.step().unwrap();
        let err = session.step().unwrap_err();
        assert!(matches!(err, Error::IllegalMove { row: 0, col: 0, .. }));
        // The rejected move left the board untouched
        assert_eq!(session.board().move_count(), 1);
        assert_eq!(session.board().current_player(), Player::O);
    }

    #[test]
    fn test_step_after_finish_is_game_over() {
        let mut session = Session::new(
            Board::new(1).unwrap(),
            ScriptedAgent::boxed(&[(0, 0)]),
            ScriptedAgent::boxed(&[]),
        );

        session.step().unwrap();
        assert_eq!(session.outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(matches!(session.step(), Err(Error::GameOver)));
    }

    #[test]
    fn test_minimax_o_never_loses_to_random() {
        for seed in 0..10 {
            let mut session = Session::new(
                Board::default(),
                Box::new(RandomAgent::with_seed("random", seed)),
                Box::new(MinimaxAgent::new("minimax")),
            );
            let record = session.play(&mut std::io::sink()).unwrap();
            assert_ne!(record.outcome, GameOutcome::Win(Player::X), "seed {seed}");
        }
    }

    #[test]
    fn test_record_replays_to_final_board() {
        let mut session = Session::new(
            Board::default(),
            Box::new(RandomAgent::with_seed("x", 7)),
            Box::new(RandomAgent::with_seed("o", 8)),
        );
        let record = session.play(&mut std::io::sink()).unwrap();

        assert_eq!(&record.replay().unwrap(), session.board());
    }

    #[test]
    fn test_corrupt_record_does_not_replay() {
        let record = GameRecord {
            size: 3,
            moves: vec![
                Move {
                    position: Position::new(0, 0),
                    player: Player::X,
                },
                Move {
                    position: Position::new(0, 0),
                    player: Player::O,
                },
            ],
            outcome: GameOutcome::Draw,
        };
        assert!(matches!(
            record.replay(),
            Err(Error::IllegalMove { row: 0, col: 0, .. })
        ));
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = GameConfig::default().with_board_size(7);
        assert!(Session::from_config(&config).is_err());
    }
}
