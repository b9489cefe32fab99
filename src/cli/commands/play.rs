//! Play command - run one game at the console

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::{
    cli::output::{spinner_style, start_spinner},
    config::{GameConfig, Mode, PlayerKind},
    search::Objective,
    session::{GameOutcome, Move, Session, TurnObserver},
    tictactoe::Board,
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play a game of tic-tac-toe")]
pub struct PlayArgs {
    /// Preset pairing: pvp, easy, hard or cvc (defaults to hard)
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Who plays X: human, random or minimax (overrides the mode)
    #[arg(long)]
    pub x: Option<String>,

    /// Who plays O: human, random or minimax (overrides the mode)
    #[arg(long)]
    pub o: Option<String>,

    /// Side length of the board
    #[arg(long, short = 's')]
    pub size: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frame used by minimax agents: fixed-sign or side-to-move
    #[arg(long)]
    pub objective: Option<String>,

    /// JSON configuration file; other flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Merge the config file (if any), the mode and the individual flags
pub fn resolve_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(mode) = &args.mode {
        let (x, o) = mode.parse::<Mode>()?.players();
        config = config.with_players(x, o);
    }
    if let Some(x) = &args.x {
        config.x = x.parse::<PlayerKind>()?;
    }
    if let Some(o) = &args.o {
        config.o = o.parse::<PlayerKind>()?;
    }
    if let Some(size) = args.size {
        config = config.with_board_size(size);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(objective) = &args.objective {
        config = config.with_objective(objective.parse::<Objective>()?);
    }

    config.validate()?;
    Ok(config)
}

/// Closing line for a finished game, phrased for who was at the console
pub fn result_message(config: &GameConfig, outcome: GameOutcome) -> String {
    let GameOutcome::Win(winner) = outcome else {
        return outcome.to_string();
    };

    let winner_kind = config.kind_for(winner);
    let loser_kind = config.kind_for(winner.opponent());
    match (winner_kind, loser_kind) {
        (PlayerKind::Human, PlayerKind::Human) => outcome.to_string(),
        (PlayerKind::Human, _) => "You win!".to_string(),
        (_, PlayerKind::Human) => "AI wins!".to_string(),
        _ => outcome.to_string(),
    }
}

/// Console hooks: a spinner while minimax searches, and an announcement of
/// every computer move
struct ConsoleObserver<'a> {
    config: &'a GameConfig,
    style: ProgressStyle,
    spinner: Option<ProgressBar>,
}

impl<'a> ConsoleObserver<'a> {
    fn new(config: &'a GameConfig) -> Result<Self> {
        Ok(Self {
            config,
            style: spinner_style()?,
            spinner: None,
        })
    }
}

impl TurnObserver for ConsoleObserver<'_> {
    fn on_turn_start(&mut self, board: &Board) -> crate::Result<()> {
        let player = board.current_player();
        if self.config.kind_for(player) == PlayerKind::Minimax {
            self.spinner = Some(start_spinner(
                self.style.clone(),
                &format!("Player {player} is thinking"),
            ));
        }
        Ok(())
    }

    fn on_turn_end(&mut self, _board: &Board, mv: Option<Move>) -> crate::Result<()> {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        if let Some(mv) = mv {
            if self.config.kind_for(mv.player) != PlayerKind::Human {
                println!("Player {} plays {}", mv.player, mv.position);
            }
        }
        Ok(())
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    info!(
        size = config.board_size,
        x = %config.x,
        o = %config.o,
        objective = %config.objective,
        "starting game"
    );

    let mut session = Session::from_config(&config)?;
    let mut observer = ConsoleObserver::new(&config)?;
    let record = session.play_observed(&mut io::stdout(), &mut observer)?;
    println!("{}", result_message(&config, record.outcome));

    Ok(())
}
