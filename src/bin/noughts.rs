//! noughts CLI - play and analyse N×N tic-tac-toe
//!
//! - `play` runs a game at the console between humans, the random agent and
//!   the minimax agent
//! - `analyze` scores every legal move of a position with alpha-beta search

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "N×N tic-tac-toe with a minimax opponent", long_about = None)]
struct Cli {
    /// Log search and session events to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game at the console
    Play(noughts::cli::commands::play::PlayArgs),

    /// Score every legal move in a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "noughts=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
    }
}
