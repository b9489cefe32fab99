//! Analyze command - score every move in a position
//!
//! Runs the alpha-beta search once per candidate and prints the fixed-sign
//! score of each, the move the engine would play and the search counters.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    config::MAX_SEARCH_SIZE,
    search::{Analysis, Minimax, Objective},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Score every legal move in a position")]
pub struct AnalyzeArgs {
    /// Position in row-major order, e.g. "XO./.X./..O" ('/' and spaces are ignored)
    pub position: String,

    /// Frame for choosing the best move (fixed-sign, side-to-move)
    #[arg(long, default_value = "fixed-sign")]
    pub objective: String,

    /// Print the analysis as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON analysis to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.position)
        .with_context(|| format!("parsing position '{}'", args.position))?;
    if board.size() > MAX_SEARCH_SIZE {
        bail!(
            "search is limited to boards up to {MAX_SEARCH_SIZE}x{MAX_SEARCH_SIZE}, got {0}x{0}",
            board.size()
        );
    }
    let objective: Objective = args.objective.parse()?;

    let mut engine = Minimax::new().with_objective(objective);
    let analysis = if args.json {
        engine.analyze(&board)
    } else {
        let pb = create_spinner("Searching")?;
        let analysis = engine.analyze(&board);
        pb.finish_and_clear();
        analysis
    };

    if let Some(path) = &args.export {
        let json = serde_json::to_string_pretty(&analysis)?;
        fs::write(path, json)
            .with_context(|| format!("writing analysis to {}", path.display()))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&board, &analysis);
        if let Some(path) = &args.export {
            println!("\nAnalysis exported to: {}", path.display());
        }
    }

    Ok(())
}

fn print_report(board: &Board, analysis: &Analysis) {
    println!("{board}");

    print_section("Position");
    print_kv("To move", &analysis.to_move.to_string());
    print_kv("Objective", &analysis.objective.to_string());
    print_kv("Moves played", &board.move_count().to_string());

    print_section("Candidate Scores (O wins = +1, X wins = -1)");
    if analysis.candidates.is_empty() {
        println!("  (position is terminal)");
    }
    for candidate in &analysis.candidates {
        let marker = if Some(candidate.position) == analysis.best {
            "  <- best"
        } else {
            ""
        };
        println!("  {:10} {:>3}{marker}", candidate.position.to_string(), candidate.score);
    }

    print_section("Search");
    match (analysis.best, analysis.best_score) {
        (Some(best), Some(score)) => print_kv("Best move", &format!("{best} (score {score})")),
        _ => print_kv("Best move", "none"),
    }
    print_kv("Nodes", &format_number(analysis.stats.nodes));
    print_kv("Cutoffs", &format_number(analysis.stats.cutoffs));
}
