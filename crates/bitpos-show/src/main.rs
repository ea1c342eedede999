//! Position viewer - loads a position string and prints the board.
//!
//! With `--square`, also prints the pawn, knight, and king target tables
//! for that square.

use anyhow::{anyhow, Context};
use bitpos::Board;
use bitpos_core::{Color, Square, STARTPOS};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Prints a position and its precomputed move tables.
#[derive(Parser)]
#[command(name = "bitpos-show")]
#[command(about = "Prints a position and its precomputed move tables")]
struct Args {
    /// Position string (FEN); the move counters are optional
    #[arg(default_value = STARTPOS)]
    fen: String,

    /// Square (e.g. e4) whose target tables should be printed
    #[arg(long)]
    square: Option<String>,

    /// Do not print the board
    #[arg(long)]
    no_board: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let board = Board::from_fen(&args.fen)
        .with_context(|| format!("failed to load position '{}'", args.fen))?;
    tracing::info!(
        side = %board.position().side_to_move,
        pieces = board.position().pieces.occupied().count(),
        "position loaded"
    );

    if !args.no_board {
        println!("{}", board);
    }

    if let Some(name) = args.square {
        let sq = Square::from_algebraic(&name)
            .ok_or_else(|| anyhow!("'{}' is not a square", name))?;
        print_tables(&board, sq);
    }

    Ok(())
}

fn print_tables(board: &Board, sq: Square) {
    for color in Color::ALL {
        println!("{} pawn from {}:", color, sq);
        println!("{}", board.pawn_targets(color, sq));
    }
    println!("Knight from {}:", sq);
    println!("{}", board.knight_targets(sq));
    println!("King from {}:", sq);
    println!("{}", board.king_targets(sq));
}
