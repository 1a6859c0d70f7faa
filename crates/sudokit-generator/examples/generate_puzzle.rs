//! Example CLI for generating Sudoku boards.
//!
//! Generates either a puzzle with a target clue count or a fully solved
//! board, and prints it in the engine's fixed text layout.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick the clue count and a deterministic seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --clues 28 --seed 42
//! ```
//!
//! Print a solved board instead of a puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --solution
//! ```
//!
//! Aggressive clue targets can fail when too few cells are removable without
//! losing uniqueness; generation retries with fresh randomness up to
//! `--max-attempts` times. Set `RUST_LOG=info` to see per-attempt progress.

use std::process;

use clap::Parser;
use log::info;
use sudokit_generator::{Board, DEFAULT_CLUE_COUNT};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of given cells to keep in the generated puzzle.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_CLUE_COUNT)]
    clues: usize,

    /// Seed for deterministic generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u32>,

    /// Print a fully solved board instead of a puzzle.
    #[arg(long)]
    solution: bool,

    /// Maximum generation attempts before giving up.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    max_attempts: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.clues > 81 {
        eprintln!("--clues must be at most 81.");
        process::exit(2);
    }
    if args.max_attempts == 0 {
        eprintln!("--max-attempts must be at least 1.");
        process::exit(2);
    }

    let mut board = match args.seed {
        Some(seed) => Board::with_seed(seed),
        None => Board::new(),
    };

    if args.solution {
        if !board.generate_solution() {
            eprintln!("Could not generate a solved board.");
            process::exit(1);
        }
        print!("{board}");
        return;
    }

    for attempt in 1..=args.max_attempts {
        if board.generate_puzzle(args.clues) {
            info!("reached {} clues on attempt {attempt}", args.clues);
            print!("{board}");
            return;
        }
        info!("attempt {attempt} could not reach {} clues", args.clues);
    }

    eprintln!(
        "Could not reach {} clues within {} attempts.",
        args.clues, args.max_attempts
    );
    process::exit(1);
}
