//! Benchmarks for board generation.
//!
//! Measures the two expensive engine operations:
//!
//! - **`generate_solution`**: filling an empty board with a random complete
//!   solution (one full backtracking search).
//! - **`generate_puzzle`**: the same, followed by uniqueness-preserving clue
//!   removal down to the default clue count, which runs a bounded solution
//!   count after every tentative removal.
//!
//! Each benchmark runs over three fixed seeds so the numbers are
//! reproducible while still covering several search shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use sudokit_generator::{Board, DEFAULT_CLUE_COUNT};

const SEEDS: [u32; 3] = [1234, 816_923, 4_042_322_160];

fn bench_generate_solution(c: &mut Criterion) {
    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate_solution", seed),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || Board::with_seed(hint::black_box(seed)),
                    |mut board| {
                        hint::black_box(board.generate_solution());
                        board
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_puzzle(c: &mut Criterion) {
    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate_puzzle", seed),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || Board::with_seed(hint::black_box(seed)),
                    |mut board| {
                        hint::black_box(board.generate_puzzle(DEFAULT_CLUE_COUNT));
                        board
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate_solution,
        bench_generate_puzzle
);
criterion_main!(benches);
