//! Benchmarks for whole-puzzle solves and board validation.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solve
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use sudokusolve_solver::{solve, validator};

/// Mostly propagation; a handful of guesses at most.
const EASY_PUZZLE: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

/// Sparse givens, so the guess stack does real work.
const HARD_PUZZLE: &str =
    "800000000003600000070090200050007000000045700000100030001000068008500010090000400";

fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve/easy", |b| {
        b.iter(|| solve(hint::black_box(EASY_PUZZLE), validator::validate_solved_board, 1));
    });

    c.bench_function("solve/hard", |b| {
        b.iter(|| solve(hint::black_box(HARD_PUZZLE), validator::validate_solved_board, 1));
    });

    let empty = "0".repeat(81);
    c.bench_function("solve/empty", |b| {
        b.iter(|| solve(hint::black_box(&empty), validator::validate_solved_board, 1));
    });
}

fn bench_validate(c: &mut Criterion) {
    let solved = solve(EASY_PUZZLE, validator::validate_solved_board, 1)
        .map(sudokusolve_solver::SolveReport::into_solutions)
        .ok()
        .and_then(|mut solutions| solutions.pop())
        .unwrap_or_default();

    c.bench_function("validate/input", |b| {
        b.iter(|| validator::validate_input_board(hint::black_box(EASY_PUZZLE)));
    });

    c.bench_function("validate/solved", |b| {
        b.iter(|| validator::validate_solved_board(hint::black_box(&solved)));
    });
}

criterion_group!(benches, bench_solve, bench_validate);
criterion_main!(benches);
