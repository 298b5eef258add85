//! Benchmarks for full solves on representative puzzles.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nonogrid_core::{Clue, Picture, Puzzle};
use nonogrid_solver::{Solver, generate_candidates};

fn picture(rows: &[&str]) -> Picture {
    Picture::from_rows(
        rows.iter()
            .map(|row| row.chars().map(|c| c == '#').collect::<Vec<_>>()),
    )
}

fn plus_sign() -> Picture {
    picture(&[
        "..#..", //
        "..#..", //
        "#####", //
        "..#..", //
        "..#..", //
    ])
}

fn ring_10() -> Picture {
    picture(&[
        "##########",
        "#........#",
        "#.######.#",
        "#.#....#.#",
        "#.#.##.#.#",
        "#.#.##.#.#",
        "#.#....#.#",
        "#.######.#",
        "#........#",
        "##########",
    ])
}

fn checker_4() -> Picture {
    picture(&["#.#.", ".#.#", "#.#.", ".#.#"])
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("plus_5x5", plus_sign()),
        ("ring_10x10", ring_10()),
        ("checker_4x4", checker_4()),
    ];

    for (param, picture) in puzzles {
        let puzzle = Puzzle::from_picture(&picture);
        c.bench_with_input(BenchmarkId::new("solve", param), &puzzle, |b, puzzle| {
            b.iter(|| {
                let solver = Solver::new(hint::black_box(puzzle)).unwrap();
                hint::black_box(solver.solve())
            });
        });
    }
}

fn bench_candidate_generation(c: &mut Criterion) {
    let cases = [
        ("tight_1_2_1_in_6", Clue::new([1, 2, 1]), 6),
        ("loose_3_in_15", Clue::new([3]), 15),
        ("loose_2_2_in_15", Clue::new([2, 2]), 15),
    ];

    for (param, clue, length) in cases {
        c.bench_with_input(
            BenchmarkId::new("generate_candidates", param),
            &(clue, length),
            |b, (clue, length)| {
                b.iter(|| hint::black_box(generate_candidates(clue, *length).unwrap()));
            },
        );
    }
}

criterion_group!(benches, bench_solve, bench_candidate_generation);
criterion_main!(benches);
