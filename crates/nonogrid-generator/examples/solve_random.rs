//! Example generating a random nonogram and solving it from its clues.
//!
//! The generated picture's clues are extracted and handed to the solver as
//! if the picture were unknown; the example then shows whether propagation
//! plus single-level guessing reconstructed it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_random
//! ```
//!
//! Pick dimensions, density, and a reproducible seed or phrase:
//!
//! ```sh
//! cargo run --example solve_random -- --rows 15 --cols 15 --density 0.6 --seed 42
//! cargo run --example solve_random -- --phrase "rubber duck"
//! ```

use clap::Parser;
use nonogrid_core::{Picture, Puzzle};
use nonogrid_generator::{PictureGenerator, seed_from_phrase};
use nonogrid_solver::Solver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows in the generated picture.
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns in the generated picture.
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Probability that a cell is filled.
    #[arg(long, default_value_t = 0.5)]
    density: f64,

    /// Seed for reproducible generation.
    #[arg(long, conflicts_with = "phrase")]
    seed: Option<u64>,

    /// Phrase to derive the seed from.
    #[arg(long)]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match (&args.phrase, args.seed) {
        (Some(phrase), _) => seed_from_phrase(phrase),
        (None, Some(seed)) => seed,
        (None, None) => rand::random(),
    };

    let picture = PictureGenerator::new(args.rows, args.cols)
        .with_density(args.density)
        .generate_seeded(seed);
    println!("generated picture (seed {seed}):");
    print!("{picture}");

    let puzzle = Puzzle::from_picture(&picture);
    let solver = match Solver::new(&puzzle) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            std::process::exit(1);
        }
    };
    let solution = solver.solve();

    println!();
    println!(
        "outcome: {} ({} sweeps, {} guesses)",
        solution.outcome(),
        solution.sweeps(),
        solution.guesses()
    );
    print!("{}", solution.grid());

    match Picture::try_from(solution.grid()) {
        Ok(solved) => {
            let differing = (0..picture.rows())
                .flat_map(|r| (0..picture.cols()).map(move |c| (r, c)))
                .filter(|&(r, c)| solved.get(r, c) != picture.get(r, c))
                .count();
            if differing == 0 {
                println!("reconstruction matches the original exactly");
            } else {
                // The clues admit more than one picture.
                println!("reconstruction differs from the original in {differing} cells");
            }
        }
        Err(err) => println!("grid left undetermined: {err}"),
    }
}
