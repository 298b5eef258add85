//! Nonogram solving engine.
//!
//! The solver works line by line. For every row and column it enumerates all
//! candidate placements of the clue's blocks, then repeatedly:
//!
//! 1. forces the cells every remaining candidate agrees on,
//! 2. prunes the candidates that disagree with a known cell,
//!
//! until the grid is fully determined or a sweep changes nothing. On a
//! stall it checkpoints its state and tries speculative cell assignments in
//! a fixed order, keeping the first one whose propagation is productive.
//! The search is single-level, so an ambiguous puzzle is resolved
//! opportunistically rather than exhaustively.
//!
//! # Examples
//!
//! ```
//! use nonogrid_core::{Picture, Puzzle};
//! use nonogrid_solver::{Outcome, Solver};
//!
//! let picture = Picture::from_rows([
//!     [false, true, false],
//!     [true, true, true],
//!     [false, true, false],
//! ]);
//! let puzzle = Puzzle::from_picture(&picture);
//!
//! let solution = Solver::new(&puzzle)?.solve();
//! assert_eq!(solution.outcome(), Outcome::Solved);
//! assert_eq!(Picture::try_from(solution.grid()).unwrap(), picture);
//! # Ok::<(), nonogrid_core::PuzzleError>(())
//! ```

pub use self::{
    candidates::{CandidateLine, generate_candidates},
    engine::{Outcome, Solution, Solver, solve},
};

mod candidates;
mod engine;

#[cfg(test)]
mod testing;
