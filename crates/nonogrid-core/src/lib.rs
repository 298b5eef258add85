//! Core data structures for nonogram (picross) applications.
//!
//! This crate provides the fundamental types shared by the solving and
//! generation components:
//!
//! 1. **Line description** - What a single row or column must contain
//!    - [`clue`]: Ordered block-length sequences and run-length extraction
//!      from concrete lines
//!
//! 2. **Board state** - What is known about the board so far
//!    - [`cell`]: The three-state [`Cell`] (`Unknown` / `Filled` / `Empty`)
//!    - [`grid`]: A monotonically refined [`Grid`] of cells
//!
//! 3. **Concrete pictures** - Fully determined boards
//!    - [`picture`]: A binary [`Picture`] produced by a grid source or by a
//!      completed solve, and the clue extraction entry point
//!
//! 4. **Validated puzzles** - Clue sets checked for basic consistency
//!    - [`puzzle`]: [`Puzzle`] construction and the [`PuzzleError`] taxonomy
//!
//! # Examples
//!
//! ```
//! use nonogrid_core::{Clue, Picture, Puzzle};
//!
//! // A 2x2 picture with one diagonal filled.
//! let picture = Picture::from_rows([[true, false], [false, true]]);
//! let (row_clues, col_clues) = picture.clues();
//! assert_eq!(row_clues, vec![Clue::new([1]), Clue::new([1])]);
//!
//! // Clue sets are validated before any solving starts.
//! let puzzle = Puzzle::new(row_clues, col_clues)?;
//! assert_eq!(puzzle.width(), 2);
//! # Ok::<(), nonogrid_core::PuzzleError>(())
//! ```

pub mod cell;
pub mod clue;
pub mod grid;
pub mod picture;
pub mod puzzle;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    clue::Clue,
    grid::{ConflictError, Grid},
    picture::{IndeterminateError, Picture},
    puzzle::{Puzzle, PuzzleError},
};
