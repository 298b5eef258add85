//! Validated puzzle definitions.

use crate::{clue::Clue, picture::Picture};

/// Errors detected while validating a puzzle definition.
///
/// Both variants are configuration errors raised before any grid work
/// begins; an under-constrained but well-formed puzzle is not an error (the
/// solver reports it through its outcome instead).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// A clue's blocks and mandatory separators exceed the line length.
    #[display("clue [{clue}] cannot fit in a line of length {length}")]
    InvalidClue {
        /// The offending clue.
        clue: Clue,
        /// The length of the line the clue applies to.
        length: usize,
    },
    /// The row clues and column clues demand different numbers of filled
    /// cells, so no grid can satisfy both.
    #[display("row clues fill {row_total} cells but column clues fill {col_total}")]
    InvalidPuzzle {
        /// Total filled cells demanded by the row clues.
        row_total: usize,
        /// Total filled cells demanded by the column clues.
        col_total: usize,
    },
}

/// A validated nonogram: one clue per row and per column.
///
/// The grid dimensions are implied by the clue counts: `row_clues.len()`
/// rows by `col_clues.len()` columns.
///
/// # Examples
///
/// ```
/// use nonogrid_core::{Clue, Puzzle, PuzzleError};
///
/// let puzzle = Puzzle::new(
///     vec![Clue::new([1]), Clue::new([1])],
///     vec![Clue::new([1]), Clue::new([1])],
/// )?;
/// assert_eq!(puzzle.height(), 2);
/// assert_eq!(puzzle.width(), 2);
///
/// // Clue totals must agree.
/// let err = Puzzle::new(vec![Clue::new([2])], vec![Clue::new([1]), Clue::blank()]);
/// assert_eq!(
///     err,
///     Err(PuzzleError::InvalidPuzzle { row_total: 2, col_total: 1 })
/// );
/// # Ok::<(), PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    row_clues: Vec<Clue>,
    col_clues: Vec<Clue>,
}

impl Puzzle {
    /// Validates and constructs a puzzle from row and column clues.
    ///
    /// # Errors
    ///
    /// * [`PuzzleError::InvalidClue`] if any clue cannot fit in its line.
    /// * [`PuzzleError::InvalidPuzzle`] if the row and column clue totals
    ///   disagree.
    pub fn new(row_clues: Vec<Clue>, col_clues: Vec<Clue>) -> Result<Self, PuzzleError> {
        let width = col_clues.len();
        let height = row_clues.len();
        for clue in &row_clues {
            if !clue.fits(width) {
                return Err(PuzzleError::InvalidClue {
                    clue: clue.clone(),
                    length: width,
                });
            }
        }
        for clue in &col_clues {
            if !clue.fits(height) {
                return Err(PuzzleError::InvalidClue {
                    clue: clue.clone(),
                    length: height,
                });
            }
        }
        let row_total: usize = row_clues.iter().map(Clue::filled_count).sum();
        let col_total: usize = col_clues.iter().map(Clue::filled_count).sum();
        if row_total != col_total {
            return Err(PuzzleError::InvalidPuzzle {
                row_total,
                col_total,
            });
        }
        Ok(Self {
            row_clues,
            col_clues,
        })
    }

    /// Extracts the puzzle describing a concrete picture.
    ///
    /// Clues extracted from a real picture are consistent by construction,
    /// so this cannot fail.
    #[must_use]
    pub fn from_picture(picture: &Picture) -> Self {
        let (row_clues, col_clues) = picture.clues();
        Self {
            row_clues,
            col_clues,
        }
    }

    /// Returns the row clues, top to bottom.
    #[must_use]
    pub fn row_clues(&self) -> &[Clue] {
        &self.row_clues
    }

    /// Returns the column clues, left to right.
    #[must_use]
    pub fn col_clues(&self) -> &[Clue] {
        &self.col_clues
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.row_clues.len()
    }

    /// Returns the number of columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.col_clues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_consistent_clues() {
        let puzzle = Puzzle::new(
            vec![Clue::new([1]), Clue::new([1]), Clue::blank()],
            vec![Clue::new([2]), Clue::blank()],
        )
        .unwrap();
        assert_eq!(puzzle.height(), 3);
        assert_eq!(puzzle.width(), 2);
    }

    #[test]
    fn rejects_oversized_row_clue() {
        let err = Puzzle::new(
            vec![Clue::new([2, 1])],
            vec![Clue::new([1]), Clue::new([1]), Clue::new([1])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PuzzleError::InvalidClue {
                clue: Clue::new([2, 1]),
                length: 3,
            }
        );
    }

    #[test]
    fn rejects_oversized_col_clue() {
        // Single row of height 1, so only the column clue can overflow.
        let err = Puzzle::new(vec![Clue::new([1])], vec![Clue::new([1, 1])]).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::InvalidClue {
                clue: Clue::new([1, 1]),
                length: 1,
            }
        );
    }

    #[test]
    fn rejects_mismatched_totals() {
        let err = Puzzle::new(
            vec![Clue::new([3])],
            vec![Clue::new([1]), Clue::new([1]), Clue::blank()],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PuzzleError::InvalidPuzzle {
                row_total: 3,
                col_total: 2,
            }
        );
    }

    #[test]
    fn from_picture_round_trips() {
        let picture = Picture::from_rows([[true, true, false], [false, true, true]]);
        let puzzle = Puzzle::from_picture(&picture);
        assert_eq!(puzzle.row_clues(), &[Clue::new([2]), Clue::new([2])]);
        assert_eq!(
            puzzle.col_clues(),
            &[Clue::new([1]), Clue::new([2]), Clue::new([1])]
        );
    }

    #[test]
    fn degenerate_empty_puzzle() {
        let puzzle = Puzzle::new(vec![], vec![]).unwrap();
        assert_eq!(puzzle.height(), 0);
        assert_eq!(puzzle.width(), 0);
    }
}
