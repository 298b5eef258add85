//! Fully determined binary pictures and clue extraction.

use std::fmt;

use crate::{cell::Cell, clue::Clue, grid::Grid};

/// A grid could not be converted to a picture because a cell is unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell ({row}, {col}) is still undetermined")]
pub struct IndeterminateError {
    /// Row index of the first unresolved cell.
    pub row: usize,
    /// Column index of the first unresolved cell.
    pub col: usize,
}

/// A concrete m×n binary picture: every cell is filled or empty.
///
/// Pictures are what grid sources (random generators, image thresholding)
/// produce and what a completed solve yields. They are the input to clue
/// extraction.
///
/// # Examples
///
/// ```
/// use nonogrid_core::{Clue, Picture};
///
/// // A plus sign.
/// let picture = Picture::from_rows([
///     [false, true, false],
///     [true, true, true],
///     [false, true, false],
/// ]);
/// let (row_clues, col_clues) = picture.clues();
/// assert_eq!(row_clues[1], Clue::new([3]));
/// assert_eq!(col_clues[0], Clue::new([1]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    rows: usize,
    cols: usize,
    bits: Vec<bool>,
}

impl Picture {
    /// Builds a picture from rows of filled/empty flags.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    #[must_use]
    pub fn from_rows(
        rows: impl IntoIterator<Item = impl IntoIterator<Item = bool>>,
    ) -> Self {
        let mut bits = Vec::new();
        let mut row_count = 0;
        let mut cols = None;
        for row in rows {
            let before = bits.len();
            bits.extend(row);
            let width = bits.len() - before;
            assert_eq!(
                *cols.get_or_insert(width),
                width,
                "all picture rows must have the same length"
            );
            row_count += 1;
        }
        Self {
            rows: row_count,
            cols: cols.unwrap_or(0),
            bits,
        }
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the cell at `(row, col)` is filled.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols);
        self.bits[row * self.cols + col]
    }

    /// Returns one row as a slice of filled/empty flags.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[bool] {
        assert!(row < self.rows);
        &self.bits[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns one column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn col(&self, col: usize) -> impl Iterator<Item = bool> + '_ {
        assert!(col < self.cols);
        (0..self.rows).map(move |row| self.bits[row * self.cols + col])
    }

    /// Returns the total number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Extracts the row clues, top to bottom.
    #[must_use]
    pub fn row_clues(&self) -> Vec<Clue> {
        (0..self.rows)
            .map(|row| Clue::from_line(self.row(row).iter().copied()))
            .collect()
    }

    /// Extracts the column clues, left to right.
    #[must_use]
    pub fn col_clues(&self) -> Vec<Clue> {
        (0..self.cols).map(|col| Clue::from_line(self.col(col))).collect()
    }

    /// Extracts both clue sets as `(row_clues, col_clues)`.
    #[must_use]
    pub fn clues(&self) -> (Vec<Clue>, Vec<Clue>) {
        (self.row_clues(), self.col_clues())
    }
}

impl TryFrom<&Grid> for Picture {
    type Error = IndeterminateError;

    /// Converts a fully resolved grid into a picture.
    ///
    /// Fails on the first cell that is still [`Cell::Unknown`].
    fn try_from(grid: &Grid) -> Result<Self, Self::Error> {
        let mut bits = Vec::with_capacity(grid.rows() * grid.cols());
        for row in 0..grid.rows() {
            for (col, &cell) in grid.row(row).iter().enumerate() {
                match cell {
                    Cell::Filled => bits.push(true),
                    Cell::Empty => bits.push(false),
                    Cell::Unknown => return Err(IndeterminateError { row, col }),
                }
            }
        }
        Ok(Self {
            rows: grid.rows(),
            cols: grid.cols(),
            bits,
        })
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for &filled in self.row(row) {
                write!(f, "{}", Cell::from(filled))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Picture {
        Picture::from_rows([[true, false], [false, true]])
    }

    #[test]
    fn from_rows_shape() {
        let picture = diagonal();
        assert_eq!(picture.rows(), 2);
        assert_eq!(picture.cols(), 2);
        assert!(picture.get(0, 0));
        assert!(!picture.get(0, 1));
        assert_eq!(picture.filled_count(), 2);
    }

    #[test]
    #[should_panic(expected = "all picture rows must have the same length")]
    fn from_rows_rejects_ragged_input() {
        let _ = Picture::from_rows([vec![true], vec![true, false]]);
    }

    #[test]
    fn empty_picture() {
        let picture = Picture::from_rows(Vec::<Vec<bool>>::new());
        assert_eq!(picture.rows(), 0);
        assert_eq!(picture.cols(), 0);
        assert_eq!(picture.clues(), (vec![], vec![]));
    }

    #[test]
    fn clue_extraction() {
        let picture = Picture::from_rows([
            [false, true, false],
            [true, true, true],
            [false, true, false],
        ]);
        let (row_clues, col_clues) = picture.clues();
        assert_eq!(
            row_clues,
            vec![Clue::new([1]), Clue::new([3]), Clue::new([1])]
        );
        assert_eq!(row_clues, col_clues);
    }

    #[test]
    fn blank_lines_extract_blank_clues() {
        let picture = Picture::from_rows([[false, false], [true, true]]);
        assert_eq!(
            picture.row_clues(),
            vec![Clue::blank(), Clue::new([2])]
        );
        assert_eq!(picture.col_clues(), vec![Clue::new([1]), Clue::new([1])]);
    }

    #[test]
    fn try_from_grid() {
        let mut grid = Grid::new(1, 2);
        grid.set(0, 0, Cell::Filled);
        assert_eq!(
            Picture::try_from(&grid),
            Err(IndeterminateError { row: 0, col: 1 })
        );
        grid.set(0, 1, Cell::Empty);
        let picture = Picture::try_from(&grid).unwrap();
        assert_eq!(picture.row(0), &[true, false]);
    }

    #[test]
    fn display_renders_rows() {
        assert_eq!(diagonal().to_string(), "#.\n.#\n");
    }
}
