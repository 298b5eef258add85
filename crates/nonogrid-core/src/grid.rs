//! The partially determined board refined by the solver.

use std::fmt;

use crate::cell::Cell;

/// A monotonicity violation: a resolved cell was asked to change value.
///
/// During propagation this signals that an earlier speculative guess was
/// wrong; the solver recovers by restoring its checkpoint rather than by
/// overwriting the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell ({row}, {col}) is already {existing} but was forced to {requested}")]
pub struct ConflictError {
    /// Row index of the conflicting cell.
    pub row: usize,
    /// Column index of the conflicting cell.
    pub col: usize,
    /// The value the cell already holds.
    pub existing: Cell,
    /// The incompatible value that was requested.
    pub requested: Cell,
}

/// An m×n board of [`Cell`]s, refined monotonically from all-`Unknown`.
///
/// Cells are addressed as `(row, col)` with `(0, 0)` in the top-left corner
/// and stored row-major. Outside of a wholesale checkpoint restore, the only
/// mutation path is [`refine`](Grid::refine), which never lets a resolved
/// cell change value.
///
/// # Examples
///
/// ```
/// use nonogrid_core::{Cell, Grid};
///
/// let mut grid = Grid::new(2, 3);
/// assert!(!grid.is_complete());
///
/// assert_eq!(grid.refine(0, 1, Cell::Filled), Ok(true));
/// assert_eq!(grid.refine(0, 1, Cell::Filled), Ok(false));
/// assert!(grid.refine(0, 1, Cell::Empty).is_err());
/// assert_eq!(grid.get(0, 1), Cell::Filled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of `rows` × `cols` cells, all [`Cell::Unknown`].
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Unknown; rows * cols],
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

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// Refines the cell at `(row, col)` towards `value`.
    ///
    /// Returns `Ok(true)` if the cell was `Unknown` and is now resolved,
    /// `Ok(false)` if it already held `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError`] if the cell is resolved to the opposite
    /// value; the grid is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn refine(&mut self, row: usize, col: usize, value: Cell) -> Result<bool, ConflictError> {
        let existing = self.get(row, col);
        match existing {
            Cell::Unknown => {
                self.cells[row * self.cols + col] = value;
                Ok(true)
            }
            _ if existing == value => Ok(false),
            _ => Err(ConflictError {
                row,
                col,
                existing,
                requested: value,
            }),
        }
    }

    /// Overwrites the cell at `(row, col)` unconditionally.
    ///
    /// This bypasses the monotonicity guarantee and exists for speculative
    /// search, where the caller holds a checkpoint it can restore.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = value;
    }

    /// Returns the cells of a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns the cells of a column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn col(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        assert!(col < self.cols);
        (0..self.rows).map(move |row| self.cells[row * self.cols + col])
    }

    /// Returns the positions of all `Unknown` cells in row-major order.
    ///
    /// The solver's guess phase relies on this fixed order for determinism.
    pub fn unknown_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_unknown())
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }

    /// Returns the number of resolved cells.
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_known()).count()
    }

    /// Returns `true` if every cell is resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_known())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for cell in self.row(row) {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
