//! The three-state cell used by the solving pipeline.

/// State of a single board cell during solving.
///
/// The solver starts every cell at [`Cell::Unknown`] and refines it towards
/// [`Cell::Filled`] or [`Cell::Empty`]; a resolved cell never changes again
/// outside an explicit checkpoint restore (see [`Grid`](crate::Grid)).
///
/// # Examples
///
/// ```
/// use nonogrid_core::Cell;
///
/// let cell = Cell::default();
/// assert!(cell.is_unknown());
/// assert!(cell.admits(Cell::Filled));
/// assert!(!Cell::Empty.admits(Cell::Filled));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Cell {
    /// Not yet determined.
    #[default]
    #[display("?")]
    Unknown,
    /// Determined to be filled.
    #[display("#")]
    Filled,
    /// Determined to be empty.
    #[display(".")]
    Empty,
}

impl Cell {
    /// Returns `true` if this cell has been resolved to `Filled` or `Empty`.
    #[inline]
    #[must_use]
    pub fn is_known(self) -> bool {
        !self.is_unknown()
    }

    /// Returns `true` if a candidate value is compatible with this cell.
    ///
    /// An `Unknown` cell admits anything; a resolved cell admits only its
    /// own value. Used when pruning candidate lines against the grid.
    #[inline]
    #[must_use]
    pub fn admits(self, candidate: Cell) -> bool {
        self.is_unknown() || self == candidate
    }
}

impl From<bool> for Cell {
    /// Converts a binary picture cell (`true` = filled) into a resolved cell.
    #[inline]
    fn from(filled: bool) -> Self {
        if filled { Cell::Filled } else { Cell::Empty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown() {
        assert_eq!(Cell::default(), Cell::Unknown);
    }

    #[test]
    fn admits_matrix() {
        assert!(Cell::Unknown.admits(Cell::Filled));
        assert!(Cell::Unknown.admits(Cell::Empty));
        assert!(Cell::Filled.admits(Cell::Filled));
        assert!(!Cell::Filled.admits(Cell::Empty));
        assert!(Cell::Empty.admits(Cell::Empty));
        assert!(!Cell::Empty.admits(Cell::Filled));
    }

    #[test]
    fn display_chars() {
        assert_eq!(Cell::Unknown.to_string(), "?");
        assert_eq!(Cell::Filled.to_string(), "#");
        assert_eq!(Cell::Empty.to_string(), ".");
    }

    #[test]
    fn from_bool() {
        assert_eq!(Cell::from(true), Cell::Filled);
        assert_eq!(Cell::from(false), Cell::Empty);
    }
}
