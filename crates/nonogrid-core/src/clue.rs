//! Line clues: ordered block-length sequences and their extraction.

use std::fmt;

use tinyvec::TinyVec;

/// The clue for a single line (row or column).
///
/// A clue is the ordered sequence of lengths of the maximal filled runs in a
/// line, left to right (or top to bottom). A line with no filled cells is
/// represented by the canonical blank clue `[0]`.
///
/// # Examples
///
/// ```
/// use nonogrid_core::Clue;
///
/// let clue = Clue::from_line([true, true, false, true]);
/// assert_eq!(clue.blocks(), &[2, 1]);
/// assert_eq!(clue.filled_count(), 3);
/// assert_eq!(clue.min_span(), 4);
/// assert!(clue.fits(4));
/// assert!(!clue.fits(3));
///
/// assert!(Clue::from_line([false, false]).is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    blocks: TinyVec<[usize; 8]>,
}

impl Default for Clue {
    fn default() -> Self {
        Self::blank()
    }
}

impl Clue {
    /// Creates a clue from an ordered sequence of block lengths.
    ///
    /// An empty sequence is canonicalized to the blank clue `[0]`.
    ///
    /// # Panics
    ///
    /// Panics if a block length of `0` appears alongside other blocks; `0`
    /// is only meaningful as the single blank-line sentinel.
    #[must_use]
    pub fn new(blocks: impl IntoIterator<Item = usize>) -> Self {
        let blocks: TinyVec<[usize; 8]> = blocks.into_iter().collect();
        if blocks.is_empty() || blocks.as_slice() == [0] {
            return Self::blank();
        }
        assert!(
            blocks.iter().all(|&len| len > 0),
            "block lengths must be positive"
        );
        Self { blocks }
    }

    /// Returns the canonical clue for a line with no filled cells.
    #[must_use]
    pub fn blank() -> Self {
        let mut blocks = TinyVec::new();
        blocks.push(0);
        Self { blocks }
    }

    /// Extracts the clue from a concrete line by run-length encoding its
    /// filled cells.
    ///
    /// This is the clue-extractor collaborator of the solving pipeline: a
    /// solved grid's extracted clues must equal the puzzle's input clues.
    #[must_use]
    pub fn from_line(line: impl IntoIterator<Item = bool>) -> Self {
        let mut blocks: TinyVec<[usize; 8]> = TinyVec::new();
        let mut run = 0;
        for filled in line {
            if filled {
                run += 1;
            } else if run > 0 {
                blocks.push(run);
                run = 0;
            }
        }
        if run > 0 {
            blocks.push(run);
        }
        if blocks.is_empty() {
            return Self::blank();
        }
        Self { blocks }
    }

    /// Returns the block lengths in order.
    ///
    /// The blank clue yields `&[0]`.
    #[must_use]
    pub fn blocks(&self) -> &[usize] {
        &self.blocks
    }

    /// Returns `true` if this is the blank clue (no filled cells).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.blocks.as_slice() == [0]
    }

    /// Returns the total number of filled cells the clue demands.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.blocks.iter().sum()
    }

    /// Returns the minimum line length able to hold this clue: the blocks
    /// plus one mandatory separator between each adjacent pair.
    ///
    /// The blank clue has a minimum span of `0`.
    #[must_use]
    pub fn min_span(&self) -> usize {
        if self.is_blank() {
            return 0;
        }
        self.filled_count() + self.blocks.len() - 1
    }

    /// Returns `true` if the clue can be placed in a line of `length` cells.
    #[must_use]
    pub fn fits(&self, length: usize) -> bool {
        self.min_span() <= length
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn new_canonicalizes_blank_forms() {
        assert_eq!(Clue::new([]), Clue::blank());
        assert_eq!(Clue::new([0]), Clue::blank());
        assert!(Clue::new([]).is_blank());
    }

    #[test]
    #[should_panic(expected = "block lengths must be positive")]
    fn new_rejects_embedded_zero() {
        let _ = Clue::new([2, 0, 1]);
    }

    #[test]
    fn from_line_encodes_runs() {
        assert_eq!(Clue::from_line([true, true, true]).blocks(), &[3]);
        assert_eq!(
            Clue::from_line([true, false, true, true, false]).blocks(),
            &[1, 2]
        );
        assert_eq!(Clue::from_line([false, false, false]).blocks(), &[0]);
        assert_eq!(Clue::from_line([]).blocks(), &[0]);
    }

    #[test]
    fn min_span_counts_separators() {
        assert_eq!(Clue::blank().min_span(), 0);
        assert_eq!(Clue::new([3]).min_span(), 3);
        assert_eq!(Clue::new([1, 2, 1]).min_span(), 6);
    }

    #[test]
    fn fits_boundary() {
        let clue = Clue::new([2, 2]);
        assert!(clue.fits(5));
        assert!(!clue.fits(4));
        assert!(Clue::blank().fits(0));
    }

    #[test]
    fn display_joins_blocks() {
        assert_eq!(Clue::new([1, 2, 3]).to_string(), "1 2 3");
        assert_eq!(Clue::blank().to_string(), "0");
    }

    proptest! {
        #[test]
        fn extracted_blocks_are_positive_and_sum_to_fill(
            line in prop::collection::vec(any::<bool>(), 0..32),
        ) {
            let clue = Clue::from_line(line.iter().copied());
            let filled = line.iter().filter(|&&b| b).count();
            prop_assert_eq!(clue.filled_count(), filled);
            if filled == 0 {
                prop_assert!(clue.is_blank());
            } else {
                prop_assert!(clue.blocks().iter().all(|&len| len > 0));
                prop_assert!(clue.fits(line.len()));
            }
        }
    }
}
