//! Candidate-line enumeration for a single clue.

use nonogrid_core::{Cell, Clue, PuzzleError};

/// One concrete filled/empty assignment for a whole line.
///
/// Candidate lines contain only [`Cell::Filled`] and [`Cell::Empty`], never
/// [`Cell::Unknown`].
pub type CandidateLine = Box<[Cell]>;

/// Enumerates every placement of a clue's blocks in a line of `length` cells.
///
/// Each candidate contains exactly the clue's blocks, in order, separated by
/// at least one empty cell. The slack (`length` minus the clue's minimum
/// span) is distributed over the `blocks + 1` gaps before, between, and
/// after the blocks; every distribution yields one candidate, so the result
/// has `C(slack + blocks, blocks)` entries. Candidates are produced in a
/// fixed order: leading gaps grow from left to right.
///
/// The blank clue yields exactly one candidate, the all-empty line.
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidClue`] if the clue's minimum span exceeds
/// `length`.
///
/// # Examples
///
/// ```
/// use nonogrid_core::{Cell, Clue};
/// use nonogrid_solver::generate_candidates;
///
/// let candidates = generate_candidates(&Clue::new([3]), 5)?;
/// assert_eq!(candidates.len(), 3);
/// assert_eq!(
///     &*candidates[0],
///     &[Cell::Filled, Cell::Filled, Cell::Filled, Cell::Empty, Cell::Empty],
/// );
///
/// // No slack: exactly one placement.
/// assert_eq!(generate_candidates(&Clue::new([2, 2]), 5)?.len(), 1);
///
/// assert!(generate_candidates(&Clue::new([4]), 3).is_err());
/// # Ok::<(), nonogrid_core::PuzzleError>(())
/// ```
pub fn generate_candidates(
    clue: &Clue,
    length: usize,
) -> Result<Vec<CandidateLine>, PuzzleError> {
    if clue.is_blank() {
        return Ok(vec![vec![Cell::Empty; length].into_boxed_slice()]);
    }
    if !clue.fits(length) {
        return Err(PuzzleError::InvalidClue {
            clue: clue.clone(),
            length,
        });
    }
    let slack = length - clue.min_span();
    let mut candidates = Vec::new();
    let mut line = vec![Cell::Empty; length];
    place_blocks(clue.blocks(), 0, slack, &mut line, &mut candidates);
    Ok(candidates)
}

/// Places the remaining blocks starting at `start`, distributing up to
/// `slack` extra empty cells before each block, and emits one candidate per
/// complete placement.
///
/// `line` is all-`Empty` outside the blocks placed so far; every filled
/// range is reverted before returning, so the buffer can be reused across
/// sibling placements.
fn place_blocks(
    blocks: &[usize],
    start: usize,
    slack: usize,
    line: &mut [Cell],
    out: &mut Vec<CandidateLine>,
) {
    let Some((&block, rest)) = blocks.split_first() else {
        out.push(CandidateLine::from(&*line));
        return;
    };
    for gap in 0..=slack {
        let begin = start + gap;
        line[begin..begin + block].fill(Cell::Filled);
        // One mandatory separator follows every block except the last.
        let next = begin + block + usize::from(!rest.is_empty());
        place_blocks(rest, next, slack - gap, line, out);
        line[begin..begin + block].fill(Cell::Empty);
    }
}
