//! The propagation and search engine.

use log::{debug, trace};
use nonogrid_core::{Cell, Clue, Grid, Puzzle, PuzzleError};

use crate::candidates::{CandidateLine, generate_candidates};

/// Terminal state of a solve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Outcome {
    /// Every cell was resolved.
    #[display("solved")]
    Solved,
    /// Deduction and single-level guessing could make no further progress;
    /// the reported grid is the best effort and may contain unknown cells.
    #[display("unsolvable")]
    Unsolvable,
}

/// The result of a solve: the (possibly partial) grid plus run statistics.
///
/// # Examples
///
/// ```
/// use nonogrid_core::Clue;
/// use nonogrid_solver::solve;
///
/// let solution = solve(
///     vec![Clue::new([1]), Clue::new([1]), Clue::new([5]), Clue::new([1]), Clue::new([1])],
///     vec![Clue::new([1]), Clue::new([1]), Clue::new([5]), Clue::new([1]), Clue::new([1])],
/// )?;
/// assert!(solution.outcome().is_solved());
/// assert_eq!(solution.guesses(), 0); // pure propagation
/// # Ok::<(), nonogrid_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    grid: Grid,
    outcome: Outcome,
    sweeps: usize,
    guesses: usize,
}

impl Solution {
    /// Returns the resolved (or, for `Unsolvable`, best-effort) grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the solution and returns the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Returns the terminal outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the number of propagation sweeps performed, including sweeps
    /// inside guess branches.
    ///
    /// For a given input this count is deterministic.
    #[must_use]
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Returns the number of speculative cell assignments that were tried.
    ///
    /// Zero means propagation alone determined the grid.
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.guesses
    }
}

/// Snapshot of the full engine state, captured by value before a guess.
///
/// Restoring a checkpoint replaces the grid and every candidate set
/// atomically; it cannot partially apply.
#[derive(Debug, Clone)]
struct Checkpoint {
    grid: Grid,
    rows: Vec<Vec<CandidateLine>>,
    cols: Vec<Vec<CandidateLine>>,
}

/// A forced value disagreed with an already-resolved cell, or a line ran out
/// of candidates. Only meaningful inside a guess branch, where the caller
/// restores its checkpoint.
#[derive(Debug, Clone, Copy)]
struct Contradiction;

/// How a propagation fixpoint run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fixpoint {
    /// Every cell is resolved.
    Complete,
    /// A full sweep wrote no cell and pruned no candidate.
    Stalled,
    /// The sweep budget ran out first.
    BudgetExhausted,
}

/// The propagation and search engine for one puzzle.
///
/// The engine exclusively owns the grid and all candidate sets for the
/// duration of the solve; [`Solver::solve`] consumes it and runs to
/// completion synchronously.
///
/// Sweeps intersect every line's remaining candidates against the grid,
/// write forced cells, and prune. When a sweep changes nothing, the engine
/// checkpoints its state and tries speculative assignments: `Unknown` cells
/// in row-major order, `Filled` before `Empty`. A guess is kept only if
/// propagation from it resolves cells beyond the guessed one (or completes
/// the grid); anything else restores the checkpoint. The trial is
/// single-level, so puzzles needing deeper lookahead can end
/// [`Outcome::Unsolvable`] even when a solution exists.
///
/// # Examples
///
/// ```
/// use nonogrid_core::{Picture, Puzzle};
/// use nonogrid_solver::Solver;
///
/// let picture = Picture::from_rows([[true, false], [true, true]]);
/// let puzzle = Puzzle::from_picture(&picture);
/// let solution = Solver::new(&puzzle)?.solve();
/// assert!(solution.outcome().is_solved());
/// assert_eq!(Picture::try_from(solution.grid()).unwrap(), picture);
/// # Ok::<(), nonogrid_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    grid: Grid,
    rows: Vec<Vec<CandidateLine>>,
    cols: Vec<Vec<CandidateLine>>,
    sweeps: usize,
    guesses: usize,
    sweep_limit: Option<usize>,
}

impl Solver {
    /// Initializes the engine: a fully `Unknown` grid plus the complete
    /// candidate set for every row and column.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidClue`] if a clue cannot fit in its
    /// line. This cannot occur for a [`Puzzle`] built through
    /// [`Puzzle::new`], which performs the same validation up front.
    pub fn new(puzzle: &Puzzle) -> Result<Self, PuzzleError> {
        let height = puzzle.height();
        let width = puzzle.width();
        let rows = puzzle
            .row_clues()
            .iter()
            .map(|clue| generate_candidates(clue, width))
            .collect::<Result<Vec<_>, _>>()?;
        let cols = puzzle
            .col_clues()
            .iter()
            .map(|clue| generate_candidates(clue, height))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            grid: Grid::new(height, width),
            rows,
            cols,
            sweeps: 0,
            guesses: 0,
            sweep_limit: None,
        })
    }

    /// Caps the total number of propagation sweeps, bounding worst-case
    /// work on puzzles with combinatorially large candidate sets.
    ///
    /// Hitting the cap terminates the solve as [`Outcome::Unsolvable`] with
    /// the partial grid.
    #[must_use]
    pub fn with_sweep_limit(mut self, limit: usize) -> Self {
        self.sweep_limit = Some(limit);
        self
    }

    /// Runs the engine to a terminal state.
    #[must_use]
    pub fn solve(mut self) -> Solution {
        loop {
            match self.propagate() {
                Err(Contradiction) => {
                    // No checkpoint to fall back to: the puzzle itself
                    // admits no assignment the remaining candidates agree on.
                    debug!("contradiction outside any guess; giving up");
                    return self.finish(Outcome::Unsolvable);
                }
                Ok(Fixpoint::Complete) => return self.finish(Outcome::Solved),
                Ok(Fixpoint::BudgetExhausted) => {
                    debug!("sweep budget exhausted after {} sweeps", self.sweeps);
                    return self.finish(Outcome::Unsolvable);
                }
                Ok(Fixpoint::Stalled) => {
                    debug!(
                        "stalled after {} sweeps with {} open cells; guessing",
                        self.sweeps,
                        self.grid.unknown_positions().count()
                    );
                    if !self.guess() {
                        return self.finish(Outcome::Unsolvable);
                    }
                }
            }
        }
    }

    fn finish(self, outcome: Outcome) -> Solution {
        debug!(
            "{outcome} after {} sweeps and {} guesses",
            self.sweeps, self.guesses
        );
        Solution {
            grid: self.grid,
            outcome,
            sweeps: self.sweeps,
            guesses: self.guesses,
        }
    }

    /// Sweeps until the grid is complete, a sweep changes nothing, or the
    /// budget runs out.
    fn propagate(&mut self) -> Result<Fixpoint, Contradiction> {
        loop {
            if self.grid.is_complete() {
                self.verify_lines()?;
                return Ok(Fixpoint::Complete);
            }
            if self.sweep_limit.is_some_and(|limit| self.sweeps >= limit) {
                return Ok(Fixpoint::BudgetExhausted);
            }
            let changed = self.sweep()?;
            self.sweeps += 1;
            trace!(
                "sweep {} done, {} cells open",
                self.sweeps,
                self.grid.unknown_positions().count()
            );
            if !changed {
                return Ok(Fixpoint::Stalled);
            }
        }
    }

    /// Checks that every line's candidate set still admits the grid.
    ///
    /// Cells written by the crossing lines late in a sweep are only pruned
    /// against this line on the next sweep, and a completed grid ends the
    /// loop before that sweep happens. Without this check a line whose clue
    /// admits none of the completed values would never raise its
    /// contradiction and an invalid grid could be reported as solved.
    fn verify_lines(&mut self) -> Result<(), Contradiction> {
        for row in 0..self.grid.rows() {
            let known: Vec<Cell> = self.grid.row(row).to_vec();
            prune(&mut self.rows[row], &known)?;
        }
        for col in 0..self.grid.cols() {
            let known: Vec<Cell> = self.grid.col(col).collect();
            prune(&mut self.cols[col], &known)?;
        }
        Ok(())
    }

    /// One full sweep: every row, then every column.
    ///
    /// Returns whether anything changed: a forced cell was written or a
    /// candidate was pruned. Pruning must count, because a cell written
    /// late in a sweep (or by a guess) only prunes on the following sweep
    /// and only forces on the one after that; stalling on grid changes
    /// alone would cut that chain short.
    fn sweep(&mut self) -> Result<bool, Contradiction> {
        let mut changed = false;
        for row in 0..self.grid.rows() {
            changed |= self.resolve_row(row)?;
        }
        for col in 0..self.grid.cols() {
            changed |= self.resolve_col(col)?;
        }
        Ok(changed)
    }

    /// Forces the cells all of a row's candidates agree on, then prunes the
    /// candidates against the row's known cells.
    fn resolve_row(&mut self, row: usize) -> Result<bool, Contradiction> {
        let mut changed = false;
        for (col, value) in forced_cells(&self.rows[row])? {
            let refined = self
                .grid
                .refine(row, col, value)
                .map_err(|_| Contradiction)?;
            changed |= refined;
        }
        let known: Vec<Cell> = self.grid.row(row).to_vec();
        changed |= prune(&mut self.rows[row], &known)?;
        Ok(changed)
    }

    /// Column counterpart of [`resolve_row`](Self::resolve_row).
    fn resolve_col(&mut self, col: usize) -> Result<bool, Contradiction> {
        let mut changed = false;
        for (row, value) in forced_cells(&self.cols[col])? {
            let refined = self
                .grid
                .refine(row, col, value)
                .map_err(|_| Contradiction)?;
            changed |= refined;
        }
        let known: Vec<Cell> = self.grid.col(col).collect();
        changed |= prune(&mut self.cols[col], &known)?;
        Ok(changed)
    }

    /// Tries speculative assignments until one makes progress.
    ///
    /// Cells are visited in row-major order, `Filled` before `Empty`.
    /// Returns `false` if no assignment at any open cell is productive.
    fn guess(&mut self) -> bool {
        let checkpoint = self.checkpoint();
        let open: Vec<(usize, usize)> = self.grid.unknown_positions().collect();
        for (row, col) in open {
            for value in [Cell::Filled, Cell::Empty] {
                self.guesses += 1;
                trace!("guess #{}: ({row}, {col}) = {value}", self.guesses);
                self.grid.set(row, col, value);
                match self.propagate() {
                    Ok(Fixpoint::Complete) => return true,
                    // Productive only if propagation resolved cells beyond
                    // the guessed one.
                    Ok(Fixpoint::Stalled)
                        if self.grid.known_count() > checkpoint.grid.known_count() + 1 =>
                    {
                        return true;
                    }
                    Ok(Fixpoint::Stalled) | Err(Contradiction) => {
                        self.restore(checkpoint.clone());
                    }
                    Ok(Fixpoint::BudgetExhausted) => {
                        self.restore(checkpoint.clone());
                        return false;
                    }
                }
            }
        }
        false
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            grid: self.grid.clone(),
            rows: self.rows.clone(),
            cols: self.cols.clone(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        let Checkpoint { grid, rows, cols } = checkpoint;
        self.grid = grid;
        self.rows = rows;
        self.cols = cols;
    }
}

/// Returns the positions all remaining candidates agree on, with the agreed
/// value.
///
/// An empty candidate set is a contradiction: the line admits no assignment
/// compatible with the grid.
fn forced_cells(
    candidates: &[CandidateLine],
) -> Result<Vec<(usize, Cell)>, Contradiction> {
    let (first, rest) = candidates.split_first().ok_or(Contradiction)?;
    Ok(first
        .iter()
        .enumerate()
        .filter(|&(i, value)| rest.iter().all(|candidate| candidate[i] == *value))
        .map(|(i, &value)| (i, value))
        .collect())
}

/// Discards candidates that disagree with any known cell of the line.
///
/// Returns whether anything was removed. The set only ever shrinks; an
/// emptied set is a contradiction.
fn prune(
    candidates: &mut Vec<CandidateLine>,
    known: &[Cell],
) -> Result<bool, Contradiction> {
    let before = candidates.len();
    candidates.retain(|candidate| {
        candidate
            .iter()
            .zip(known)
            .all(|(&value, &cell)| cell.admits(value))
    });
    if candidates.is_empty() {
        return Err(Contradiction);
    }
    Ok(candidates.len() < before)
}

/// Solves a puzzle given its row and column clues.
///
/// This is the one-call entry point: it validates the clues, runs the
/// engine, and returns the [`Solution`].
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidClue`] or [`PuzzleError::InvalidPuzzle`]
/// if the clues are malformed; see [`Puzzle::new`]. An under-constrained or
/// over-constrained but well-formed puzzle is not an error: it solves to
/// [`Outcome::Unsolvable`] with a best-effort grid.
///
/// # Examples
///
/// ```
/// use nonogrid_core::{Clue, PuzzleError};
/// use nonogrid_solver::solve;
///
/// let err = solve(vec![Clue::new([3])], vec![Clue::new([1])]).unwrap_err();
/// assert_eq!(err, PuzzleError::InvalidClue { clue: Clue::new([3]), length: 1 });
/// ```
pub fn solve(row_clues: Vec<Clue>, col_clues: Vec<Clue>) -> Result<Solution, PuzzleError> {
    let puzzle = Puzzle::new(row_clues, col_clues)?;
    Ok(Solver::new(&puzzle)?.solve())
}
