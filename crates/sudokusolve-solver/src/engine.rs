//! The solving engine: constraint propagation plus backtracking search.
//!
//! A solve runs three phases over a shared board until the solution bound
//! is reached or the search space is exhausted:
//!
//! 1. **Naked singles** — every empty cell's candidate set is recomputed
//!    from its row, column, and box; cells with exactly one candidate are
//!    committed immediately.
//! 2. **Hidden singles** — per (house, digit) tracking built during the
//!    naked-singles sweep; a digit with exactly one remaining slot in a
//!    house is committed there.
//! 3. **Backtracking** — when propagation stalls, the empty cell with the
//!    fewest candidates is branched on: one full board snapshot per
//!    candidate is pushed onto an explicit guess stack, and the search
//!    continues from the most recent snapshot. Dead branches (a cell with
//!    zero candidates) are recovered by popping the stack.
//!
//! Boards have value semantics, so sibling branches never alias: each stack
//! entry owns an independent board.

use sudokusolve_core::{Board, Digit, DigitSet, House, HouseMask};

use crate::error::InputError;

/// The outcome of one solve invocation.
///
/// Every outcome of a well-formed solve is a normal return: zero, one, or
/// up to `max_solutions` solutions. The difficulty score is the number of
/// guess-stack entries explored, a rough complexity proxy owned by the
/// invocation (a puzzle solved by propagation alone scores 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    solutions: Vec<String>,
    difficulty: u64,
}

impl SolveReport {
    /// The accepted solutions, in discovery order, each in the 81-character
    /// board format.
    #[must_use]
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Consumes the report and returns the solutions.
    #[must_use]
    pub fn into_solutions(self) -> Vec<String> {
        self.solutions
    }

    /// Number of backtracking branches explored during the solve.
    #[must_use]
    pub fn difficulty(&self) -> u64 {
        self.difficulty
    }
}

/// Parses and fully validates an input board string.
///
/// # Errors
///
/// Returns [`InputError::Malformed`] if `input` is not 81 characters of
/// `0-9`, and [`InputError::DuplicateDigit`] if a digit 1-9 already occurs
/// twice in some row, column, or box.
pub fn parse_input(input: &str) -> Result<Board, InputError> {
    let board: Board = input.parse()?;
    if !board.is_consistent() {
        return Err(InputError::DuplicateDigit);
    }
    Ok(board)
}

/// Solves a sudoku board, collecting up to `max_solutions` completions.
///
/// `input` is an 81-character string (`0` for empty cells, row-major).
/// `is_complete_board_valid` is the authoritative acceptance gate: every
/// completed board is passed through it before being collected, so callers
/// normally inject [`validator::validate_solved_board`].
///
/// Returns the solutions found together with the difficulty score. Finding
/// fewer than `max_solutions` solutions — including none at all — is a
/// normal outcome, not an error. A `max_solutions` of zero yields an empty
/// report without searching.
///
/// [`validator::validate_solved_board`]: crate::validator::validate_solved_board
///
/// # Errors
///
/// Returns [`InputError`] if `input` is malformed or already violates a
/// sudoku constraint; no search work happens in that case.
///
/// # Examples
///
/// ```
/// use sudokusolve_solver::{solve, validator};
///
/// let puzzle = "\
/// 530070000600195000098000060800060003400803001\
/// 700020006060000280000419005000080079";
/// let report = solve(puzzle, validator::validate_solved_board, 1)?;
/// assert_eq!(report.solutions().len(), 1);
/// # Ok::<(), sudokusolve_solver::InputError>(())
/// ```
pub fn solve<F>(
    input: &str,
    is_complete_board_valid: F,
    max_solutions: usize,
) -> Result<SolveReport, InputError>
where
    F: Fn(&str) -> bool,
{
    let board = parse_input(input)?;
    Ok(Search::new(board).run(&is_complete_board_valid, max_solutions))
}

/// The empty cell chosen to branch on: fewest candidates, first in scan
/// order on ties.
#[derive(Debug, Clone, Copy)]
struct Pivot {
    cell: usize,
    candidates: DigitSet,
}

/// Result of one naked-singles sweep.
#[derive(Debug, Clone, Copy)]
enum Propagation {
    /// At least one forced assignment was committed; candidate state is now
    /// stale, so the caller must re-run the sweep before anything else.
    Progress,
    /// No forced assignment was found. Carries the branching pivot, if any
    /// empty cell remains.
    Stalled(Option<Pivot>),
    /// Some cell has no legal candidate: this branch is unsatisfiable.
    NoOptions,
}

/// One backtracking search over a single puzzle.
struct Search {
    board: Board,
    /// Alternative board snapshots awaiting exploration, LIFO.
    guess_stack: Vec<Board>,
    /// Per (house, digit) slots where the digit is still a candidate.
    /// Indexed by [`House::ALL`] order, then digit value minus one.
    /// Rebuilt from scratch every outer iteration, never patched.
    tracking: [[HouseMask; 9]; 27],
    solutions: Vec<Board>,
    difficulty: u64,
}

impl Search {
    fn new(board: Board) -> Self {
        Self {
            board,
            guess_stack: Vec::new(),
            tracking: [[HouseMask::EMPTY; 9]; 27],
            solutions: Vec::new(),
            difficulty: 0,
        }
    }

    fn run<F>(mut self, is_complete_board_valid: &F, max_solutions: usize) -> SolveReport
    where
        F: Fn(&str) -> bool,
    {
        while self.solutions.len() < max_solutions {
            if self.board.is_full() {
                self.accept(is_complete_board_valid);
                // Accepted or not, this branch is finished; resume from the
                // next guess.
                if !self.pop_guess() {
                    break;
                }
                continue;
            }

            self.tracking = [[HouseMask::EMPTY; 9]; 27];
            match self.naked_singles() {
                Propagation::Progress => {}
                Propagation::NoOptions => {
                    if !self.pop_guess() {
                        break;
                    }
                }
                Propagation::Stalled(pivot) => {
                    if self.hidden_singles() {
                        continue;
                    }
                    if let Some(pivot) = pivot {
                        self.push_guesses(pivot);
                    }
                    if !self.pop_guess() {
                        break;
                    }
                }
            }
        }

        SolveReport {
            solutions: self.solutions.iter().map(Board::to_string).collect(),
            difficulty: self.difficulty,
        }
    }

    /// Runs the completed board through the injected validator and collects
    /// it if accepted.
    fn accept<F>(&mut self, is_complete_board_valid: &F)
    where
        F: Fn(&str) -> bool,
    {
        let rendered = self.board.to_string();
        if is_complete_board_valid(&rendered) {
            log::debug!(
                "solution {} accepted after {} branches",
                self.solutions.len() + 1,
                self.difficulty
            );
            self.solutions.push(self.board);
        } else {
            // Propagation should never complete an invalid board, but the
            // injected validator is the authoritative gate; the board is
            // dropped like any other dead branch.
            log::debug!("completed board rejected by validator");
        }
    }

    /// One full naked-singles sweep over every empty cell.
    ///
    /// The sweep never exits early: hidden-single tracking and pivot
    /// selection both need every empty cell scanned, even after a dead cell
    /// or a forced assignment has been seen.
    fn naked_singles(&mut self) -> Propagation {
        let mut changed = false;
        let mut dead = false;
        let mut pivot: Option<Pivot> = None;

        for cell in 0..81 {
            if self.board.get(cell).is_some() {
                continue;
            }
            let candidates = self.board.candidates_at(cell);
            if let Some(digit) = candidates.as_single() {
                self.board.set(cell, digit);
                changed = true;
            } else if candidates.is_empty() {
                dead = true;
            } else {
                self.track_candidates(cell, candidates);
                if pivot.is_none_or(|p| candidates.len() < p.candidates.len()) {
                    pivot = Some(Pivot { cell, candidates });
                }
            }
        }

        if dead {
            Propagation::NoOptions
        } else if changed {
            Propagation::Progress
        } else {
            Propagation::Stalled(pivot)
        }
    }

    /// Registers `candidates` for `cell` in all three of its houses.
    fn track_candidates(&mut self, cell: usize, candidates: DigitSet) {
        for (house_index, slot) in House::memberships(cell) {
            for digit in candidates {
                self.tracking[house_index][digit_index(digit)].insert(slot);
            }
        }
    }

    /// One hidden-singles sweep: commits every digit that has exactly one
    /// remaining slot within some house.
    ///
    /// A single sweep per outer iteration is enough: a commit here can make
    /// other tracking entries stale, but any newly forced cells are picked
    /// up when the loop re-runs the naked-singles sweep.
    fn hidden_singles(&mut self) -> bool {
        let mut changed = false;
        for (house_index, house) in House::ALL.into_iter().enumerate() {
            for digit in Digit::ALL {
                if let Some(slot) = self.tracking[house_index][digit_index(digit)].as_single() {
                    self.board.set(house.cell(slot), digit);
                    changed = true;
                }
            }
        }
        changed
    }

    /// Pushes one board snapshot per candidate at the pivot cell.
    fn push_guesses(&mut self, pivot: Pivot) {
        log::trace!(
            "branching on cell {} with {} candidates",
            pivot.cell,
            pivot.candidates.len()
        );
        for digit in pivot.candidates {
            let mut guess = self.board;
            guess.set(pivot.cell, digit);
            self.guess_stack.push(guess);
        }
    }

    /// Discards the current board and resumes from the most recent guess.
    /// Returns `false` when the stack is exhausted.
    fn pop_guess(&mut self) -> bool {
        match self.guess_stack.pop() {
            Some(board) => {
                self.board = board;
                self.difficulty += 1;
                true
            }
            None => false,
        }
    }
}

fn digit_index(digit: Digit) -> usize {
    usize::from(digit.value()) - 1
}
