//! End-to-end solving tests over known puzzles.

use std::collections::HashSet;

use sudokusolve_solver::{InputError, solve, validator};

/// The classic single-solution puzzle.
const PUZZLE: &str = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

/// The unique solution of [`PUZZLE`].
const ANSWER: &str = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

const ZEROS: &str = "000000000000000000000000000000000000000000000000000000000000000000000000000000000";

/// [`ANSWER`] with four cells blanked that form an interchangeable
/// rectangle of 1s and 3s (rows 3-4, columns 5 and 8), giving a puzzle
/// with exactly two solutions.
fn two_solution_puzzle() -> (String, [String; 2]) {
    let blanks = [32, 35, 41, 44];
    let mut question = ANSWER.to_string();
    for &cell in &blanks {
        question.replace_range(cell..=cell, "0");
    }

    // The second solution has the 1s and 3s swapped within the rectangle.
    let mut other = ANSWER.to_string();
    for &cell in &blanks {
        let swapped = if ANSWER.as_bytes()[cell] == b'1' { "3" } else { "1" };
        other.replace_range(cell..=cell, swapped);
    }
    (question, [ANSWER.to_string(), other])
}

#[test]
fn solves_known_puzzle() {
    let report = solve(PUZZLE, validator::validate_solved_board, 1).unwrap();
    assert_eq!(report.solutions(), [ANSWER.to_string()]);
}

#[test]
fn unique_puzzle_yields_one_solution_even_with_higher_bound() {
    let report = solve(PUZZLE, validator::validate_solved_board, 2).unwrap();
    assert_eq!(report.solutions(), [ANSWER.to_string()]);
}

#[test]
fn solves_with_permissive_validator() {
    // Propagation and search are validator-independent for a puzzle the
    // solver completes correctly; the injected gate only filters.
    let report = solve(PUZZLE, |_| true, 1).unwrap();
    assert_eq!(report.solutions(), [ANSWER.to_string()]);
}

#[test]
fn finds_all_solutions_of_multi_solution_puzzle() {
    let (question, expected) = two_solution_puzzle();
    assert!(validator::validate_input_board(&question));

    let report = solve(&question, validator::validate_solved_board, 7).unwrap();
    assert_eq!(report.solutions().len(), 2);

    let found: HashSet<&str> = report.solutions().iter().map(String::as_str).collect();
    assert_eq!(found.len(), 2, "solutions must not repeat");
    for answer in &expected {
        assert!(found.contains(answer.as_str()));
    }
}

#[test]
fn solution_bound_is_respected() {
    let (question, expected) = two_solution_puzzle();
    let report = solve(&question, validator::validate_solved_board, 1).unwrap();
    assert_eq!(report.solutions().len(), 1);
    assert!(expected.contains(&report.solutions()[0]));
}

#[test]
fn all_zero_board_solves_to_a_valid_grid() {
    let report = solve(ZEROS, validator::validate_solved_board, 1).unwrap();
    assert_eq!(report.solutions().len(), 1);

    let solution = &report.solutions()[0];
    assert_eq!(solution.len(), 81);
    assert!(validator::validate_solved_board(solution));
    // An empty board cannot be completed without guessing.
    assert!(report.difficulty() >= 1);
}

#[test]
fn all_zero_board_bound_of_three_returns_three_distinct_grids() {
    let report = solve(ZEROS, validator::validate_solved_board, 3).unwrap();
    assert_eq!(report.solutions().len(), 3);

    let distinct: HashSet<&str> = report.solutions().iter().map(String::as_str).collect();
    assert_eq!(distinct.len(), 3);
    for solution in report.solutions() {
        assert!(validator::validate_solved_board(solution));
    }
}

#[test]
fn givens_are_never_overwritten() {
    let report = solve(PUZZLE, validator::validate_solved_board, 1).unwrap();
    let solution = report.solutions()[0].as_bytes();
    for (cell, &given) in PUZZLE.as_bytes().iter().enumerate() {
        if given != b'0' {
            assert_eq!(solution[cell], given, "given at cell {cell} changed");
        }
    }
}

#[test]
fn malformed_input_is_rejected_before_search() {
    assert!(matches!(
        solve(&"0".repeat(80), validator::validate_solved_board, 1),
        Err(InputError::Malformed(_))
    ));
    assert!(matches!(
        solve(&"0".repeat(82), validator::validate_solved_board, 1),
        Err(InputError::Malformed(_))
    ));
    assert!(matches!(
        solve(
            &format!("a{}", "0".repeat(80)),
            validator::validate_solved_board,
            1
        ),
        Err(InputError::Malformed(_))
    ));

    // Two 5s in row 0: structurally 81 digits, but contradictory.
    let mut duplicated = String::from(ZEROS);
    duplicated.replace_range(0..1, "5");
    duplicated.replace_range(8..9, "5");
    assert!(!validator::validate_input_board(&duplicated));
    assert_eq!(
        solve(&duplicated, validator::validate_solved_board, 1),
        Err(InputError::DuplicateDigit)
    );
}

#[test]
fn solved_input_round_trips() {
    // A complete, valid board is its own single solution.
    let report = solve(ANSWER, validator::validate_solved_board, 3).unwrap();
    assert_eq!(report.solutions(), [ANSWER.to_string()]);
    assert_eq!(report.difficulty(), 0);
}
