//! Test suite for checkers move validation and enumeration
//!
//! # Test Organization
//!
//! - `test_step_*` - single diagonal steps
//! - `test_jump_*` - two-square captures
//! - `test_parity_*` - the light/dark square rule and its ordering
//! - `test_enumerate_*` - `possible_moves` contents and order

use super::*;
use crate::board::{BoardQuery, CheckerBoard};
use crate::types::{Coord, PieceColor};

/// Build a board with the given pieces and nothing else
fn create_test_board(pieces: &[(PieceColor, (i32, i32))]) -> CheckerBoard {
    let mut board = CheckerBoard::new();
    for &(color, (x, y)) in pieces {
        board.set(Coord::new(x, y), Some(color)).unwrap();
    }
    board
}

fn white_move(from: (i32, i32), to: (i32, i32)) -> Move {
    Move::new(from.into(), to.into(), PieceColor::White)
}

fn black_move(from: (i32, i32), to: (i32, i32)) -> Move {
    Move::new(from.into(), to.into(), PieceColor::Black)
}

// ============================================================================
// Step Tests
// ============================================================================

#[test]
fn test_step_all_four_diagonals() {
    //! A lone piece may step onto any of its four diagonal neighbours
    let board = create_test_board(&[(PieceColor::White, (3, 2))]);

    for to in [(4, 3), (2, 3), (4, 1), (2, 1)] {
        assert_eq!(
            white_move((3, 2), to).check(&board),
            Ok(MoveKind::Step),
            "step to {to:?} should be legal"
        );
    }
}

#[test]
fn test_step_legal_iff_dark_in_bounds_and_empty() {
    //! Exhaustive over every in-bounds start and every unit diagonal: the step
    //! is legal exactly when the destination is dark, on the board and empty.
    let board = CheckerBoard::setup_position();

    for x in 0..8 {
        for y in 0..8 {
            let start = Coord::new(x, y);
            for offset in &CANDIDATE_OFFSETS[..4] {
                let end = start + *offset;
                let expected = end.is_dark() && board.in_bounds(end) && board.is_empty(end);
                for mover in [PieceColor::White, PieceColor::Black] {
                    assert_eq!(
                        Move::new(start, end, mover).is_valid(&board),
                        expected,
                        "{start} -> {end} for {mover}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_step_onto_occupied_square() {
    //! Friendly or enemy, an occupied destination is never a legal step
    let board = create_test_board(&[
        (PieceColor::White, (3, 2)),
        (PieceColor::White, (4, 3)),
        (PieceColor::Black, (2, 3)),
    ]);

    assert_eq!(
        white_move((3, 2), (4, 3)).check(&board),
        Err(IllegalMove::Occupied(Coord::new(4, 3)))
    );
    assert_eq!(
        white_move((3, 2), (2, 3)).check(&board),
        Err(IllegalMove::Occupied(Coord::new(2, 3)))
    );
}

#[test]
fn test_step_off_board() {
    //! Edge pieces cannot step off the grid
    let board = create_test_board(&[(PieceColor::Black, (0, 1))]);

    assert_eq!(
        black_move((0, 1), (-1, 2)).check(&board),
        Err(IllegalMove::OutOfBounds(Coord::new(-1, 2)))
    );
    assert!(black_move((0, 1), (1, 2)).is_valid(&board));
}

#[test]
fn test_non_diagonal_move() {
    //! Moves on a dark square that are not pure diagonals are rejected
    let board = create_test_board(&[(PieceColor::White, (3, 2))]);

    // (3, 2) -> (4, 5): dark destination, dx = 1, dy = 3
    assert_eq!(
        white_move((3, 2), (4, 5)).check(&board),
        Err(IllegalMove::NotDiagonal)
    );
    // Sideways by two files stays dark but is still not diagonal
    assert_eq!(
        white_move((3, 2), (5, 2)).check(&board),
        Err(IllegalMove::NotDiagonal)
    );
    // Sideways by one file lands on a light square, so parity catches it first
    assert_eq!(
        white_move((3, 2), (4, 2)).check(&board),
        Err(IllegalMove::LightSquare(Coord::new(4, 2)))
    );
}

#[test]
fn test_long_diagonal_rejected() {
    //! Three or more squares along a diagonal is never legal
    let board = create_test_board(&[(PieceColor::White, (0, 1))]);

    assert_eq!(
        white_move((0, 1), (3, 4)).check(&board),
        Err(IllegalMove::TooFar(3))
    );
    assert!(!white_move((0, 1), (6, 7)).is_valid(&board));
}

#[test]
fn test_extreme_start_coordinates() {
    //! Starts at the ends of the i32 range are rejected, never overflow
    let board = CheckerBoard::new();

    assert_eq!(
        white_move((i32::MIN, 0), (1, 0)).check(&board),
        Err(IllegalMove::NotDiagonal)
    );
    assert!(!white_move((i32::MAX, 0), (1, 0)).is_valid(&board));
    assert_eq!(
        black_move((i32::MIN, i32::MIN), (0, 1)).check(&board),
        Err(IllegalMove::NotDiagonal)
    );
    assert_eq!(
        black_move((i32::MAX - 6, i32::MAX - 5), (1, 2)).check(&board),
        Err(IllegalMove::TooFar(i64::from(i32::MAX) - 7))
    );
}

// ============================================================================
// Jump Tests
// ============================================================================

#[test]
fn test_jump_over_opponent() {
    //! White at (3,2), black at (4,3), empty (5,4): the jump captures (4,3)
    let board = create_test_board(&[
        (PieceColor::White, (3, 2)),
        (PieceColor::Black, (4, 3)),
    ]);

    assert_eq!(
        white_move((3, 2), (5, 4)).check(&board),
        Ok(MoveKind::Jump {
            captured: Coord::new(4, 3)
        })
    );
}

#[test]
fn test_jump_over_own_piece() {
    //! The same geometry with a friendly piece in the middle is illegal
    let board = create_test_board(&[
        (PieceColor::White, (3, 2)),
        (PieceColor::White, (4, 3)),
    ]);

    assert_eq!(
        white_move((3, 2), (5, 4)).check(&board),
        Err(IllegalMove::NoCapturablePiece(Coord::new(4, 3)))
    );
}

#[test]
fn test_jump_over_nothing() {
    //! A two-square move without a piece to capture is illegal
    let board = create_test_board(&[(PieceColor::Black, (3, 2))]);

    assert!(!black_move((3, 2), (1, 0)).is_valid(&board));
    assert!(!black_move((3, 2), (5, 4)).is_valid(&board));
}

#[test]
fn test_jump_uses_mover_color_from_move() {
    //! The validator trusts the color on the move, not the piece on `start`
    let board = create_test_board(&[(PieceColor::Black, (4, 3))]);

    // Nothing stands on (3, 2); only the declared mover color matters
    assert!(white_move((3, 2), (5, 4)).is_valid(&board));
    assert!(!black_move((3, 2), (5, 4)).is_valid(&board));
}

#[test]
fn test_jump_all_directions_for_black() {
    //! Captures work backwards as well as forwards; there is no direction rule
    let board = create_test_board(&[
        (PieceColor::Black, (4, 3)),
        (PieceColor::White, (5, 4)),
        (PieceColor::White, (3, 4)),
        (PieceColor::White, (5, 2)),
        (PieceColor::White, (3, 2)),
    ]);

    for to in [(6, 5), (2, 5), (6, 1), (2, 1)] {
        assert!(black_move((4, 3), to).is_valid(&board), "jump to {to:?}");
    }
}

#[test]
fn test_jump_onto_occupied_square() {
    //! Landing square must be empty even when the capture is available
    let board = create_test_board(&[
        (PieceColor::White, (3, 2)),
        (PieceColor::Black, (4, 3)),
        (PieceColor::Black, (5, 4)),
    ]);

    assert_eq!(
        white_move((3, 2), (5, 4)).check(&board),
        Err(IllegalMove::Occupied(Coord::new(5, 4)))
    );
}

// ============================================================================
// Parity Tests
// ============================================================================

#[test]
fn test_parity_light_square_never_legal() {
    //! From (3,3), (4,4) is a light square: illegal even when empty and on the board
    let board = create_test_board(&[(PieceColor::White, (3, 3))]);

    assert!(board.in_bounds(Coord::new(4, 4)));
    assert!(board.is_empty(Coord::new(4, 4)));
    assert_eq!(
        white_move((3, 3), (4, 4)).check(&board),
        Err(IllegalMove::LightSquare(Coord::new(4, 4)))
    );
}

#[test]
fn test_parity_checked_before_bounds() {
    //! Off-board light squares report the parity failure, not the bounds one
    let board = CheckerBoard::new();

    assert_eq!(
        white_move((0, 0), (-1, -1)).check(&board),
        Err(IllegalMove::LightSquare(Coord::new(-1, -1)))
    );
    assert_eq!(
        white_move((7, 7), (8, 8)).check(&board),
        Err(IllegalMove::LightSquare(Coord::new(8, 8)))
    );
    assert_eq!(
        white_move((0, 0), (-1, 0)).check(&board),
        Err(IllegalMove::OutOfBounds(Coord::new(-1, 0)))
    );
}

#[test]
fn test_parity_light_square_regardless_of_capture() {
    //! A "jump" whose landing square is light fails even with an enemy between
    let board = create_test_board(&[
        (PieceColor::White, (2, 2)),
        (PieceColor::Black, (3, 3)),
    ]);

    assert_eq!(
        white_move((2, 2), (4, 4)).check(&board),
        Err(IllegalMove::LightSquare(Coord::new(4, 4)))
    );
}

// ============================================================================
// Enumeration Tests
// ============================================================================

#[test]
fn test_enumerate_lone_piece_order() {
    //! A lone piece yields its four steps in (+,+), (-,+), (+,-), (-,-) order
    let board = create_test_board(&[(PieceColor::White, (3, 2))]);

    let moves = possible_moves(&board, Coord::new(3, 2));

    let expected: Vec<Move> = [(4, 3), (2, 3), (4, 1), (2, 1)]
        .into_iter()
        .map(|to| white_move((3, 2), to))
        .collect();
    assert_eq!(moves, expected);
}

#[test]
fn test_enumerate_steps_before_jumps() {
    //! Jumps come after all steps, in the same direction order
    let board = create_test_board(&[
        (PieceColor::White, (3, 2)),
        (PieceColor::Black, (4, 3)),
        (PieceColor::Black, (2, 1)),
    ]);

    let destinations = possible_destinations(&board, Coord::new(3, 2));

    assert_eq!(
        destinations,
        vec![
            Coord::new(2, 3),
            Coord::new(4, 1),
            Coord::new(5, 4),
            Coord::new(1, 0),
        ]
    );
}

#[test]
fn test_enumerate_matches_validator() {
    //! The result is exactly the valid subset of the eight candidates
    let board = CheckerBoard::setup_position();

    for (at, mover) in board.pieces() {
        let expected: Vec<Move> = CANDIDATE_OFFSETS
            .iter()
            .map(|offset| Move::new(at, at + *offset, mover))
            .filter(|mv| mv.is_valid(&board))
            .collect();
        assert_eq!(possible_moves(&board, at), expected, "piece at {at}");
    }
}

#[test]
fn test_enumerate_opening_position() {
    //! Only the front ranks can move at the start, one or two squares each
    let board = CheckerBoard::setup_position();

    assert!(possible_moves(&board, Coord::new(1, 0)).is_empty());
    assert_eq!(
        possible_destinations(&board, Coord::new(7, 2)),
        vec![Coord::new(6, 3)]
    );
    assert_eq!(
        possible_destinations(&board, Coord::new(0, 5)),
        vec![Coord::new(1, 4)]
    );
}

#[test]
fn test_enumerate_empty_square() {
    //! No piece, no moves
    let board = CheckerBoard::new();
    assert!(possible_moves(&board, Coord::new(3, 2)).is_empty());
}

#[test]
fn test_enumerate_off_board() {
    //! Off-board squares never hold a piece
    let board = CheckerBoard::setup_position();
    assert!(possible_moves(&board, Coord::new(-1, 0)).is_empty());
    assert!(possible_moves(&board, Coord::new(8, 3)).is_empty());
}

#[test]
fn test_enumerate_corner_piece() {
    //! A corner piece has one diagonal, and can jump along it
    let board = create_test_board(&[
        (PieceColor::Black, (0, 7)),
        (PieceColor::White, (1, 6)),
    ]);

    assert_eq!(
        possible_destinations(&board, Coord::new(0, 7)),
        vec![Coord::new(2, 5)]
    );
}
