//! Legal destinations from a square, for hint highlighting

use tracing::trace;

use crate::board::BoardQuery;
use crate::rules::move_validator::Move;
use crate::types::Coord;

/// Candidate offsets, in the order results are reported
///
/// Unit steps first, then jumps, each as (+,+), (-,+), (+,-), (-,-).
pub const CANDIDATE_OFFSETS: [Coord; 8] = [
    Coord::new(1, 1),
    Coord::new(-1, 1),
    Coord::new(1, -1),
    Coord::new(-1, -1),
    Coord::new(2, 2),
    Coord::new(-2, 2),
    Coord::new(2, -2),
    Coord::new(-2, -2),
];

/// All legal moves for the piece on `at`
///
/// An empty or off-board square has no moves.
pub fn possible_moves<B: BoardQuery + ?Sized>(board: &B, at: Coord) -> Vec<Move> {
    let Some(mover) = board.color_at(at) else {
        trace!("no piece at {at}, nothing to enumerate");
        return Vec::new();
    };

    let candidates: [Move; 8] = CANDIDATE_OFFSETS.map(|offset| Move::new(at, at + offset, mover));

    candidates
        .into_iter()
        .filter(|mv| mv.is_valid(board))
        .collect()
}

/// Destination squares of [`possible_moves`], same order
pub fn possible_destinations<B: BoardQuery + ?Sized>(board: &B, at: Coord) -> Vec<Coord> {
    possible_moves(board, at).into_iter().map(|mv| mv.end).collect()
}
