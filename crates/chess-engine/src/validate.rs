//! Single-move validation, the entry point front ends call.

use crate::attacks::is_king_attacked;
use crate::movegen::piece_destinations;
use crate::rules::{classify, GameResult};
use chess_core::{Board, Color, Move};
use std::fmt;

/// Why a proposed move was rejected.
///
/// Checks run in this order and the first failure is reported; later
/// checks are not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The origin square is empty.
    NoPieceAtOrigin,
    /// The origin piece belongs to the other player.
    WrongSideToMove,
    /// The destination is not in the piece's movement geometry.
    IllegalGeometry,
    /// The move would leave the mover's own king attacked.
    KingWouldBeInCheck,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectReason::NoPieceAtOrigin => "no piece at origin",
            RejectReason::WrongSideToMove => "wrong side to move",
            RejectReason::IllegalGeometry => "illegal move geometry",
            RejectReason::KingWouldBeInCheck => "king would be in check",
        };
        write!(f, "{}", reason)
    }
}

/// Result of validating a proposed move.
///
/// An illegal move is a normal outcome of play, not an error: callers
/// surface the reason to the player and wait for another attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is legal; the caller should adopt the returned state.
    Legal {
        /// Board with the move played.
        board: Board,
        /// The mover's opponent.
        next_to_move: Color,
        /// Classification of the new position for `next_to_move`.
        result: GameResult,
    },
    Illegal(RejectReason),
}

impl MoveOutcome {
    /// Returns true when the move was accepted.
    #[inline]
    pub const fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Legal { .. })
    }
}

/// Validates `mv` for `side_to_move` against `board`.
///
/// On success the outcome carries the post-move board, the opponent as
/// the next side to move, and the game-over classification of the new
/// position from that opponent's perspective.
pub fn validate_move(board: &Board, mv: Move, side_to_move: Color) -> MoveOutcome {
    let piece = match board.get(mv.from) {
        Some(piece) => piece,
        None => return MoveOutcome::Illegal(RejectReason::NoPieceAtOrigin),
    };
    if piece.color != side_to_move {
        return MoveOutcome::Illegal(RejectReason::WrongSideToMove);
    }
    if !piece_destinations(board, mv.from).contains(&mv.to) {
        return MoveOutcome::Illegal(RejectReason::IllegalGeometry);
    }

    let next = board.apply(mv);
    if is_king_attacked(&next, side_to_move) {
        return MoveOutcome::Illegal(RejectReason::KingWouldBeInCheck);
    }

    let opponent = side_to_move.opposite();
    MoveOutcome::Legal {
        board: next,
        next_to_move: opponent,
        result: classify(&next, opponent),
    }
}
