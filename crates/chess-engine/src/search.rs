//! Fixed-depth minimax search for the automated opponent.
//!
//! White maximizes and Black minimizes the material evaluation. There is
//! no pruning: the branching factor at the default depth of 2 keeps the
//! tree small, and the selected move stays bit-for-bit reproducible.

use crate::attacks::is_king_attacked;
use crate::eval::evaluate;
use crate::movegen::legal_moves;
use chess_core::{Board, Color, Move};
use thiserror::Error;

/// Score of a checkmate terminal node, from the winner's perspective.
pub const MATE_SCORE: i32 = 10_000;

/// Search depth used when the caller does not supply one.
pub const DEFAULT_DEPTH: u8 = 2;

/// The move chosen for the automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedMove {
    pub mv: Move,
    /// Board after playing `mv`.
    pub board: Board,
    /// Minimax score of `mv`, from White's perspective.
    pub score: i32,
}

/// The side to move has no legal moves, so there is nothing to select.
///
/// An expected outcome for the caller to branch on (the position is
/// checkmate or stalemate), not a fault.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no legal move available for {0}")]
pub struct NoMoveAvailable(pub Color);

/// Scores a position by searching `depth` plies ahead.
///
/// Leaves return the static material evaluation. A side with no legal
/// moves scores as a mate against it when in check (-[`MATE_SCORE`] for
/// White, +[`MATE_SCORE`] for Black) and zero otherwise (stalemate).
/// Interior nodes take the best child for the side to move: maximum for
/// White, minimum for Black.
pub fn minimax(board: &Board, depth: u8, to_move: Color) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }

    let moves = legal_moves(board, to_move);
    if moves.is_empty() {
        if is_king_attacked(board, to_move) {
            return match to_move {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        return 0;
    }

    let children = moves
        .iter()
        .map(|&mv| minimax(&board.apply(mv), depth - 1, to_move.opposite()));
    match to_move {
        Color::White => children.fold(i32::MIN, i32::max),
        Color::Black => children.fold(i32::MAX, i32::min),
    }
}

/// Picks the root move whose minimax score is best for `to_move`.
///
/// Only strictly better scores replace the running best, so ties keep
/// the first move in the deterministic [`legal_moves`] order. A `depth`
/// of 0 falls back to [`DEFAULT_DEPTH`].
pub fn select_ai_move(
    board: &Board,
    to_move: Color,
    depth: u8,
) -> Result<SelectedMove, NoMoveAvailable> {
    let depth = if depth == 0 { DEFAULT_DEPTH } else { depth };

    let mut best: Option<(Move, i32)> = None;
    for mv in legal_moves(board, to_move) {
        let score = minimax(&board.apply(mv), depth - 1, to_move.opposite());
        let improves = match best {
            None => true,
            Some((_, best_score)) => match to_move {
                Color::White => score > best_score,
                Color::Black => score < best_score,
            },
        };
        if improves {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => Ok(SelectedMove {
            mv,
            board: board.apply(mv),
            score,
        }),
        None => Err(NoMoveAvailable(to_move)),
    }
}
