//! Randomized move selection for the casual difficulty levels.
//!
//! These strategies are a separate path from the minimax opponent: they
//! trade strength for variety and are explicitly non-deterministic, so
//! the RNG comes from the caller and tests can seed it.

use crate::movegen::legal_moves;
use chess_core::{Board, Color, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Casual opponent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Any legal move, uniformly at random.
    Easy,
    /// Prefers a random capture when one exists.
    Medium,
    /// Prefers a random capture when one exists.
    Hard,
}

/// Picks a move for `to_move` at the given difficulty, or `None` when no
/// legal move exists.
///
/// Easy plays uniformly at random. Medium and hard pick a uniformly
/// random capture when any capture is available, falling back to a
/// uniformly random move otherwise.
pub fn select_casual_move<R: Rng>(
    board: &Board,
    to_move: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let moves = legal_moves(board, to_move);

    if difficulty != Difficulty::Easy {
        let captures: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|mv| board.get(mv.to).is_some())
            .collect();
        if let Some(&capture) = captures.choose(rng) {
            return Some(capture);
        }
    }

    moves.choose(rng).copied()
}
