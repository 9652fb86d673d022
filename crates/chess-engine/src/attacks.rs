//! Attack detection.

use chess_core::{Board, Color, Piece, PieceKind, Square};

/// Returns true if `piece`, standing on `from`, covers `to`.
///
/// This is the pure reach predicate: destination occupancy is ignored,
/// because the question is whether the square is covered, not whether a
/// capture there would be legal. Pawns cover only their forward
/// diagonals (pushes never attack anything); sliders are blocked by any
/// occupied square strictly between `from` and `to`.
pub fn can_reach(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;

    match piece.kind {
        PieceKind::Pawn => dr == piece.color.pawn_direction() && dc.abs() == 1,
        PieceKind::Knight => {
            let (adr, adc) = (dr.abs(), dc.abs());
            (adr == 2 && adc == 1) || (adr == 1 && adc == 2)
        }
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
        PieceKind::Rook => (dr == 0 || dc == 0) && clear_path(board, from, to),
        PieceKind::Bishop => dr.abs() == dc.abs() && clear_path(board, from, to),
        PieceKind::Queen => {
            (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && clear_path(board, from, to)
        }
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, column, or diagonal.
fn clear_path(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).signum();
    let dc = (to.col() as i8 - from.col() as i8).signum();
    let mut sq = from;
    loop {
        sq = match sq.offset(dr, dc) {
            Some(next) => next,
            None => return false,
        };
        if sq == to {
            return true;
        }
        if board.get(sq).is_some() {
            return false;
        }
    }
}

/// Returns true if any piece of `by` covers `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces()
        .any(|(from, piece)| piece.color == by && can_reach(board, piece, from, target))
}

/// Returns true if the king of `color` is attacked by the other side.
///
/// A board with no such king reports false; the model treats that as a
/// defined-but-unusual input, not an error.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}
