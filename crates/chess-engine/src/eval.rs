//! Static material evaluation.

use chess_core::{Board, Color, PieceKind};

/// Point value of a piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 10,
        PieceKind::Knight | PieceKind::Bishop => 30,
        PieceKind::Rook => 50,
        PieceKind::Queen => 90,
        PieceKind::King => 900,
    }
}

/// Material sum of the whole board from White's perspective: White's
/// pieces count positive, Black's negative.
pub fn evaluate(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| match piece.color {
            Color::White => piece_value(piece.kind),
            Color::Black => -piece_value(piece.kind),
        })
        .sum()
}
