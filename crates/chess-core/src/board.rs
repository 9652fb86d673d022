//! The 8x8 board.

use crate::{Color, Move, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from building a board out of a grid with the wrong shape.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} must have 8 squares, got {len}")]
    RowLength { row: usize, len: usize },
}

/// An 8x8 grid of optional pieces.
///
/// `Board` is a plain value: simulating a move copies the whole grid and
/// works on the copy, so no position is ever shared between callers and
/// query operations cannot mutate their input.
///
/// Serializes transparently as an 8x8 array of nullable piece symbols,
/// the grid shape front ends exchange. Deserialization enforces the 8x8
/// shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    #[inline]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position: Black's pieces on rows 0
    /// and 1, White's on rows 6 and 7.
    pub fn starting() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Builds a board from a dynamically shaped grid, as decoded from a
    /// wire format that does not enforce dimensions.
    pub fn from_rows(rows: &[Vec<Option<Piece>>]) -> Result<Self, BoardError> {
        if rows.len() != 8 {
            return Err(BoardError::RowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(BoardError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, &cell) in cells.iter().enumerate() {
                board.squares[row][col] = cell;
            }
        }
        Ok(board)
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub const fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Puts a piece (or nothing) on a square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Returns a new board with `mv` played on it.
    ///
    /// Whatever occupied the destination is overwritten, which is how
    /// captures happen. The receiver is left untouched.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Self {
        let mut next = *self;
        next.set(mv.to, next.get(mv.from));
        next.set(mv.from, None);
        next
    }

    /// Iterates the occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Finds the king of the given color.
    ///
    /// `None` when the board holds no such king; well-formed boards have
    /// exactly one per color, but the model does not enforce that.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(sq, _)| sq)
    }
}

impl From<[[Option<Piece>; 8]; 8]> for Board {
    fn from(squares: [[Option<Piece>; 8]; 8]) -> Self {
        Board { squares }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, " {}", piece.symbol())?,
                    None => write!(f, " \u{00B7}")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn starting_layout() {
        let board = Board::starting();
        assert_eq!(
            board.get(sq(0, 0)),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(
            board.get(sq(0, 4)),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.get(sq(7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        for col in 0..8 {
            assert_eq!(
                board.get(sq(1, col)),
                Some(Piece::new(PieceKind::Pawn, Color::Black))
            );
            assert_eq!(
                board.get(sq(6, col)),
                Some(Piece::new(PieceKind::Pawn, Color::White))
            );
        }
        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.get(sq(row, col)), None);
            }
        }
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn apply_moves_and_captures() {
        let board = Board::starting();
        let mv = Move::new(sq(6, 4), sq(4, 4));
        let next = board.apply(mv);

        assert_eq!(next.get(sq(6, 4)), None);
        assert_eq!(
            next.get(sq(4, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        // The input board is untouched.
        assert_eq!(
            board.get(sq(6, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(board.get(sq(4, 4)), None);

        // Landing on an occupied square removes the occupant.
        let capture = next.apply(Move::new(sq(4, 4), sq(1, 4)));
        assert_eq!(
            capture.get(sq(1, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(capture.pieces().count(), 31);
    }

    #[test]
    fn find_king() {
        let board = Board::starting();
        assert_eq!(board.find_king(Color::White), Some(sq(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(sq(0, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn from_rows_validates_shape() {
        let good: Vec<Vec<Option<Piece>>> = vec![vec![None; 8]; 8];
        assert_eq!(Board::from_rows(&good), Ok(Board::empty()));

        let short: Vec<Vec<Option<Piece>>> = vec![vec![None; 8]; 7];
        assert_eq!(Board::from_rows(&short), Err(BoardError::RowCount(7)));

        let mut ragged: Vec<Vec<Option<Piece>>> = vec![vec![None; 8]; 8];
        ragged[3] = vec![None; 9];
        assert_eq!(
            Board::from_rows(&ragged),
            Err(BoardError::RowLength { row: 3, len: 9 })
        );
    }

    #[test]
    fn serde_grid_round_trip() {
        let board = Board::starting();
        let json = serde_json::to_string(&board).unwrap();
        // Spot-check the wire shape: nested arrays of symbols and nulls.
        assert!(json.starts_with("[[\"♜\",\"♞\",\"♝\",\"♛\",\"♚\",\"♝\",\"♞\",\"♜\"]"));
        assert!(json.contains("[null,null,null,null,null,null,null,null]"));

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn serde_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Board>("[[null]]").is_err());
        let seven_rows = serde_json::to_string(&vec![vec![Option::<Piece>::None; 8]; 7]).unwrap();
        assert!(serde_json::from_str::<Board>(&seven_rows).is_err());
    }
}
