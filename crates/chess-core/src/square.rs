//! Board square coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error for square coordinates outside the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("square ({row}, {col}) is off the board")]
pub struct OffBoard {
    pub row: u8,
    pub col: u8,
}

/// A square on the 8x8 board, addressed by zero-based (row, col).
///
/// Row 0 is the back rank on Black's side, row 7 on White's. Both
/// coordinates of a constructed `Square` are always in `0..8`; off-board
/// coordinates are represented by the absence of a square, never by a
/// square holding them.
///
/// Serializes as a `{row, col}` pair. Deserialization rejects coordinates
/// outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = OffBoard;

    fn try_from(raw: RawSquare) -> Result<Self, OffBoard> {
        Square::new(raw.row, raw.col).ok_or(OffBoard {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Square {
    /// Creates a square, or `None` if either coordinate is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square offset by (dr, dc), or `None` if it leaves the
    /// board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parses a square from coordinate notation (e.g. "e2" is row 6,
    /// col 4).
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            b'A'..=b'H' => bytes[0] - b'A',
            _ => return None,
        };
        let row = match bytes[1] {
            b'1'..=b'8' => b'8' - bytes[1],
            _ => return None,
        };
        Some(Square { row, col })
    }

    /// Returns the coordinate notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{}{}", file, rank)
    }

    /// Iterates every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
