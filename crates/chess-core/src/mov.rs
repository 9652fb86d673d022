//! Move representation.

use crate::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move of one piece from one square to another.
///
/// A plain from/to pair: the ruleset has no castling, en passant, or
/// promotion, so no extra metadata is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Creates a move between two squares.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Parses a move from coordinate notation (e.g. "e2e4").
    pub fn from_coords(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let (from_part, to_part) = s.split_at(2);
        let from = Square::from_algebraic(from_part)?;
        let to = Square::from_algebraic(to_part)?;
        Some(Move { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
