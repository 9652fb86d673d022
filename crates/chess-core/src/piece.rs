//! Chess piece representation.

use crate::Color;
use serde::{Deserialize, Serialize, Serializer};

/// The six piece types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece: kind plus owning color. Immutable value.
///
/// Serializes as its display symbol, which is also how board cells travel
/// on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Creates a piece of the given kind and color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Returns the Unicode display symbol for this piece.
    pub const fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '\u{2654}',
            (Color::White, PieceKind::Queen) => '\u{2655}',
            (Color::White, PieceKind::Rook) => '\u{2656}',
            (Color::White, PieceKind::Bishop) => '\u{2657}',
            (Color::White, PieceKind::Knight) => '\u{2658}',
            (Color::White, PieceKind::Pawn) => '\u{2659}',
            (Color::Black, PieceKind::King) => '\u{265A}',
            (Color::Black, PieceKind::Queen) => '\u{265B}',
            (Color::Black, PieceKind::Rook) => '\u{265C}',
            (Color::Black, PieceKind::Bishop) => '\u{265D}',
            (Color::Black, PieceKind::Knight) => '\u{265E}',
            (Color::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }

    /// Looks up a piece from its display symbol.
    ///
    /// Total over all input: anything that is not a piece symbol (an
    /// empty-cell marker included) yields `None`, which callers treat as
    /// "no piece" rather than an error.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        let (kind, color) = match symbol {
            '\u{2654}' => (PieceKind::King, Color::White),
            '\u{2655}' => (PieceKind::Queen, Color::White),
            '\u{2656}' => (PieceKind::Rook, Color::White),
            '\u{2657}' => (PieceKind::Bishop, Color::White),
            '\u{2658}' => (PieceKind::Knight, Color::White),
            '\u{2659}' => (PieceKind::Pawn, Color::White),
            '\u{265A}' => (PieceKind::King, Color::Black),
            '\u{265B}' => (PieceKind::Queen, Color::Black),
            '\u{265C}' => (PieceKind::Rook, Color::Black),
            '\u{265D}' => (PieceKind::Bishop, Color::Black),
            '\u{265E}' => (PieceKind::Knight, Color::Black),
            '\u{265F}' => (PieceKind::Pawn, Color::Black),
            _ => return None,
        };
        Some(Piece { kind, color })
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let symbol = char::deserialize(deserializer)?;
        Piece::from_symbol(symbol).ok_or_else(|| {
            serde::de::Error::custom(format_args!("unknown piece symbol '{}'", symbol))
        })
    }
}
