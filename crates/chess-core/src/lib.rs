//! Core types for the GameHub chess service.
//!
//! This crate provides the board model shared by every front end:
//! - [`Piece`], [`PieceKind`], and [`Color`] for piece identity
//! - [`Square`] for zero-based (row, col) coordinates
//! - [`Move`] for plain from/to move pairs
//! - [`Board`], an 8x8 grid of optional pieces with value semantics
//!
//! The serde implementations produce the shapes front ends exchange: a
//! board is an 8x8 array of nullable piece symbols, a square is a
//! `{row, col}` pair with row 0 on Black's side, and a color is the
//! string `"white"` or `"black"`.

mod board;
mod color;
mod mov;
mod piece;
mod square;

pub use board::{Board, BoardError};
pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{OffBoard, Square};
