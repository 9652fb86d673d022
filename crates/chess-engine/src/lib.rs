//! Rules engine for the GameHub chess service.
//!
//! One authoritative implementation of the rules, shared by every front
//! end whether the caller is a request handler or a local session:
//! - per-piece pseudo-legal move generation ([`piece_destinations`])
//! - attack detection ([`is_square_attacked`], [`is_king_attacked`])
//! - the legality filter ([`legal_moves`])
//! - terminal-state classification ([`classify`])
//! - minimax move selection for the automated opponent
//!   ([`select_ai_move`]), plus the randomized casual strategies
//!   ([`select_casual_move`])
//!
//! The ruleset is deliberately simplified and matches the service's
//! observed behavior: there is no castling, no en passant, and no pawn
//! promotion. Completing those rules would change move sets front ends
//! already rely on, so they stay out until the service grows them.
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Color, Move};
//! use chess_engine::{validate_move, MoveOutcome};
//!
//! let board = Board::starting();
//! let mv = Move::from_coords("e2e4").unwrap();
//! match validate_move(&board, mv, Color::White) {
//!     MoveOutcome::Legal { next_to_move, .. } => assert_eq!(next_to_move, Color::Black),
//!     MoveOutcome::Illegal(reason) => panic!("unexpected rejection: {}", reason),
//! }
//! ```

mod attacks;
mod eval;
mod movegen;
mod rules;
mod search;
mod strategy;
mod validate;

pub use attacks::{can_reach, is_king_attacked, is_square_attacked};
pub use eval::{evaluate, piece_value};
pub use movegen::{legal_moves, piece_destinations};
pub use rules::{classify, GameResult};
pub use search::{minimax, select_ai_move, NoMoveAvailable, SelectedMove, DEFAULT_DEPTH, MATE_SCORE};
pub use strategy::{select_casual_move, Difficulty};
pub use validate::{validate_move, MoveOutcome, RejectReason};
