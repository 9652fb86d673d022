//! Pseudo-legal move generation and the legality filter.

use crate::attacks::is_king_attacked;
use chess_core::{Board, Color, Move, PieceKind, Square};

const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Squares the piece on `from` could move to, ignoring king safety.
///
/// Applies each kind's movement geometry and occupancy rules, then drops
/// same-color captures in one generic pass. Whether the move would leave
/// the mover's own king attacked is the legality filter's concern, not
/// this function's. An empty `from` yields no destinations.
///
/// Destinations come out in a fixed per-kind order, so the result is
/// deterministic for a given board.
pub fn piece_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, piece.color, &mut out),
        PieceKind::Knight => step_destinations(from, &KNIGHT_JUMPS, &mut out),
        PieceKind::King => step_destinations(from, &ALL_DIRECTIONS, &mut out),
        PieceKind::Bishop => sliding_destinations(board, from, &DIAGONALS, &mut out),
        PieceKind::Rook => sliding_destinations(board, from, &ORTHOGONALS, &mut out),
        PieceKind::Queen => sliding_destinations(board, from, &ALL_DIRECTIONS, &mut out),
    }

    // Own-piece captures are illegal for every kind.
    out.retain(|&to| match board.get(to) {
        Some(occupant) => occupant.color != piece.color,
        None => true,
    });
    out
}

/// Pawn pushes need empty squares; the double push additionally needs the
/// start row and an empty intermediate square. Diagonal steps are only
/// generated onto occupied squares (capture geometry).
fn pawn_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.get(one).is_none() {
            out.push(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.get(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc) {
            if board.get(diag).is_some() {
                out.push(diag);
            }
        }
    }
}

/// Walks outward in each direction; every empty square is a destination,
/// the first occupied square is too (capture or not gets filtered later)
/// and ends the walk.
fn sliding_destinations(board: &Board, from: Square, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut sq = from;
        while let Some(next) = sq.offset(dr, dc) {
            out.push(next);
            if board.get(next).is_some() {
                break;
            }
            sq = next;
        }
    }
}

fn step_destinations(from: Square, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            out.push(to);
        }
    }
}

/// Returns true if playing `mv` leaves `mover`'s king unattacked.
///
/// Simulates on a copy; the input board is untouched.
pub(crate) fn leaves_king_safe(board: &Board, mv: Move, mover: Color) -> bool {
    !is_king_attacked(&board.apply(mv), mover)
}

/// Every legal move for `color`: geometric candidates filtered by king
/// safety, pieces scanned in row-major order.
///
/// The ordering is deterministic for a fixed board and color, which keeps
/// search results reproducible.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for to in piece_destinations(board, from) {
            let mv = Move::new(from, to);
            if leaves_king_safe(board, mv, color) {
                moves.push(mv);
            }
        }
    }
    moves
}
