//! End-to-end scenarios driven through the front-end entry points.

use chess_core::{Board, Color, Move, Piece, PieceKind, Square};
use chess_engine::{
    classify, select_ai_move, validate_move, GameResult, MoveOutcome, RejectReason, MATE_SCORE,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn piece(kind: PieceKind, color: Color) -> Piece {
    Piece::new(kind, color)
}

/// Plays a move that must be legal and returns the new board plus the
/// classification for the opponent.
fn play(board: &Board, coords: &str, side: Color) -> (Board, GameResult) {
    let mv = Move::from_coords(coords).unwrap();
    match validate_move(board, mv, side) {
        MoveOutcome::Legal { board, result, .. } => (board, result),
        MoveOutcome::Illegal(reason) => panic!("{} rejected: {}", coords, reason),
    }
}

#[test]
fn fools_mate() {
    let board = Board::starting();

    let (board, result) = play(&board, "f2f3", Color::White);
    assert_eq!(result, GameResult::Ongoing);
    let (board, result) = play(&board, "e7e5", Color::Black);
    assert_eq!(result, GameResult::Ongoing);
    let (board, result) = play(&board, "g2g4", Color::White);
    assert_eq!(result, GameResult::Ongoing);

    // The queen dives to h4 and White, to move, has no answer.
    let (board, result) = play(&board, "d8h4", Color::Black);
    assert_eq!(
        result,
        GameResult::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(
        classify(&board, Color::White),
        GameResult::Checkmate {
            winner: Color::Black
        }
    );
}

#[test]
fn cornered_king_behind_own_pawns_is_stalemate() {
    // Black king walled in by its own stuck pawns, nothing capturable,
    // White nowhere near: zero legal moves without check.
    let mut board = Board::empty();
    board.set(sq(7, 0), Some(piece(PieceKind::King, Color::Black)));
    board.set(sq(7, 1), Some(piece(PieceKind::Pawn, Color::Black)));
    board.set(sq(6, 0), Some(piece(PieceKind::Pawn, Color::Black)));
    board.set(sq(6, 1), Some(piece(PieceKind::Pawn, Color::Black)));
    board.set(sq(0, 7), Some(piece(PieceKind::King, Color::White)));

    assert!(chess_engine::legal_moves(&board, Color::Black).is_empty());
    assert_eq!(classify(&board, Color::Black), GameResult::Stalemate);
    // The other side still has moves.
    assert_eq!(classify(&board, Color::White), GameResult::Ongoing);
}

#[test]
fn no_op_moves_are_illegal_geometry() {
    let board = Board::starting();
    for coords in ["e2e2", "a1a1", "d8d8"] {
        let mv = Move::from_coords(coords).unwrap();
        let side = match board.get(mv.from).map(|p| p.color) {
            Some(color) => color,
            None => Color::White,
        };
        assert_eq!(
            validate_move(&board, mv, side),
            MoveOutcome::Illegal(RejectReason::IllegalGeometry),
            "{} should be rejected",
            coords
        );
    }
}

#[test]
fn own_piece_capture_is_rejected_for_every_kind() {
    // Mover at (4, 4), friendly pawn on a square its geometry reaches.
    let targets = [
        (PieceKind::Pawn, sq(3, 3)),
        (PieceKind::Knight, sq(2, 3)),
        (PieceKind::Bishop, sq(3, 3)),
        (PieceKind::Rook, sq(4, 6)),
        (PieceKind::Queen, sq(4, 6)),
        (PieceKind::King, sq(3, 4)),
    ];
    for (kind, to) in targets {
        let mut board = Board::empty();
        board.set(sq(7, 0), Some(piece(PieceKind::King, Color::White)));
        board.set(sq(0, 7), Some(piece(PieceKind::King, Color::Black)));
        board.set(sq(4, 4), Some(piece(kind, Color::White)));
        board.set(to, Some(piece(PieceKind::Pawn, Color::White)));

        assert_eq!(
            validate_move(&board, Move::new(sq(4, 4), to), Color::White),
            MoveOutcome::Illegal(RejectReason::IllegalGeometry),
            "{} captured its own pawn",
            kind
        );
    }
}

#[test]
fn depth_one_selector_takes_the_only_capture() {
    // A lone white rook with one black pawn in reach: the capture is the
    // only move that changes the material balance.
    let mut board = Board::empty();
    board.set(sq(7, 0), Some(piece(PieceKind::King, Color::White)));
    board.set(sq(3, 3), Some(piece(PieceKind::Rook, Color::White)));
    board.set(sq(3, 6), Some(piece(PieceKind::Pawn, Color::Black)));
    board.set(sq(0, 7), Some(piece(PieceKind::King, Color::Black)));

    let selected = select_ai_move(&board, Color::White, 1).unwrap();
    assert_eq!(selected.mv, Move::new(sq(3, 3), sq(3, 6)));
    assert_eq!(selected.board.get(sq(3, 6)), Some(piece(PieceKind::Rook, Color::White)));
}

#[test]
fn selector_finds_mate_in_one() {
    // Rook to the back row delivers mate with the kings in opposition.
    let mut board = Board::empty();
    board.set(sq(0, 7), Some(piece(PieceKind::King, Color::Black)));
    board.set(sq(2, 6), Some(piece(PieceKind::King, Color::White)));
    board.set(sq(7, 0), Some(piece(PieceKind::Rook, Color::White)));

    let selected = select_ai_move(&board, Color::White, 2).unwrap();
    assert_eq!(selected.mv, Move::new(sq(7, 0), sq(0, 0)));
    assert_eq!(selected.score, MATE_SCORE);
    assert_eq!(
        classify(&selected.board, Color::Black),
        GameResult::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn validation_is_pure() {
    // Querying and validating never mutates the caller's board.
    let board = Board::starting();
    let snapshot = board;
    let _ = validate_move(&board, Move::from_coords("e2e4").unwrap(), Color::White);
    let _ = validate_move(&board, Move::from_coords("e2e5").unwrap(), Color::White);
    let _ = chess_engine::legal_moves(&board, Color::White);
    let _ = select_ai_move(&board, Color::White, 2);
    assert_eq!(board, snapshot);
}

#[test]
fn ai_versus_ai_stays_legal() {
    // A short self-play run: every selected move must validate through
    // the same entry point a front end would use.
    let mut board = Board::starting();
    let mut side = Color::White;
    for _ in 0..10 {
        let selected = match select_ai_move(&board, side, 2) {
            Ok(selected) => selected,
            Err(_) => break,
        };
        match validate_move(&board, selected.mv, side) {
            MoveOutcome::Legal { board: next, .. } => {
                assert_eq!(next, selected.board);
                board = next;
            }
            MoveOutcome::Illegal(reason) => {
                panic!("AI played {}, rejected: {}", selected.mv, reason)
            }
        }
        side = side.opposite();
    }
}
