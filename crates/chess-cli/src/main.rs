//! Terminal front end for the GameHub chess service.
//!
//! Holds one session's state locally and drives the same validation and
//! move-selection entry points a network front end would call. The human
//! plays White; Black is the minimax opponent by default, one of the
//! casual difficulties with `--easy`/`--medium`/`--hard`, or a second
//! human with `--friend`.

use chess_core::{Board, Color, Move};
use chess_engine::{
    is_king_attacked, select_ai_move, select_casual_move, validate_move, Difficulty, GameResult,
    MoveOutcome, DEFAULT_DEPTH,
};
use std::io::{self, BufRead, Write};

/// Who answers for Black.
enum Opponent {
    /// Deterministic minimax at a fixed depth.
    Minimax { depth: u8 },
    /// Randomized casual strategy.
    Casual(Difficulty),
    /// A second human on the same terminal.
    Friend,
}

/// One game session: board, side to move, and whether play has ended.
struct Session {
    board: Board,
    to_move: Color,
    over: bool,
}

impl Session {
    fn new() -> Self {
        Session {
            board: Board::starting(),
            to_move: Color::White,
            over: false,
        }
    }
}

fn parse_args() -> Result<Opponent, String> {
    let mut opponent = Opponent::Minimax {
        depth: DEFAULT_DEPTH,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--easy" => opponent = Opponent::Casual(Difficulty::Easy),
            "--medium" => opponent = Opponent::Casual(Difficulty::Medium),
            "--hard" => opponent = Opponent::Casual(Difficulty::Hard),
            "--friend" => opponent = Opponent::Friend,
            "--depth" => {
                let value = args.next().ok_or("--depth needs a value")?;
                let depth: u8 = value
                    .parse()
                    .map_err(|_| format!("bad depth: {}", value))?;
                opponent = Opponent::Minimax {
                    depth: depth.max(1),
                };
            }
            other => return Err(format!("unknown option: {}", other)),
        }
    }
    Ok(opponent)
}

/// Applies a move through the validation entry point, announcing a
/// terminal result. Returns false when the move is rejected.
fn try_move(session: &mut Session, mv: Move) -> bool {
    match validate_move(&session.board, mv, session.to_move) {
        MoveOutcome::Legal {
            board,
            next_to_move,
            result,
        } => {
            session.board = board;
            session.to_move = next_to_move;
            match result {
                GameResult::Ongoing => {}
                GameResult::Checkmate { winner } => {
                    println!("checkmate: {} wins", winner);
                    session.over = true;
                }
                GameResult::Stalemate => {
                    println!("draw by stalemate");
                    session.over = true;
                }
            }
            true
        }
        MoveOutcome::Illegal(reason) => {
            eprintln!("illegal move: {}", reason);
            false
        }
    }
}

fn opponent_reply(session: &Session, opponent: &Opponent) -> Option<Move> {
    match opponent {
        Opponent::Minimax { depth } => select_ai_move(&session.board, session.to_move, *depth)
            .ok()
            .map(|selected| selected.mv),
        Opponent::Casual(difficulty) => select_casual_move(
            &session.board,
            session.to_move,
            *difficulty,
            &mut rand::thread_rng(),
        ),
        Opponent::Friend => None,
    }
}

fn announce_turn(session: &Session) {
    if is_king_attacked(&session.board, session.to_move) {
        println!("{} to move (check!)", session.to_move);
    } else {
        println!("{} to move", session.to_move);
    }
}

fn main() {
    let opponent = match parse_args() {
        Ok(opponent) => opponent,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: chess-cli [--friend | --easy | --medium | --hard | --depth N]");
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::new();

    println!("{}", session.board);
    announce_turn(&session);

    while !session.over {
        print!("{}> ", session.to_move);
        io::stdout().flush().unwrap();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error reading input: {}", e);
                continue;
            }
            None => break,
        };
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => break,
            "board" => {
                println!("{}", session.board);
                continue;
            }
            _ => {}
        }

        let Some(mv) = Move::from_coords(input) else {
            eprintln!("moves look like e2e4 (also: board, quit)");
            continue;
        };
        if !try_move(&mut session, mv) {
            continue;
        }
        println!("{}", session.board);
        if session.over {
            break;
        }

        if !matches!(opponent, Opponent::Friend) {
            // validate_move said Ongoing, so a reply must exist.
            match opponent_reply(&session, &opponent) {
                Some(reply) => {
                    println!("{} plays {}", session.to_move, reply);
                    try_move(&mut session, reply);
                    println!("{}", session.board);
                }
                None => {
                    eprintln!("opponent found no move in an ongoing position");
                    break;
                }
            }
        }
        if !session.over {
            announce_turn(&session);
        }
    }
}
