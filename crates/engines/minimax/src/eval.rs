//! Material plus piece-square evaluation.
//!
//! Scores are centipawns from White's fixed point of view: positive favours
//! White whoever is to move. The search alternates maximizing and minimizing
//! roles instead of negating this value.

use chess_core::{Color, Game, Outcome, PieceKind, Position, mirror_sq};

/// Score of a position where White has been mated is `-MATE_SCORE`.
pub const MATE_SCORE: i32 = 100_000;

/// Any score at least this far from zero is a forced mate. Search pulls mate
/// scores toward zero by one per ply, so this leaves room for deep mates.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// Search window bound. No real position evaluates this high.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

// Piece-square tables are laid out as printed, rank 8 first, from White's
// side of the board. White reads `table[mirror_sq(sq)]`, Black `table[sq]`.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

const TABLES: [&[i32; 64]; 6] = [
    &PAWN_TABLE,
    &KNIGHT_TABLE,
    &BISHOP_TABLE,
    &ROOK_TABLE,
    &QUEEN_TABLE,
    &KING_TABLE,
];

pub fn material_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Piece-square bonus for a `color` piece of `kind` standing on `square`.
pub fn positional_bonus(kind: PieceKind, square: u8, color: Color) -> i32 {
    let index = match color {
        Color::White => mirror_sq(square),
        Color::Black => square,
    };
    TABLES[kind.idx()][index as usize]
}

/// Material and placement sum, ignoring mate and draw.
pub fn static_score(pos: &Position) -> i32 {
    pos.pieces()
        .map(|(sq, pc)| {
            let value = material_value(pc.kind) + positional_bonus(pc.kind, sq, pc.color);
            match pc.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

/// Fixed score of a finished game, `None` while play continues.
pub fn terminal_score(outcome: Option<Outcome>) -> Option<i32> {
    outcome.map(|o| match o {
        Outcome::Checkmate {
            winner: Color::White,
        } => MATE_SCORE,
        Outcome::Checkmate {
            winner: Color::Black,
        } => -MATE_SCORE,
        Outcome::Draw(_) => 0,
    })
}

/// Evaluates the game from White's perspective.
///
/// Returns `-MATE_SCORE` when White is mated, `MATE_SCORE` when Black is,
/// `0` for any draw, and the static score otherwise.
pub fn evaluate(game: &Game) -> i32 {
    terminal_score(game.outcome()).unwrap_or_else(|| static_score(game.position()))
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
