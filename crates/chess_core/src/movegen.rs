use crate::{board::Position, types::*};

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
/// The position is used as scratch space and is restored before returning.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    for from in 0..64u8 {
        pseudo_moves_from(pos, from, out);
    }
    let mover = pos.side_to_move;
    out.retain(|&mv| !leaves_king_in_check(pos, mv, mover));
}

/// Whether the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(pos: &mut Position) -> bool {
    let mover = pos.side_to_move;
    let mut buf = Vec::with_capacity(32);
    for from in 0..64u8 {
        buf.clear();
        pseudo_moves_from(pos, from, &mut buf);
        if buf.iter().any(|&mv| !leaves_king_in_check(pos, mv, mover)) {
            return true;
        }
    }
    false
}

/// Checks one move against the legal set without generating all of it.
/// Only the moves of the piece on `mv.from` are produced.
pub fn is_legal_move(pos: &mut Position, mv: Move) -> bool {
    let mover = pos.side_to_move;
    let mut buf = Vec::with_capacity(32);
    pseudo_moves_from(pos, mv.from, &mut buf);
    buf.contains(&mv) && !leaves_king_in_check(pos, mv, mover)
}

fn leaves_king_in_check(pos: &mut Position, mv: Move, mover: Color) -> bool {
    let undo = pos.make_move(mv);
    let illegal = pos.in_check(mover);
    pos.unmake_move(mv, undo);
    illegal
}

/// Pseudo-legal moves of the side-to-move piece on `from`, if any.
fn pseudo_moves_from(pos: &Position, from: u8, out: &mut Vec<Move>) {
    let pc = match pos.piece_at(from) {
        Some(p) if p.color == pos.side_to_move => p,
        _ => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
        PieceKind::Knight => gen_steps(pos, from, pc.color, out, &KNIGHT_JUMPS),
        PieceKind::Bishop => gen_slider(pos, from, pc.color, out, &BISHOP_DIRS),
        PieceKind::Rook => gen_slider(pos, from, pc.color, out, &ROOK_DIRS),
        PieceKind::Queen => gen_slider(pos, from, pc.color, out, &QUEEN_DIRS),
        PieceKind::King => {
            gen_steps(pos, from, pc.color, out, &KING_STEPS);
            gen_castle(pos, from, pc.color, out);
        }
    }
}

fn capture(from: u8, to: u8, victim: PieceKind) -> Move {
    Move {
        captured: Some(victim),
        ..Move::new(from, to)
    }
}

fn push_pawn_move(out: &mut Vec<Move>, mv: Move, promo_rank: i8) {
    if rank_of(mv.to) == promo_rank {
        for pk in PieceKind::PROMOTIONS {
            out.push(Move {
                promo: Some(pk),
                ..mv
            });
        }
    } else {
        out.push(mv);
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(out, Move::new(from, to), promo_rank);

        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(victim) if victim.color != c => {
                push_pawn_move(out, capture(from, to, victim.kind), promo_rank);
            }
            None if pos.en_passant == Some(to) => out.push(Move {
                is_en_passant: true,
                ..capture(from, to, PieceKind::Pawn)
            }),
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(capture(from, to, pc.kind)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(capture(from, to, pc.kind));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let (king_from, ks, qs) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != king_from || !(ks || qs) {
        return;
    }
    // Can't castle out of check.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let empty = |squares: &[u8]| squares.iter().all(|&s| pos.piece_at(s).is_none());
    let safe = |squares: &[u8]| squares.iter().all(|&s| !pos.is_square_attacked(s, enemy));
    let rook_home = |s: u8| pos.piece_at(s) == Some(Piece::new(c, PieceKind::Rook));

    // King side: f and g files empty and not attacked.
    if ks
        && rook_home(king_from + 3)
        && empty(&[king_from + 1, king_from + 2])
        && safe(&[king_from + 1, king_from + 2])
    {
        out.push(Move {
            is_castle: true,
            ..Move::new(king_from, king_from + 2)
        });
    }
    // Queen side: b, c and d files empty; only d and c need to be safe.
    if qs
        && rook_home(king_from - 4)
        && empty(&[king_from - 1, king_from - 2, king_from - 3])
        && safe(&[king_from - 1, king_from - 2])
    {
        out.push(Move {
            is_castle: true,
            ..Move::new(king_from, king_from - 2)
        });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
