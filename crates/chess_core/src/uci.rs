use crate::{board::Position, error::RulesError, game::Game, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Parses long algebraic text like `e2e4` or `e7e8q` against the legal moves
/// of `pos`, so castle and en-passant flags come from the generator.
/// A promotion without a piece letter resolves to a queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        Some(c) => Some(PieceKind::from_char(c).filter(|k| PieceKind::PROMOTIONS.contains(k))?),
        None => None,
    };

    legal_moves(pos).into_iter().find(|m| {
        m.from == from
            && m.to == to
            && match m.promo {
                Some(kind) => kind == promo.unwrap_or(PieceKind::Queen),
                // A piece letter on a move that does not promote is malformed.
                None => promo.is_none(),
            }
    })
}

/// Builds a game from the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
pub fn set_position_from_uci(args: &[&str]) -> Result<Game, RulesError> {
    let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
    let (setup, moves) = args.split_at(moves_at);

    let mut game = match setup.first() {
        None | Some(&"startpos") => Game::new(),
        Some(&"fen") => Game::from_fen(&setup[1..].join(" "))?,
        Some(other) => return Err(RulesError::InvalidFen(other.to_string())),
    };

    for txt in moves.iter().skip(1) {
        let mv = parse_uci_move(game.position(), txt)
            .ok_or_else(|| RulesError::InvalidMoveText(txt.to_string()))?;
        game.apply_move(mv)?;
    }
    Ok(game)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
