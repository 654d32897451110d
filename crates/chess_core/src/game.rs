//! Rules-engine facade used by searchers and game drivers.
//!
//! A [`Game`] owns a [`Position`] together with the undo stack and the hash
//! history needed for threefold repetition. Moves go in through
//! [`Game::apply_move`], which rejects anything outside the legal set, and
//! come back out through [`Game::undo_last_move`].

use crate::{
    board::{Position, Undo},
    error::RulesError,
    movegen::{has_legal_move, is_legal_move, legal_moves_into},
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Draw(DrawReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    position: Position,
    undo_stack: Vec<(Move, Undo)>,
    /// Hash of every position reached, current one last.
    hash_history: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(position: Position) -> Self {
        let hash = position.position_hash();
        Self {
            position,
            undo_stack: Vec::new(),
            hash_history: vec![hash],
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.position.pieces()
    }

    /// Moves played since this game was created, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.undo_stack.iter().map(|(mv, _)| *mv)
    }

    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(&mut out);
        out
    }

    pub fn legal_moves_into(&self, out: &mut Vec<Move>) {
        let mut scratch = self.position.clone();
        legal_moves_into(&mut scratch, out);
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        let mut scratch = self.position.clone();
        is_legal_move(&mut scratch, mv)
    }

    /// Plays a legal move in place.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), RulesError> {
        if !is_legal_move(&mut self.position, mv) {
            return Err(RulesError::IllegalMove {
                mv: mv.to_string(),
                fen: self.position.to_fen(),
            });
        }
        let undo = self.position.make_move(mv);
        self.undo_stack.push((mv, undo));
        self.hash_history.push(self.position.position_hash());
        Ok(())
    }

    /// Takes back the most recent move and returns it.
    pub fn undo_last_move(&mut self) -> Result<Move, RulesError> {
        let (mv, undo) = self.undo_stack.pop().ok_or(RulesError::NothingToUndo)?;
        self.position.unmake_move(mv, undo);
        self.hash_history.pop();
        Ok(mv)
    }

    pub fn is_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move)
    }

    fn has_moves(&self) -> bool {
        let mut scratch = self.position.clone();
        has_legal_move(&mut scratch)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_moves()
    }

    /// Occurrences of the current position in this game's history.
    pub fn repetition_count(&self) -> usize {
        let current = self.hash_history.last().copied();
        self.hash_history
            .iter()
            .filter(|&&h| Some(h) == current)
            .count()
    }

    /// Checkmate takes precedence over every draw rule. Move generation runs
    /// once and stops at the first legal move.
    pub fn outcome(&self) -> Option<Outcome> {
        let draw = if self.position.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.position.is_fifty_move_draw() {
            Some(DrawReason::FiftyMoveRule)
        } else if self.repetition_count() >= 3 {
            Some(DrawReason::ThreefoldRepetition)
        } else {
            None
        };
        if self.has_moves() {
            return draw.map(Outcome::Draw);
        }
        if self.is_check() {
            Some(Outcome::Checkmate {
                winner: self.side_to_move().other(),
            })
        } else {
            Some(Outcome::Draw(draw.unwrap_or(DrawReason::Stalemate)))
        }
    }

    pub fn draw_reason(&self) -> Option<DrawReason> {
        match self.outcome() {
            Some(Outcome::Draw(reason)) => Some(reason),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
