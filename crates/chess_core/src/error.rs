//! Errors raised by the rules engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A move outside the legal set was applied. Moves taken from
    /// `legal_moves` of the same position never trigger this.
    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    #[error("no move to undo")]
    NothingToUndo,

    #[error("cannot parse move '{0}'")]
    InvalidMoveText(String),
}
