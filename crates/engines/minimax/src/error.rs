use std::path::PathBuf;

use chess_core::RulesError;
use thiserror::Error;

use crate::session::TurnState;

/// Failures of a human-vs-engine game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("it is not {0}'s turn")]
    NotYourTurn(chess_core::Color),

    #[error("the game is already over")]
    GameOver,

    #[error("cannot {event} while the turn is {state:?}")]
    InvalidTransition {
        state: TurnState,
        event: &'static str,
    },

    #[error("'{0}' is not a square")]
    InvalidSquare(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
