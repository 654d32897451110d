//! Chess rules engine: board representation, FEN, legal move generation,
//! make/undo, and checkmate and draw classification.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;
pub mod zobrist;

pub use board::*;
pub use error::RulesError;
pub use game::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait: implemented by move-choosing opponents
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in centipawns, positive favours White
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait for anything that picks a move for the side to move.
pub trait Engine: Send {
    /// Search `game` to a fixed depth. The game is left untouched.
    ///
    /// # Errors
    /// Propagates rules-engine failures raised while walking the tree.
    fn search(&mut self, game: &Game, depth: u8) -> Result<SearchResult, RulesError>;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "arcade-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
