//! Shared plumbing for the `uci_engine` and `play` binaries.

use chess_core::Color;
use minimax_engine::{EngineConfig, mate_distance};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only protocol or game output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config from `ARCADE_CHESS_CONFIG`, or the defaults.
pub fn load_config() -> anyhow::Result<EngineConfig> {
    let config = EngineConfig::from_env()?;
    tracing::info!(?config, "engine config");
    Ok(config)
}

/// Splits human move text like `e2e4`, `e2-e4` or `e2 e4` into two squares.
pub fn split_move_text(text: &str) -> Option<(String, String)> {
    let squares: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if squares.len() != 4 || !squares.is_ascii() {
        return None;
    }
    Some((squares[..2].to_string(), squares[2..].to_string()))
}

/// UCI `score` field for a White-positive search score, seen from `mover`.
/// Forced mates are reported in full moves, negative when `mover` is mated.
pub fn uci_score(score: i32, mover: Color) -> String {
    let own = match mover {
        Color::White => score,
        Color::Black => -score,
    };
    match mate_distance(own) {
        Some(plies) => {
            let moves = plies.div_ceil(2) as i32;
            format!("mate {}", if own > 0 { moves } else { -moves })
        }
        None => format!("cp {own}"),
    }
}
