//! Engine settings loaded from TOML.
//!
//! ```toml
//! search_depth = 3
//! ai_color = "black"
//! tie_break = "first"
//! # seed = 42
//! ```

use std::path::Path;

use chess_core::Color;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    selector::{SearchOptions, TieBreak},
};

/// Environment variable naming the config file the binaries read.
pub const CONFIG_ENV: &str = "ARCADE_CHESS_CONFIG";

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub ai_color: Color,
    pub tie_break: TieBreak,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            ai_color: Color::Black,
            tie_break: TieBreak::First,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Loads the file named by [`CONFIG_ENV`], or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.search_depth) {
            return Err(ConfigError::Invalid(format!(
                "search_depth {} outside {MIN_DEPTH}..={MAX_DEPTH}",
                self.search_depth
            )));
        }
        Ok(())
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            depth: self.search_depth,
            ai_color: self.ai_color,
            tie_break: self.tie_break,
            pruning: true,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
