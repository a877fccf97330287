//! Search configuration: which strategy to run and how deep.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chess_core::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ClassicalEngine;

pub const DEFAULT_DEPTH: u8 = 2;

/// Deepest search a config may ask for. The tree grows roughly 30x per ply,
/// so anything past this takes minutes per move.
pub const MAX_DEPTH: u8 = 6;

/// Move-picking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Random,
    Greedy,
    Minimax,
    Negamax,
    #[default]
    NegamaxAlphaBeta,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::Greedy,
        Strategy::Minimax,
        Strategy::Negamax,
        Strategy::NegamaxAlphaBeta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::Minimax => "minimax",
            Strategy::Negamax => "negamax",
            Strategy::NegamaxAlphaBeta => "negamax-alpha-beta",
        }
    }

    /// Builds a boxed engine running this strategy.
    pub fn engine(self) -> Box<dyn Engine> {
        Box::new(ClassicalEngine::new(self))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("search depth {0} is above the maximum of {max}", max = MAX_DEPTH)]
    DepthTooLarge(u8),
    #[error("unknown strategy '{0}' (expected random, greedy, minimax, negamax or negamax-alpha-beta)")]
    UnknownStrategy(String),
}

/// Search settings, loadable from TOML. Missing keys take their defaults.
///
/// ```toml
/// strategy = "greedy"
/// depth = 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Plies searched by the recursive strategies. 0 makes every search
    /// come back empty, so play falls back to a random move.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::DepthTooLarge(self.depth));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
