//! Game configuration loaded from TOML.
//!
//! ```toml
//! first_turn = "red"
//! layout = """
//! .r.r.r.r
//! r.r.r.r.
//! .r.r.r.r
//! ........
//! ........
//! w.w.w.w.
//! .w.w.w.w
//! w.w.w.w.
//! """
//! ```

use checkers_core::{Color, Layout, LayoutError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or applying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not valid TOML or has fields of the wrong type.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configured starting layout is malformed.
    #[error("invalid starting layout: {0}")]
    Layout(#[from] LayoutError),
}

/// How a game starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    /// Color that makes the first move. Defaults to white.
    #[serde(default = "default_first_turn")]
    pub first_turn: Color,
    /// Custom starting layout in diagram form. Defaults to the standard
    /// opening layout.
    #[serde(default)]
    pub layout: Option<String>,
}

fn default_first_turn() -> Color {
    Color::White
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_turn: default_first_turn(),
            layout: None,
        }
    }
}

impl GameConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        // Surface layout errors at load time rather than at game start.
        config.starting_layout()?;
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The layout the game starts from.
    pub fn starting_layout(&self) -> Result<Layout, LayoutError> {
        match &self.layout {
            Some(text) => Layout::parse(text),
            None => Ok(Layout::standard()),
        }
    }
}
