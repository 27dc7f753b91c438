use std::path::PathBuf;

use crate::game::Player;

/// Errors an agent can raise while choosing a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no more scripted moves for {player}")]
    ScriptExhausted { player: Player },

    #[error("no playable column on the board")]
    NoPlayableColumn,

    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort a running game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{player} chose illegal column {column}")]
    IllegalMove { player: Player, column: usize },

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
