use std::path::Path;

use crate::error::ConfigError;

/// Which strategy fills a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    Random,
    Human,
    /// Minimax with the all-zero heuristic (pure lookahead).
    Minimax,
    MinimaxRandom,
    MinimaxRings,
    MinimaxWindow,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 7,
            height: 6,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Ply depth for the minimax agents.
    pub ply_depth: u32,
    /// Per-ply score discount; must be in (0, 1].
    pub decay: f64,
    /// Ring count for the neighbor-ring heuristic.
    pub rings: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            ply_depth: 5,
            decay: 0.95,
            rings: 2,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games in the series.
    pub games: usize,
    /// Base seed; game `g` reseeds every agent with `seed + g`.
    pub seed: u64,
    pub red: AgentKind,
    pub yellow: AgentKind,
    /// Print the board after every committed move.
    pub show_moves: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 1,
            seed: 0,
            red: AgentKind::MinimaxWindow,
            yellow: AgentKind::Random,
            show_moves: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width < 4 {
            return Err(ConfigError::Validation("board.width must be >= 4".into()));
        }
        if self.board.height < 4 {
            return Err(ConfigError::Validation("board.height must be >= 4".into()));
        }
        if self.search.decay <= 0.0 || self.search.decay > 1.0 {
            return Err(ConfigError::Validation(
                "search.decay must be in (0, 1]".into(),
            ));
        }
        if self.search.rings == 0 {
            return Err(ConfigError::Validation("search.rings must be >= 1".into()));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be >= 1".into()));
        }
        if self.arena.games > 1
            && (self.arena.red == AgentKind::Human || self.arena.yellow == AgentKind::Human)
        {
            return Err(ConfigError::Validation(
                "human agents cannot play multi-game series".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
