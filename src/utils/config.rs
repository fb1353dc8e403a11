use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Roster configuration - immutable after load
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_rate_hz: u32,
    pub max_players: usize,
    pub party_mode: String,
    pub map: String,
    pub rng_seed: Option<u64>,
    pub local_player_name: String,
    pub bot_names: Vec<String>,
    pub log_level: String,
    pub log_file: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown party mode '{0}'")]
    UnknownPartyMode(String),
    #[error("unknown map '{0}'")]
    UnknownMap(String),
    #[error("max_players must be at least 1")]
    NoSlots,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60, // one tick per frame
            max_players: 6,
            party_mode: "competitive".to_string(),
            map: "dust2".to_string(),
            rng_seed: None,
            local_player_name: "Player".to_string(),
            bot_names: [
                "Vesna", "Odin", "Harlan", "Mika", "Tavish", "Ines", "Rook", "Delia", "Kasimir",
                "Yara",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON config file; missing fields fall back to defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(raw)?;
        if config.max_players == 0 {
            return Err(ConfigError::NoSlots);
        }
        Ok(config)
    }

    pub fn tick_interval_ms(&self) -> u64 {
        1000 / self.tick_rate_hz.max(1) as u64
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
