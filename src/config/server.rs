/// Server configuration.
///
/// Values are read from the environment, falling back to local defaults.
use std::env;
use std::fs;

use log::{info, warn};

use crate::config::game::GameSettings;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the HTTP/WebSocket server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub settings: GameSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            settings: GameSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Build the configuration from `MAZE_HOST`, `MAZE_PORT` and `MAZE_SETTINGS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("MAZE_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }

        if let Ok(port) = env::var("MAZE_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => warn!("[Config] Ignoring invalid MAZE_PORT '{}': {}", port, e),
            }
        }

        if let Ok(path) = env::var("MAZE_SETTINGS") {
            config.settings = load_settings(&path);
        }

        config
    }
}

/// Load gameplay settings from a JSON file, falling back to the defaults.
pub fn load_settings(path: &str) -> GameSettings {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("[Config] Cannot read settings file '{}': {}", path, e);
            return GameSettings::default();
        }
    };
    match parse_settings(&text) {
        Ok(settings) => {
            info!("[Config] Loaded game settings from '{}'", path);
            settings
        }
        Err(e) => {
            warn!("[Config] Invalid settings file '{}': {}", path, e);
            GameSettings::default()
        }
    }
}

/// Parse a JSON settings document. Missing fields keep their defaults.
pub fn parse_settings(text: &str) -> Result<GameSettings, serde_json::Error> {
    serde_json::from_str(text)
}
