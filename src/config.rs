//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_STORAGE_DIR: &str = ".workouts";
const DEFAULT_MAP_ZOOM_LEVEL: u8 = 13;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the key-value store files
    pub storage_dir: PathBuf,
    /// Zoom level used when centering the map on a position or workout
    pub map_zoom_level: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            map_zoom_level: DEFAULT_MAP_ZOOM_LEVEL,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage_dir = env::var("WORKOUTS_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR));

        let map_zoom_level = match env::var("MAP_ZOOM_LEVEL") {
            Ok(raw) => parse_zoom(&raw)?,
            Err(_) => DEFAULT_MAP_ZOOM_LEVEL,
        };

        Ok(Self {
            storage_dir,
            map_zoom_level,
        })
    }
}

/// Map tile servers go up to zoom 19.
fn parse_zoom(raw: &str) -> Result<u8, ConfigError> {
    match raw.trim().parse::<u8>() {
        Ok(zoom) if zoom <= 19 => Ok(zoom),
        _ => Err(ConfigError::Invalid {
            name: "MAP_ZOOM_LEVEL",
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
