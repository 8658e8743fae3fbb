//! Configuration loading
//!
//! The config file lives at `~/.config/tripmind/config.toml`. A missing file
//! means defaults; a malformed one means defaults plus a warning for the
//! status line.

use std::fs;
use std::path::{Path, PathBuf};

mod types;

pub use types::{CatalogConfig, Config, ProviderConfig, SuggestConfig};

use crate::error::TripmindError;

const CONFIG_DIR: &str = "tripmind";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning to show the user
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `path`, or the default location when None
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                return ConfigResult {
                    config: Config::default(),
                    warning: None,
                };
            }
        },
    };

    match read_config(&path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult {
            config: Config::default(),
            warning: None,
        },
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} (using defaults)", e)),
            }
        }
    }
}

/// Ok(None) when the file does not exist
fn read_config(path: &Path) -> Result<Option<Config>, TripmindError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents).map(Some)
}

pub fn parse_config(content: &str) -> Result<Config, TripmindError> {
    toml::from_str(content).map_err(|e| TripmindError::ConfigParse(e.message().to_string()))
}
