//! Configuration loading
//!
//! Reads `~/.config/autocountry/config.toml`. A missing file is not an error;
//! an unreadable or invalid file falls back to defaults and reports a warning
//! for the footer instead of aborting startup.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

mod types;

pub use types::{
    ApiConfig, Config, DEFAULT_API_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_TIMEOUT_SECS, SearchConfig,
};

const CONFIG_DIR: &str = "autocountry";
const CONFIG_FILE: &str = "config.toml";

/// A loaded configuration plus an optional warning to surface to the user
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn fallback(warning: String) -> Self {
        log::warn!("{}", warning);
        Self {
            config: Config::default(),
            warning: Some(warning),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            return ConfigResult::fallback(format!(
                "Could not read {}: {}",
                path.display(),
                e
            ));
        }
    };

    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> ConfigResult {
    let config = match toml::from_str::<Config>(contents) {
        Ok(config) => config,
        Err(e) => {
            return ConfigResult::fallback(format!(
                "Invalid config, using defaults: {}",
                e.message()
            ));
        }
    };

    if let Err(e) = config.api.validate() {
        return ConfigResult::fallback(format!("{}; using defaults", e));
    }

    ConfigResult {
        config,
        warning: None,
    }
}
