use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

const APP_DIR: &str = "calc";
const CONFIG_ENV: &str = "CALC_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where finished calculations are appended, one JSON object per line.
    pub history_file: PathBuf,
    /// Line editor history (the raw key lines typed at the prompt).
    pub readline_history: PathBuf,
    pub colors: bool,
    pub prompt: String,
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

impl Default for Config {
    fn default() -> Self {
        let dir = data_dir();
        Self {
            history_file: dir.join("history.jsonl"),
            readline_history: dir.join("readline_history"),
            colors: true,
            prompt: ">".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Could not read {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => write!(f, "Invalid config {}: {}", path.display(), e),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml")))
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(ConfigError::Io(path.to_path_buf(), e)),
    };

    toml::from_str(&text).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}
