use crate::{Error, Result};
use langcat_types::expand_tilde;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Catalog file used when nothing else names one
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Environment variable naming the catalog file
pub const DATA_ENV_VAR: &str = "LANGCAT_DATA";

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "LANGCAT_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LANGCAT_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.langcat/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("langcat").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".langcat").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Resolve the catalog path based on priority:
/// 1. Explicit path (--data flag)
/// 2. LANGCAT_DATA environment variable
/// 3. `data_path` from the config file
/// 4. `data.json` in the current directory
pub fn resolve_data_path(explicit_path: Option<&str>, config: &Config) -> PathBuf {
    let env_path = std::env::var(DATA_ENV_VAR).ok();
    select_data_path(explicit_path, env_path.as_deref(), config)
}

fn select_data_path(explicit_path: Option<&str>, env_path: Option<&str>, config: &Config) -> PathBuf {
    if let Some(path) = explicit_path.or(env_path) {
        return expand_tilde(path);
    }

    match &config.data_path {
        Some(path) => expand_tilde(&path.to_string_lossy()),
        None => PathBuf::from(DEFAULT_DATA_FILE),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file to load
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// Quiet period before a typed query is applied
    pub search_debounce_ms: u64,

    /// Minimum time skeleton cards stay on screen after a successful load
    pub load_delay_ms: u64,

    /// Number of skeleton cards painted while loading
    pub skeleton_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            search_debounce_ms: 300,
            load_delay_ms: 500,
            skeleton_count: 9,
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}
