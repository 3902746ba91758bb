//! Configuration management

use crate::domain::CalendarSystem;
use crate::error::{Result, TypikonError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file name looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "typikon.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "TYPIKON_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Calendar system used when none is given on the command line
    pub calendar: CalendarSystem,
    /// Topic codes resolved by `typikon topic` when none are given
    pub topics: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            calendar: CalendarSystem::default(),
            topics: vec![
                "oc".to_string(),
                "eo".to_string(),
                "le.go.lu".to_string(),
                "le.go.mc".to_string(),
                "me".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TypikonError::ConfigNotFound(path.to_path_buf())
            } else {
                TypikonError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            TypikonError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Find and load the config.
    ///
    /// Lookup order: `explicit` path, the `TYPIKON_CONFIG` environment
    /// variable, `typikon.toml` in `cwd`, then built-in defaults. Only the
    /// last fallback tolerates a missing file.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config from --config");
            return Self::load_from_file(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(env_path);
            debug!(path = %path.display(), "loading config from {}", CONFIG_ENV_VAR);
            return Self::load_from_file(&path);
        }

        let local = cwd.join(CONFIG_FILE_NAME);
        if local.is_file() {
            debug!(path = %local.display(), "loading config from working directory");
            return Self::load_from_file(&local);
        }

        debug!("no config file found, using defaults");
        Ok(Config::default())
    }
}
