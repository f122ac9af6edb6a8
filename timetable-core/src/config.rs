//! Timetable configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{TimetableError, TimetableResult};
use crate::ics::DEFAULT_FILENAME;

/// Environment variable overriding `api_url`.
pub const ENV_API_URL: &str = "TIMETABLE_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_FILENAME)
}

/// Configuration at ~/.config/timetable/config.toml
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimetableConfig {
    /// Schedule store endpoint
    pub api_url: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Where `export` writes the .ics file
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        TimetableConfig {
            api_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            export_path: default_export_path(),
        }
    }
}

impl TimetableConfig {
    pub fn config_path() -> TimetableResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimetableError::Config("Could not determine config directory".into()))?
            .join("timetable");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (defaults when absent), then apply
    /// `TIMETABLE_API_URL` from the environment.
    pub fn load() -> TimetableResult<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        if let Ok(url) = std::env::var(ENV_API_URL)
            && !url.trim().is_empty()
        {
            config.api_url = Some(url);
        }

        Ok(config)
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> TimetableResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TimetableError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| TimetableError::Config(format!("Could not parse {}: {e}", path.display())))
    }

    /// The store endpoint, or a config error explaining how to set one.
    pub fn api_url(&self) -> TimetableResult<&str> {
        self.api_url.as_deref().ok_or_else(|| {
            TimetableError::Config(format!(
                "No schedule API configured.\n\
                Set api_url in config.toml, export {ENV_API_URL}, or pass --api-url"
            ))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Export path with a leading `~` expanded.
    pub fn export_path(&self) -> PathBuf {
        expand_path(&self.export_path)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TimetableResult<()> {
        let contents = format!(
            "\
# timetable configuration

# Schedule store endpoint:
# api_url = \"https://example.com/api/schedule\"

# Request timeout in seconds:
# timeout_secs = {DEFAULT_TIMEOUT_SECS}

# Where `timetable export` writes the calendar file:
# export_path = \"{DEFAULT_FILENAME}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimetableError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TimetableError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Expand `~` in paths to the home directory.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
