//! Application configuration.
//!
//! Configuration is read from a YAML file and controls:
//! - Whether new stores start with the sample tickets
//! - The prefix used for ticket ids
//! - Line-editor history in the interactive session
//!
//! The file is located from `--config`, then `HELPDESK_CONFIG`, then the
//! platform config directory. A missing file means defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HelpdeskError, Result};
use crate::types::DEFAULT_ID_PREFIX;
use crate::utils::validate_prefix;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "HELPDESK_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed every new store with the sample tickets (default: true)
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    /// Ticket id prefix (default: HD)
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Keep line-editor history during a session (default: true)
    #[serde(default = "default_true")]
    pub history: bool,
}

fn default_true() -> bool {
    true
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_sample_data: default_true(),
            id_prefix: default_id_prefix(),
            history: default_true(),
        }
    }
}

impl Config {
    /// Default config file path in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "helpdesk", "helpdesk")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Resolve which file to read: explicit path, then env var, then default
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        match env::var_os(CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
            _ => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::resolve_path(explicit) else {
            tracing::debug!("no config directory available, using defaults");
            return Ok(Config::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        Self::from_file(&path)
    }

    /// Read and validate a specific config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            HelpdeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse YAML config content. Empty content yields defaults.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml_ng::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        validate_prefix(&self.id_prefix)
            .map_err(|e| HelpdeskError::Config(format!("id_prefix: {e}")))
    }
}
