//! Configuration module for renamr
//!
//! Persistent defaults for the command line. Configuration is stored in the
//! user's config directory as `renamr/config.toml` and can be overridden
//! with `RENAMR_*` environment variables (for example `RENAMR_QUIET=true`).

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::pattern::{DEFAULT_PATTERN, Pattern, PatternError};
use crate::session::CommitStrategy;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RenamrConfig {
    /// Pattern a session starts with when `-p` is not given
    #[serde(default = "default_pattern")]
    pub default_pattern: String,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// How confirmed renames are applied
    #[serde(default)]
    pub commit: CommitStrategy,

    /// Ask before renaming in interactive mode
    #[serde(default = "default_confirm")]
    pub confirm: bool,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

const fn default_confirm() -> bool {
    true
}

impl Default for RenamrConfig {
    fn default() -> Self {
        Self {
            default_pattern: default_pattern(),
            quiet: false,
            commit: CommitStrategy::default(),
            confirm: default_confirm(),
        }
    }
}

impl RenamrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("renamr").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there first if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
            tracing::debug!(path = %path.display(), "wrote default configuration");
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("RENAMR").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Compile the configured default pattern
    ///
    /// # Errors
    ///
    /// Returns `PatternError` if `default_pattern` has an unclosed brace.
    pub fn pattern(&self) -> Result<Pattern, PatternError> {
        self.default_pattern.parse()
    }
}
