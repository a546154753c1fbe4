//! Configuration management with layered loading
//!
//! Settings only tune ambient behaviour (log verbosity, coloured diagnostics);
//! the report itself is fixed.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/circle-area/circle-area.toml`
//! 3. Environment variables: `CIRCLE_AREA_*` prefix
//! 4. Command line flags (applied by the caller)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::application::ApplicationError;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "CIRCLE_AREA";

/// Unified configuration for circle-area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Log verbosity on stderr: 0=warn, 1=info, 2=debug, 3=trace
    pub verbosity: u8,
    /// Colour error and warning prefixes
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbosity: 0,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub verbosity: Option<u8>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for circle-area.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "circle-area").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("circle-area.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            verbosity: overlay.verbosity.unwrap_or(self.verbosity),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `global_path` - Config file to read; skipped when `None` or missing
    ///
    /// # Errors
    /// [`ApplicationError::Config`] if the file cannot be read or parsed, or an
    /// environment override is out of range.
    pub fn load(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config file
        if let Some(path) = global_path {
            if path.exists() {
                info!("Loading config from {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            } else {
                debug!("No config file at {}", path.display());
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Load settings from the XDG location.
    pub fn load_default() -> Result<Self, ApplicationError> {
        Self::load(global_config_path().as_deref())
    }

    /// Apply CIRCLE_AREA_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_int("verbosity") {
            settings.verbosity = u8::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("{ENV_PREFIX}_VERBOSITY out of range: {val}"),
            })?;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
