//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bloodline/bloodline.toml`
//! 3. Explicit config file passed by the caller
//! 4. Environment variables: `BLOODLINE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::BloodlineError;

/// Conversion year after which a vampire counts as a millennial.
pub const DEFAULT_MILLENNIAL_THRESHOLD: i32 = 1980;

/// Unified configuration for bloodline queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Vampires converted strictly after this year are millennials
    pub millennial_threshold: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            millennial_threshold: DEFAULT_MILLENNIAL_THRESHOLD,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit from base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub millennial_threshold: Option<i32>,
}

/// Get the XDG config directory for bloodline.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bloodline").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bloodline.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, BloodlineError> {
    let content = std::fs::read_to_string(path).map_err(|e| BloodlineError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| BloodlineError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> BloodlineError {
    BloodlineError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            millennial_threshold: overlay
                .millennial_threshold
                .unwrap_or(self.millennial_threshold),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, BloodlineError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current)
    }

    /// Defaults overlaid with a single file, ignoring global config and environment.
    pub fn from_file(path: &Path) -> Result<Self, BloodlineError> {
        let raw = load_raw_settings(path)?;
        Ok(Self::default().merge_with(&raw))
    }

    /// Apply BLOODLINE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, BloodlineError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BLOODLINE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        match config.get_int("millennial_threshold") {
            Ok(val) => {
                settings.millennial_threshold =
                    i32::try_from(val).map_err(|_| BloodlineError::Config {
                        message: format!("millennial_threshold out of range: {}", val),
                    })?;
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_threshold_is_1980() {
        assert_eq!(Settings::default().millennial_threshold, 1980);
    }

    #[test]
    fn given_empty_overlay_when_merging_then_keeps_base() {
        let base = Settings {
            millennial_threshold: 1900,
        };
        let merged = base.merge_with(&RawSettings::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn given_overlay_value_when_merging_then_overlay_wins() {
        let merged = Settings::default().merge_with(&RawSettings {
            millennial_threshold: Some(2000),
        });
        assert_eq!(merged.millennial_threshold, 2000);
    }

    #[test]
    fn given_global_config_path_then_ends_with_toml_file() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("bloodline.toml"));
        }
    }
}
