//! User settings for the terminal front end.
//!
//! Settings are read from `settings.toml` in the platform config directory,
//! or from the path given with `--config`. A missing file yields defaults.

use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use regform_core::FormOptions;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Form behavior.
    pub form: FormOptions,

    /// Display settings.
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Show passwords as `*` in rendered forms and printed registrations.
    pub mask_password: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            mask_password: true,
        }
    }
}

impl Settings {
    /// Default settings location, if the platform has a config directory.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "regform").map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load from `path`, or from the default location when `path` is None.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::config_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load settings from a specific path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform_core::ValidationMode;

    #[test]
    fn test_parse_partial_settings() {
        let settings: Settings = toml::from_str(
            r#"
            [form]
            validation_mode = "on-change"
            "#,
        )
        .unwrap();
        assert_eq!(settings.form.validation_mode, ValidationMode::OnChange);
        assert!(!settings.form.show_location_section);
        assert!(settings.display.mask_password);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("regform-settings-does-not-exist.toml");
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }
}
