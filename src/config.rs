//! Optional user settings read from `config.toml` in the platform config
//! directory. A missing file means defaults; a broken one is reported.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::Theme;

/// Environment variable pointing at an alternate settings file.
pub const CONFIG_ENV: &str = "HEALTH_HUB_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Theme the session starts with.
    pub theme: Theme,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Terminals narrower than this use the compact navigation menu.
    pub compact_width: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            log_level: "info".to_string(),
            compact_width: 80,
        }
    }
}

impl Settings {
    /// Load from `$HEALTH_HUB_CONFIG` or the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = match env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => default_config_path()?,
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.compact_width == 0 {
            return Err(ConfigError::InvalidCompactWidth);
        }
        Ok(())
    }
}

pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "health-hub")
}

fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dirs = project_dirs().ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "theme = \"dark\"\n");
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.compact_width, 80);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "theme = \"sepia\"\n");
        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_compact_width_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "compact_width = 0\n");
        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCompactWidth));
    }
}
