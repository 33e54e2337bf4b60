use crate::error::{ConfigError, StorageError};
use crate::map_io_error;
use crate::utils::error_helpers::display_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// CLI settings persisted as TOML.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub verbose: bool,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let settings_path = match path {
            Some(p) => p,
            None => Self::settings_file_path()?,
        };

        if !settings_path.exists() {
            return Ok(Self::default());
        }

        let content = map_io_error!(fs::read_to_string(&settings_path), &settings_path)?;

        let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: display_path(&settings_path),
            message: e.to_string(),
        })?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let settings_path = match path {
            Some(p) => p,
            None => Self::settings_file_path()?,
        };

        if let Some(parent) = settings_path.parent() {
            map_io_error!(fs::create_dir_all(parent), parent)?;
        }

        let toml_content = self.to_toml()?;

        map_io_error!(fs::write(&settings_path, toml_content), &settings_path)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string(self).map_err(|e| {
            StorageError::Serialize {
                path: "<settings>".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log_level".to_string(),
                value: self.log_level.clone(),
                reason: format!("use one of {}", LOG_LEVELS.join(", ")),
            }
            .into());
        }
        Ok(())
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// `config.toml` inside `config_dir`, or the platform default location.
    pub fn resolve_path(config_dir: Option<&Path>) -> crate::Result<PathBuf> {
        match config_dir {
            Some(dir) => Ok(dir.join("config.toml")),
            None => Self::settings_file_path(),
        }
    }

    fn settings_file_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_dir".to_string(),
            value: String::new(),
            reason: "no configuration directory for this platform; pass --config-dir".to_string(),
        })?;

        Ok(config_dir.join("persist-kit").join("config.toml"))
    }
}
