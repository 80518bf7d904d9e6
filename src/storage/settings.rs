use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app_paths;
use crate::logging::DEFAULT_LOG_FILTER;
use crate::options::store::{self, StoreError};

const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("no user data directory available for settings")]
    NoDataDir,
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub log_filter: String,
    pub options_file: Option<PathBuf>,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            options_file: None,
        }
    }
}

impl PanelSettings {
    /// Options file to read, honoring the configured override.
    pub fn options_path(&self) -> Result<PathBuf, StoreError> {
        match &self.options_file {
            Some(path) => Ok(path.clone()),
            None => store::options_file_path(),
        }
    }
}

pub fn load_settings_from(path: &Path) -> Result<PanelSettings, SettingsError> {
    let contents = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(PanelSettings::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_settings() -> Result<PanelSettings, SettingsError> {
    load_settings_from(&settings_file_path()?)
}

fn settings_file_path() -> Result<PathBuf, SettingsError> {
    Ok(app_paths::data_dir()
        .ok_or(SettingsError::NoDataDir)?
        .join(SETTINGS_FILE_NAME))
}
