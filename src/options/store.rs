use std::fs;
use std::path::{Path, PathBuf};

use crate::app_paths;
use crate::options::{ListClass, OptionGroups, OptionItem};

pub const OPTIONS_FILE_NAME: &str = "options.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no user data directory available")]
    NoDataDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize option groups: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub fn default_option_groups() -> OptionGroups {
    let mut groups = OptionGroups::new();
    groups.insert(
        "status",
        vec![
            OptionItem::new("Enabled", 1, ListClass::Success),
            OptionItem::new("Disabled", 2, ListClass::Warning),
            OptionItem::new("Deleted", 3, ListClass::Error),
        ],
    );
    groups.insert(
        "sms_status",
        vec![
            OptionItem::new("Sent", 1, ListClass::Success),
            OptionItem::new("Failed", 2, ListClass::Error),
        ],
    );
    groups
}

/// `options.json` inside the per-user data directory.
pub fn options_file_path() -> Result<PathBuf, StoreError> {
    Ok(app_paths::data_dir()
        .ok_or(StoreError::NoDataDir)?
        .join(OPTIONS_FILE_NAME))
}

/// Load groups from `path`; a missing file yields the built-in defaults.
pub fn load_option_groups_from(path: &Path) -> Result<OptionGroups, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no options file, using defaults");
            return Ok(default_option_groups());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let groups: OptionGroups =
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(
        path = %path.display(),
        groups = groups.names().count(),
        "loaded option groups"
    );
    Ok(groups)
}

pub fn save_option_groups_to(path: &Path, groups: &OptionGroups) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(groups).map_err(StoreError::Serialize)?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let groups = load_option_groups_from(&dir.path().join(OPTIONS_FILE_NAME)).unwrap();
        assert_eq!(groups, default_option_groups());
        assert_eq!(groups.label("status", "2"), "Disabled");
        assert_eq!(groups.tag("sms_status", 2), ListClass::Error);
    }

    #[test]
    fn data_dir_path_names_options_file() {
        // Headless CI may lack a home directory; only the file name is fixed.
        if let Ok(path) = options_file_path() {
            assert!(path.ends_with(OPTIONS_FILE_NAME));
            assert!(path.starts_with(app_paths::data_dir().unwrap()));
        }
    }

    #[test]
    fn saved_groups_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(OPTIONS_FILE_NAME);

        let mut groups = OptionGroups::new();
        groups.insert(
            "gender",
            vec![
                OptionItem::new("Male", "m", ListClass::Info),
                OptionItem::new("Female", "f", ListClass::Primary),
            ],
        );
        save_option_groups_to(&path, &groups).unwrap();

        let loaded = load_option_groups_from(&path).unwrap();
        assert_eq!(loaded.label("gender", "f"), "Female");
        assert_eq!(loaded.group("status"), None);
    }

    #[test]
    fn file_uses_list_class_field_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILE_NAME);
        fs::write(
            &path,
            r#"{"level": [{"label": "High", "value": 3, "key": 3, "listClass": "error"}]}"#,
        )
        .unwrap();

        let groups = load_option_groups_from(&path).unwrap();
        assert_eq!(groups.tag("level", "3"), ListClass::Error);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let err = load_option_groups_from(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
