use std::path::PathBuf;

use directories::ProjectDirs;

pub const APP_DIR_NAME: &str = "dictview";

/// Per-user data directory holding `settings.json` and `options.json`.
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "dictview", APP_DIR_NAME).map(|dirs| dirs.data_dir().to_path_buf())
}
