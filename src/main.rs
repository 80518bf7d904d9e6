#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod core;
mod options;
mod storage;
mod ui;

pub use crate::core::{app_paths, constants, logging};
pub use storage::settings;

use dioxus::prelude::*;

use crate::ui::app;
use crate::ui::window::app_window;

fn main() {
    let log_filter = match settings::load_settings() {
        Ok(s) => s.log_filter,
        Err(e) => {
            eprintln!("settings unavailable, using defaults: {e}");
            logging::DEFAULT_LOG_FILTER.to_string()
        }
    };
    if let Err(e) = logging::init(&log_filter) {
        eprintln!("logging disabled: {e}");
    }

    LaunchBuilder::desktop().with_cfg(app_window()).launch(app);
}
