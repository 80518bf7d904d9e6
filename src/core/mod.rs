pub mod app_paths;
pub mod constants;
pub mod logging;
