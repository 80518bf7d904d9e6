pub const STYLE: &str = include_str!("../../assets/style.css");
pub const APP_TITLE: &str = "Dictview";
pub const WINDOW_SIZE: (f64, f64) = (1100.0, 720.0);
pub const MIN_WINDOW_SIZE: (f64, f64) = (480.0, 480.0);
pub const APP_ICON_PNG: &[u8] = include_bytes!("../../assets/icon.png");

// Viewports at or below this many logical pixels get full-width dialogs.
pub const DIALOG_WIDTH_THRESHOLD: f64 = 840.0;

pub const FALLBACK_IMAGE_SVG: &str = include_str!("../../assets/onerror.svg");
