use dioxus_desktop::tao::window::Icon;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

use crate::constants::{APP_TITLE, MIN_WINDOW_SIZE, WINDOW_SIZE};
use crate::ui::icons::app_icon;

pub fn app_window() -> Config {
    let (width, height) = WINDOW_SIZE;
    let (min_width, min_height) = MIN_WINDOW_SIZE;
    let icon = app_icon();

    let builder = WindowBuilder::new()
        .with_title(APP_TITLE)
        .with_window_icon(icon.clone())
        .with_inner_size(LogicalSize::new(width, height))
        .with_min_inner_size(LogicalSize::new(min_width, min_height))
        .with_resizable(true);

    Config::default()
        .with_menu(None)
        .with_disable_context_menu(true)
        .with_window(with_taskbar_icon(builder, icon))
}

#[cfg(target_os = "windows")]
fn with_taskbar_icon(builder: WindowBuilder, icon: Option<Icon>) -> WindowBuilder {
    use dioxus_desktop::tao::platform::windows::WindowBuilderExtWindows;
    builder.with_taskbar_icon(icon)
}

#[cfg(not(target_os = "windows"))]
fn with_taskbar_icon(builder: WindowBuilder, _icon: Option<Icon>) -> WindowBuilder {
    builder
}
