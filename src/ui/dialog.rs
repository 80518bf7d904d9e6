use std::fmt;

use dioxus::prelude::*;
use dioxus_desktop::tao::event::{Event, WindowEvent};
use dioxus_desktop::{DesktopService, use_window, use_wry_event_handler};

use crate::constants::DIALOG_WIDTH_THRESHOLD;

/// CSS width for a modal dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogWidth {
    Full,
    Fixed(u32),
}

impl fmt::Display for DialogWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogWidth::Full => f.write_str("100%"),
            DialogWidth::Fixed(px) => write!(f, "{px}px"),
        }
    }
}

/// Anything that can report the width dialogs are laid out in, in logical pixels.
pub trait Viewport {
    fn client_width(&self) -> f64;
}

impl Viewport for f64 {
    fn client_width(&self) -> f64 {
        *self
    }
}

impl Viewport for DesktopService {
    fn client_width(&self) -> f64 {
        let scale = self.window.scale_factor();
        self.window.inner_size().to_logical::<f64>(scale).width
    }
}

/// Write the width matching `viewport` into `width` and return it.
pub fn adapt_dialog_width(viewport: &impl Viewport, width: &mut DialogWidth) -> DialogWidth {
    let client = viewport.client_width();
    *width = if client <= DIALOG_WIDTH_THRESHOLD {
        DialogWidth::Full
    } else {
        DialogWidth::Fixed(DIALOG_WIDTH_THRESHOLD as u32)
    };
    *width
}

/// Dialog width tracking the desktop window, re-adapted on every resize.
pub fn use_adaptive_dialog_width() -> Signal<DialogWidth> {
    let window = use_window();
    let mut width = use_signal({
        let window = window.clone();
        move || {
            let mut initial = DialogWidth::Full;
            adapt_dialog_width(&*window, &mut initial)
        }
    });

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(_),
            ..
        } = event
        {
            let mut next = *width.peek();
            let previous = next;
            if adapt_dialog_width(&*window, &mut next) != previous {
                tracing::debug!(width = %next, "dialog width adapted");
                width.set(next);
            }
        }
    });

    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_gets_full_width() {
        let mut width = DialogWidth::Fixed(840);
        assert_eq!(adapt_dialog_width(&500.0, &mut width), DialogWidth::Full);
        assert_eq!(width.to_string(), "100%");
    }

    #[test]
    fn wide_viewport_gets_fixed_width() {
        let mut width = DialogWidth::Full;
        assert_eq!(adapt_dialog_width(&1200.0, &mut width), DialogWidth::Fixed(840));
        assert_eq!(width.to_string(), "840px");
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut width = DialogWidth::Fixed(840);
        adapt_dialog_width(&840.0, &mut width);
        assert_eq!(width, DialogWidth::Full);

        adapt_dialog_width(&840.5, &mut width);
        assert_eq!(width, DialogWidth::Fixed(840));
    }

    #[test]
    fn custom_viewport_is_read() {
        struct Pane(f64);
        impl Viewport for Pane {
            fn client_width(&self) -> f64 {
                self.0
            }
        }

        let mut width = DialogWidth::Full;
        assert_eq!(adapt_dialog_width(&Pane(1920.0), &mut width).to_string(), "840px");
    }
}
