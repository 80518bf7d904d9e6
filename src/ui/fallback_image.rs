use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dioxus::prelude::*;

use crate::constants::FALLBACK_IMAGE_SVG;

/// Bundled placeholder shown in place of images that fail to load.
pub static FALLBACK_IMAGE_SRC: LazyLock<String> = LazyLock::new(|| {
    format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(FALLBACK_IMAGE_SVG)
    )
});

/// The parts of an `<img>` the load-failure handler touches.
pub trait ImageElement {
    fn set_src(&mut self, src: &str);
    fn clear_error_handler(&mut self);
}

/// Swap in the placeholder, then detach the handler so a failing placeholder
/// cannot trigger it again.
pub fn on_image_error(target: &mut impl ImageElement) {
    target.set_src(&FALLBACK_IMAGE_SRC);
    target.clear_error_handler();
}

#[derive(Clone, Debug, PartialEq)]
pub struct FallbackImageState {
    pub src: String,
    error_handler: bool,
}

impl FallbackImageState {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.to_string(),
            error_handler: true,
        }
    }

    /// Deliver a load failure; returns whether a handler ran.
    pub fn dispatch_error(&mut self) -> bool {
        if !self.error_handler {
            return false;
        }
        tracing::warn!(src = %self.src, "image failed to load, using placeholder");
        on_image_error(self);
        true
    }
}

impl ImageElement for FallbackImageState {
    fn set_src(&mut self, src: &str) {
        self.src = src.to_string();
    }

    fn clear_error_handler(&mut self) {
        self.error_handler = false;
    }
}

/// `<img>` that falls back to the bundled placeholder once. Give it a `key`
/// tied to `src` so a new source starts with a fresh handler.
#[component]
pub fn FallbackImage(
    src: String,
    #[props(default)] class: String,
    #[props(default)] alt: String,
) -> Element {
    let mut state = use_signal(|| FallbackImageState::new(&src));
    let current = state.read().src.clone();

    rsx! {
        img {
            class: "{class}",
            alt: "{alt}",
            src: "{current}",
            onerror: move |_| {
                state.write().dispatch_error();
            }
        }
    }
}
