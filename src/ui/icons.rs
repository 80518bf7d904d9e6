use dioxus_desktop::tao::window::Icon;

use crate::constants::APP_ICON_PNG;

/// Window icon decoded from the PNG compiled into the binary.
pub fn app_icon() -> Option<Icon> {
    let decoded = decode_rgba(APP_ICON_PNG).and_then(|(rgba, width, height)| {
        Icon::from_rgba(rgba, width, height).map_err(|e| e.to_string())
    });

    match decoded {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!(error = %e, "window icon unavailable");
            None
        }
    }
}

fn decode_rgba(bytes: &[u8]) -> Result<(Vec<u8>, u32, u32), String> {
    let rgba = image::load_from_memory(bytes)
        .map_err(|e| format!("decode icon: {e}"))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_icon_decodes() {
        let (rgba, width, height) = decode_rgba(APP_ICON_PNG).unwrap();
        assert_eq!((width, height), (32, 32));
        assert_eq!(rgba.len(), (width * height * 4) as usize);
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(decode_rgba(b"not an image").is_err());
    }
}
