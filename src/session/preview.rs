//! Local preview of the selected image

use tracing::debug;

use crate::session::SelectedImage;

/// Longest edge of a decoded preview, in pixels
pub const PREVIEW_MAX_EDGE: u32 = 640;

/// Decoded RGBA pixels ready to upload as a texture
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPixels {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Transient reference used only to render the selected image locally
///
/// Each selection gets a fresh id, so a renderer can tell when its cached
/// texture is stale. Creating one is cheap; pixels are only produced by
/// [`PreviewReference::decode`], which the window runs off the UI thread.
#[derive(Debug, Clone)]
pub struct PreviewReference {
    id: u64,
    uri: String,
    source: SelectedImage,
}

impl PreviewReference {
    /// Reference the preview for a selection
    pub fn from_image(id: u64, image: &SelectedImage) -> Self {
        Self {
            id,
            uri: format!("preview://{}/{}", id, image.file_name()),
            source: image.clone(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Decode the source image; `None` when the bytes are not an image
    pub fn decode(&self) -> Option<PreviewPixels> {
        decode_preview(self.source.bytes())
    }
}

/// Decode and downscale image bytes for display
pub fn decode_preview(bytes: &[u8]) -> Option<PreviewPixels> {
    let image = match image::load_from_memory(bytes) {
        Ok(image) => image,
        Err(e) => {
            debug!("Preview unavailable: {}", e);
            return None;
        }
    };

    let image = if image.width() > PREVIEW_MAX_EDGE || image.height() > PREVIEW_MAX_EDGE {
        image.thumbnail(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE)
    } else {
        image
    };

    let rgba = image.to_rgba8();
    Some(PreviewPixels {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}
