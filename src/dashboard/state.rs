//! Dashboard view state

use std::path::PathBuf;
use tracing::debug;

use crate::session::DecodedPreview;

/// Something a view asks the app to do on its behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Read a file from disk and select it
    SelectPath(PathBuf),
    /// Submit the selected image
    Submit,
}

/// Preview texture for the current selection, keyed by preview id
#[derive(Default)]
pub enum PreviewSlot {
    /// Nothing selected
    #[default]
    Empty,
    /// Decode running in the background
    Decoding(u64),
    /// Texture uploaded
    Ready(u64, egui::TextureHandle),
    /// Selection is not a decodable image
    Unavailable(u64),
}

impl PreviewSlot {
    /// Preview id this slot belongs to
    pub fn id(&self) -> Option<u64> {
        match self {
            PreviewSlot::Empty => None,
            PreviewSlot::Decoding(id) | PreviewSlot::Ready(id, _) | PreviewSlot::Unavailable(id) => {
                Some(*id)
            }
        }
    }

    /// Install decoded pixels if they are for the decode this slot awaits
    ///
    /// Returns `false` for a decode superseded by a newer selection.
    pub fn accept(&mut self, ctx: &egui::Context, decoded: DecodedPreview) -> bool {
        if !matches!(self, PreviewSlot::Decoding(id) if *id == decoded.id) {
            debug!("Dropping superseded preview {}", decoded.uri);
            return false;
        }

        *self = match decoded.pixels {
            Some(pixels) => {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [pixels.width, pixels.height],
                    &pixels.rgba,
                );
                let texture = ctx.load_texture(decoded.uri, color_image, egui::TextureOptions::LINEAR);
                PreviewSlot::Ready(decoded.id, texture)
            }
            None => PreviewSlot::Unavailable(decoded.id),
        };
        true
    }
}

/// State for the upload card
#[derive(Default)]
pub struct UploadViewState {
    /// Contents of the path field
    pub path_input: String,
    /// Preview of the current selection
    pub preview: PreviewSlot,
}

impl UploadViewState {
    /// Take the path field as an action, if it holds anything
    pub fn take_path_action(&mut self) -> Option<DashboardAction> {
        let trimmed = self.path_input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let path = PathBuf::from(trimmed);
        self.path_input.clear();
        Some(DashboardAction::SelectPath(path))
    }
}

/// Holds back a dropped file while an alert blocks the window
#[derive(Default)]
pub struct DropQueue {
    deferred: Option<egui::DroppedFile>,
}

impl DropQueue {
    /// File to select now, if any; the newest drop wins
    pub fn next(&mut self, incoming: Option<egui::DroppedFile>, blocked: bool) -> Option<egui::DroppedFile> {
        if let Some(file) = incoming {
            if blocked {
                debug!("Holding dropped file {:?} until the alert closes", file.name);
            }
            self.deferred = Some(file);
        }

        if blocked {
            None
        } else {
            self.deferred.take()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::preview::PreviewPixels;

    fn dropped(name: &str) -> egui::DroppedFile {
        egui::DroppedFile {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn decoded(id: u64, pixels: Option<PreviewPixels>) -> DecodedPreview {
        DecodedPreview {
            id,
            uri: format!("preview://{}/car.png", id),
            pixels,
        }
    }

    #[test]
    fn test_drop_passes_through_when_unblocked() {
        let mut queue = DropQueue::default();
        let file = queue.next(Some(dropped("car.jpg")), false).unwrap();
        assert_eq!(file.name, "car.jpg");
        assert!(queue.next(None, false).is_none());
    }

    #[test]
    fn test_drop_held_while_alert_open() {
        let mut queue = DropQueue::default();

        assert!(queue.next(Some(dropped("first.jpg")), true).is_none());
        assert!(queue.next(Some(dropped("second.jpg")), true).is_none());
        assert!(queue.next(None, true).is_none());

        // Alert dismissed: the newest drop is selected
        let file = queue.next(None, false).unwrap();
        assert_eq!(file.name, "second.jpg");
        assert!(queue.next(None, false).is_none());
    }

    #[test]
    fn test_preview_ready_after_decode() {
        let ctx = egui::Context::default();
        let mut slot = PreviewSlot::Decoding(4);
        let pixels = PreviewPixels {
            width: 2,
            height: 1,
            rgba: vec![255; 8],
        };

        assert!(slot.accept(&ctx, decoded(4, Some(pixels))));

        match &slot {
            PreviewSlot::Ready(id, texture) => {
                assert_eq!(*id, 4);
                assert_eq!(texture.size(), [2, 1]);
            }
            _ => panic!("expected a ready preview"),
        }
    }

    #[test]
    fn test_undecodable_preview_unavailable() {
        let ctx = egui::Context::default();
        let mut slot = PreviewSlot::Decoding(2);

        assert!(slot.accept(&ctx, decoded(2, None)));
        assert!(matches!(slot, PreviewSlot::Unavailable(2)));
    }

    #[test]
    fn test_superseded_decode_dropped() {
        let ctx = egui::Context::default();
        let mut slot = PreviewSlot::Decoding(5);

        assert!(!slot.accept(&ctx, decoded(4, None)));
        assert!(matches!(slot, PreviewSlot::Decoding(5)));
        assert_eq!(slot.id(), Some(5));
    }

    #[test]
    fn test_empty_path_is_no_action() {
        let mut state = UploadViewState {
            path_input: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(state.take_path_action(), None);
    }

    #[test]
    fn test_path_action_trims_and_clears() {
        let mut state = UploadViewState {
            path_input: "  /home/user/car.jpg ".to_string(),
            ..Default::default()
        };

        assert_eq!(
            state.take_path_action(),
            Some(DashboardAction::SelectPath(PathBuf::from("/home/user/car.jpg")))
        );
        assert!(state.path_input.is_empty());
    }
}
