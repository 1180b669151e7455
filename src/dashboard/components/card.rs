//! White content card with heading and caption

use egui::{RichText, Rounding, Stroke};
use crate::dashboard::theme::ThemeColors;

/// Frame shared by every card on the page
fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(ThemeColors::BG_CARD)
        .stroke(Stroke::new(1.0, ThemeColors::BORDER))
        .rounding(Rounding::same(16.0))
        .inner_margin(24.0)
}

/// Render a card filling the available width
pub fn show_card<R>(
    ui: &mut egui::Ui,
    title: &str,
    caption: Option<&str>,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    card_frame()
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.label(
                RichText::new(title)
                    .size(18.0)
                    .color(ThemeColors::TEXT_PRIMARY)
                    .strong()
            );
            if let Some(caption) = caption {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(caption)
                        .size(13.0)
                        .color(ThemeColors::TEXT_MUTED)
                );
            }
            ui.add_space(16.0);

            add_contents(ui)
        })
        .inner
}
