//! Result card - recognized plate and confidence

use egui::{RichText, Rounding, Stroke};

use crate::dashboard::components::{show_card, ValueCard};
use crate::dashboard::theme::ThemeColors;
use crate::session::UploadSession;

/// Render the result card
pub fn render_result_view(ui: &mut egui::Ui, session: &UploadSession) {
    show_card(
        ui,
        "Result",
        Some("Recognition output will appear here."),
        |ui| match session.result() {
            Some(result) => {
                ValueCard::new("Detected Plate", &result.text)
                    .with_value_size(22.0)
                    .monospace()
                    .show(ui);
                ui.add_space(12.0);
                ValueCard::new("Confidence", result.confidence_label()).show(ui);
            }
            None => {
                egui::Frame::none()
                    .stroke(Stroke::new(1.0, ThemeColors::BORDER))
                    .rounding(Rounding::same(12.0))
                    .show(ui, |ui| {
                        ui.set_min_size(egui::vec2(ui.available_width(), 160.0));
                        ui.centered_and_justified(|ui| {
                            ui.label(
                                RichText::new("No result yet")
                                    .size(13.0)
                                    .color(ThemeColors::TEXT_FAINT)
                            );
                        });
                    });
            }
        },
    );
}
