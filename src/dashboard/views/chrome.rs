//! Header and footer bars

use chrono::Datelike;
use egui::RichText;

use crate::dashboard::theme::ThemeColors;

/// Title bar across the top of the window
pub fn render_header(ui: &mut egui::Ui) {
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        ui.label(
            RichText::new("License Plate System")
                .size(18.0)
                .color(ThemeColors::TEXT_PRIMARY)
                .strong()
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new("AI Detection & OCR")
                    .size(13.0)
                    .color(ThemeColors::TEXT_SECONDARY)
            );
        });
    });
    ui.add_space(12.0);
}

/// Copyright line at the bottom of the window
pub fn render_footer(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(footer_text(chrono::Local::now().year()))
                .size(11.0)
                .color(ThemeColors::TEXT_FAINT)
        );
    });
    ui.add_space(8.0);
}

fn footer_text(year: i32) -> String {
    format!("© {} License Plate Recognition System", year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_text() {
        assert_eq!(footer_text(2026), "© 2026 License Plate Recognition System");
    }
}
