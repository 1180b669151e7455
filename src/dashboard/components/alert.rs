//! Blocking alert dialog

use egui::RichText;
use crate::dashboard::theme::{color_with_alpha, ThemeColors};

/// Show `message` in a centered modal window
///
/// Dims the rest of the window while open. Returns `true` once the user
/// acknowledges it.
pub fn show_alert(ctx: &egui::Context, message: &str) -> bool {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("alert_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen, 0.0, color_with_alpha(egui::Color32::BLACK, 60));
            ui.allocate_rect(screen, egui::Sense::click());
        });

    let mut acknowledged = false;
    egui::Window::new("alert")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.label(
                RichText::new(message)
                    .size(15.0)
                    .color(ThemeColors::TEXT_PRIMARY)
            );
            ui.add_space(16.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let ok = ui.add(
                    egui::Button::new(RichText::new("OK").color(egui::Color32::WHITE))
                        .fill(ThemeColors::ACCENT_PRIMARY)
                        .min_size(egui::vec2(72.0, 32.0))
                );
                if ok.clicked() {
                    acknowledged = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        acknowledged = true;
    }

    acknowledged
}
