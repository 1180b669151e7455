//! Upload card - file selection, preview and submit

use egui::{RichText, Rounding, Stroke};

use crate::dashboard::components::show_card;
use crate::dashboard::state::{DashboardAction, PreviewSlot, UploadViewState};
use crate::dashboard::theme::ThemeColors;
use crate::session::UploadSession;

const PREVIEW_HEIGHT: f32 = 192.0;

/// Render the upload card
pub fn render_upload_view(
    ui: &mut egui::Ui,
    view_state: &mut UploadViewState,
    session: &UploadSession,
) -> Option<DashboardAction> {
    let mut action = None;

    show_card(
        ui,
        "Upload Image",
        Some("Upload a vehicle image to detect and recognize the license plate."),
        |ui| {
            // Drop zone
            egui::Frame::none()
                .stroke(Stroke::new(1.5, ThemeColors::BORDER_DASHED))
                .rounding(Rounding::same(12.0))
                .inner_margin(20.0)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Drag & drop an image here, or open one by path")
                                .size(13.0)
                                .color(ThemeColors::TEXT_MUTED)
                        );
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            let field = ui.add(
                                egui::TextEdit::singleline(&mut view_state.path_input)
                                    .hint_text("/path/to/vehicle.jpg")
                                    .desired_width(ui.available_width() - 72.0)
                            );
                            let submitted = field.lost_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter));
                            if ui.button("Open").clicked() || submitted {
                                action = view_state.take_path_action();
                            }
                        });
                    });
                });

            if let Some(image) = session.selected() {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("{} - {} bytes", image.file_name(), image.len()))
                        .size(12.0)
                        .color(ThemeColors::TEXT_MUTED)
                );
            }

            render_preview(ui, view_state, session);

            ui.add_space(16.0);

            let loading = session.is_loading();
            let button = egui::Button::new(
                RichText::new(session.phase().button_label()).color(egui::Color32::WHITE)
            )
            .fill(ThemeColors::ACCENT_PRIMARY)
            .rounding(Rounding::same(12.0))
            .min_size(egui::vec2(ui.available_width(), 40.0));

            if ui.add_enabled(!loading, button).clicked() {
                action = Some(DashboardAction::Submit);
            }

            if loading {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(
                        RichText::new("Waiting for the recognition service")
                            .size(12.0)
                            .color(ThemeColors::TEXT_MUTED)
                    );
                });
            }
        },
    );

    action
}

/// Draw the preview from whatever the background decode has produced
fn render_preview(ui: &mut egui::Ui, view_state: &UploadViewState, session: &UploadSession) {
    let Some(preview) = session.preview() else {
        return;
    };

    ui.add_space(16.0);

    egui::Frame::none()
        .fill(ThemeColors::BG_MUTED)
        .rounding(Rounding::same(8.0))
        .show(ui, |ui| {
            let area = egui::vec2(ui.available_width(), PREVIEW_HEIGHT);
            ui.set_min_size(area);

            match &view_state.preview {
                PreviewSlot::Ready(id, texture) if *id == preview.id() => {
                    // Contain: scale to fit while keeping the aspect ratio
                    let tex_size = texture.size_vec2();
                    let scale = (area.x / tex_size.x).min(area.y / tex_size.y);
                    ui.centered_and_justified(|ui| {
                        ui.image((texture.id(), tex_size * scale));
                    });
                }
                PreviewSlot::Unavailable(id) if *id == preview.id() => {
                    placeholder(ui, "Preview not available");
                }
                _ => {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                }
            }
        });
}

fn placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new(text)
                .size(12.0)
                .color(ThemeColors::TEXT_FAINT)
        );
    });
}
