//! History card - static table of past detections

use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::dashboard::components::show_card;
use crate::dashboard::theme::ThemeColors;
use crate::history::HistoryEntry;

const ROW_HEIGHT: f32 = 32.0;

/// Render the detection history table
pub fn render_history_view(ui: &mut egui::Ui, history: &[HistoryEntry]) {
    show_card(ui, "Detection History", None, |ui| {
        TableBuilder::new(ui)
            .striped(false)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(160.0))
            .column(Column::exact(140.0))
            .column(Column::exact(160.0))
            .header(24.0, |mut header| {
                for title in ["Plate", "Confidence", "Date"] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).color(ThemeColors::TEXT_MUTED));
                    });
                }
            })
            .body(|mut body| {
                for entry in history {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(
                                RichText::new(&entry.plate_text)
                                    .monospace()
                                    .strong()
                                    .color(ThemeColors::TEXT_PRIMARY)
                            );
                        });
                        row.col(|ui| {
                            ui.label(entry.confidence_label());
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(&entry.created_at).color(ThemeColors::TEXT_MUTED));
                        });
                    });
                }
            });
    });
}
