//! Labelled value tile used by the result card

use egui::{RichText, Rounding};
use crate::dashboard::theme::ThemeColors;

/// A muted tile with a small caption above a prominent value
pub struct ValueCard {
    pub title: String,
    pub value: String,
    pub value_size: f32,
    pub monospace: bool,
}

impl ValueCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            value_size: 18.0,
            monospace: false,
        }
    }

    pub fn with_value_size(mut self, size: f32) -> Self {
        self.value_size = size;
        self
    }

    /// Render the value in a fixed-width face, for plate strings
    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(ThemeColors::BG_MUTED)
            .rounding(Rounding::same(12.0))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.label(
                    RichText::new(&self.title)
                        .size(13.0)
                        .color(ThemeColors::TEXT_MUTED)
                );

                ui.add_space(4.0);

                let mut value = RichText::new(&self.value)
                    .size(self.value_size)
                    .color(ThemeColors::TEXT_PRIMARY)
                    .strong();
                if self.monospace {
                    value = value.monospace();
                }
                ui.label(value);
            });
    }
}
