//! Dashboard theme and styling
//!
//! Light, card-based look: gray page, white cards, black primary button.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Light color palette
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    pub const BG_PAGE: Color32 = Color32::from_rgb(249, 250, 251);
    pub const BG_CARD: Color32 = Color32::WHITE;
    pub const BG_MUTED: Color32 = Color32::from_rgb(243, 244, 246);
    pub const BG_HOVER: Color32 = Color32::from_rgb(229, 231, 235);

    // Accent colors
    pub const ACCENT_PRIMARY: Color32 = Color32::BLACK;

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(75, 85, 99);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    pub const TEXT_FAINT: Color32 = Color32::from_rgb(156, 163, 175);

    // Border colors
    pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
    pub const BORDER_DASHED: Color32 = Color32::from_rgb(209, 213, 219);
}

/// Apply the light theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = Visuals::light();

    visuals.window_fill = ThemeColors::BG_CARD;
    visuals.panel_fill = ThemeColors::BG_PAGE;
    visuals.faint_bg_color = ThemeColors::BG_MUTED;
    visuals.extreme_bg_color = ThemeColors::BG_CARD;

    visuals.widgets.noninteractive.bg_fill = ThemeColors::BG_CARD;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, ThemeColors::BORDER);
    visuals.widgets.noninteractive.rounding = Rounding::same(8.0);

    visuals.widgets.inactive.bg_fill = ThemeColors::BG_MUTED;
    visuals.widgets.inactive.weak_bg_fill = ThemeColors::BG_MUTED;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(8.0);

    visuals.widgets.hovered.bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(8.0);

    visuals.widgets.active.bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.active.rounding = Rounding::same(8.0);

    visuals.selection.bg_fill = color_with_alpha(ThemeColors::TEXT_MUTED, 64);
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);

    visuals.window_rounding = Rounding::same(16.0);
    visuals.window_shadow.blur = 12.0;
    visuals.window_stroke = Stroke::new(1.0, ThemeColors::BORDER);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(20.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

/// Helper to create a color with modified alpha
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
