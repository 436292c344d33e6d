//! Application style configuration

use eframe::egui;

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    // Light theme
    style.visuals = egui::Visuals::light();

    // Rounding
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    let widgets = &mut style.visuals.widgets;
    for w in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
    ] {
        w.corner_radius = egui::CornerRadius::same(3);
    }

    // Spacing
    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    style.spacing.menu_margin = egui::Margin::same(4);

    // Panels match the viewport background
    style.visuals.panel_fill = egui::Color32::from_rgb(245, 246, 250);
    style.visuals.window_fill = egui::Color32::from_rgb(250, 250, 252);

    // Accent from the flange highlight color
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(108, 92, 231);

    // Font sizes
    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    use egui::{FontId, TextStyle};
    for (text_style, font) in [
        (TextStyle::Body, FontId::proportional(font_size)),
        (TextStyle::Button, FontId::proportional(font_size)),
        (TextStyle::Small, FontId::proportional(font_size * 0.85)),
        (TextStyle::Heading, FontId::proportional(font_size * 1.3)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
    ] {
        style.text_styles.insert(text_style, font);
    }
}
