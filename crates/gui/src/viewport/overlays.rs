//! Viewport overlay drawing (dimension labels, hover tooltip, placeholders)

use egui::Painter;
use glam::{Quat, Vec3};
use shared::{ParameterSet, PartDescriptor};

use crate::annotations::{dimension_labels, part_tooltip, tooltip_anchor};

use super::camera::ArcBallCamera;

const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(45, 52, 54);

/// Draw the fixed dimension labels
pub fn draw_dimension_labels(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    params: &ParameterSet,
) {
    for label in dimension_labels(params) {
        if let Some(screen) = camera.project(label.position, rect) {
            if rect.contains(screen) {
                let galley = painter.layout_no_wrap(
                    label.text,
                    egui::FontId::proportional(13.0),
                    LABEL_COLOR,
                );
                let text_rect = egui::Align2::CENTER_CENTER
                    .anchor_size(screen, galley.size())
                    .expand2(egui::vec2(6.0, 3.0));
                painter.rect_filled(
                    text_rect,
                    3.0,
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200),
                );
                painter.galley(text_rect.min + egui::vec2(6.0, 3.0), galley, LABEL_COLOR);
            }
        }
    }
}

/// Draw the tooltip of the hovered part. The anchor follows the assembly rotation.
pub fn draw_part_tooltip(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    part: &PartDescriptor,
    params: &ParameterSet,
    rotation: f32,
) {
    let anchor = Quat::from_rotation_y(rotation) * Vec3::from(tooltip_anchor(part));
    let Some(screen) = camera.project(anchor.into(), rect) else {
        return;
    };

    let text = part_tooltip(part, params).join("\n");
    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
    let box_rect = egui::Align2::CENTER_BOTTOM
        .anchor_size(screen - egui::vec2(0.0, 8.0), galley.size())
        .expand2(egui::vec2(8.0, 5.0));
    painter.rect_filled(
        box_rect,
        4.0,
        egui::Color32::from_rgba_unmultiplied(0, 0, 0, 200),
    );
    painter.galley(box_rect.min + egui::vec2(8.0, 5.0), galley, egui::Color32::WHITE);
}

/// Centered message shown in place of the 3D view
pub fn draw_placeholder(painter: &Painter, rect: egui::Rect, title: &str, detail: &str) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(236, 240, 241));
    painter.text(
        rect.center() - egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(16.0),
        egui::Color32::from_rgb(192, 57, 43),
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        detail,
        egui::FontId::proportional(12.0),
        egui::Color32::from_rgb(99, 110, 114),
    );
}

/// Navigation hint at the bottom of the viewport
pub fn draw_nav_hint(painter: &Painter, rect: egui::Rect, hint: &str) {
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 12.0),
        egui::Align2::CENTER_BOTTOM,
        hint,
        egui::FontId::proportional(11.0),
        egui::Color32::from_rgb(120, 128, 132),
    );
}
