use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState, notice: Option<&str>) {
    ui.horizontal(|ui| {
        if state.interaction.auto_rotating() {
            ui.weak(format!(
                "{}: {:.0}°",
                t("status.rotating"),
                state.frame.rotation().to_degrees()
            ));
        } else {
            ui.weak(t("status.stopped"));
        }

        if let Some(id) = state.interaction.hovered() {
            ui.separator();
            ui.label(format!("{}: {id}", t("status.hover")));
        }

        if let Err(e) = state.parts() {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(192, 57, 43), e.to_string());
        }

        if let Some(notice) = notice {
            ui.separator();
            ui.label(notice);
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("Splice Viewer v", env!("CARGO_PKG_VERSION")));
        });
    });
}
