//! Read-only view of the latest design calculation

use egui::Ui;
use shared::{DesignResult, DesignStatus};

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.heading(t("results.title"));
    ui.separator();

    let Some(result) = &state.design else {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.weak(t("results.none"));
        });
        return;
    };

    show_result(ui, result);
}

fn show_result(ui: &mut Ui, result: &DesignResult) {
    let (status, color) = match result.design_status {
        DesignStatus::Safe => (t("results.safe"), egui::Color32::from_rgb(39, 174, 96)),
        DesignStatus::Unsafe => (t("results.unsafe"), egui::Color32::from_rgb(192, 57, 43)),
    };
    ui.horizontal(|ui| {
        ui.label(format!("{}:", t("results.status")));
        ui.colored_label(color, egui::RichText::new(status).strong());
    });
    ui.add_space(4.0);

    egui::Grid::new("design_result")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            text_row(ui, t("results.section"), &result.section_size);
            text_row(ui, t("results.material"), &result.material);
            text_row(ui, t("results.weld_type"), &result.weld_type);
            text_row(ui, t("results.flange_preference"), &result.flange_preference);

            for (key, value, unit) in result.numeric_fields() {
                ui.label(t(&format!("results.{key}")));
                ui.monospace(format!("{value:.2} {unit}"));
                ui.end_row();
            }
        });
}

fn text_row(ui: &mut Ui, label: &str, value: &str) {
    ui.label(label);
    ui.label(if value.is_empty() { "-" } else { value });
    ui.end_row();
}
