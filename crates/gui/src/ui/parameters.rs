//! Parameters panel: section dimensions and bolt specification

use egui::Ui;
use shared::{BoltType, ParameterSet, PropertyClass};

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("params.title"));
    ui.separator();

    let mut params = state.params().clone();

    egui::Grid::new("splice_params")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            length_row(ui, t("params.flange_width"), &mut params.flange_width);
            length_row(ui, t("params.web_height"), &mut params.web_height);
            length_row(ui, t("params.flange_thickness"), &mut params.flange_thickness);
            length_row(ui, t("params.web_thickness"), &mut params.web_thickness);
            length_row(ui, t("params.bolt_diameter"), &mut params.bolt_diameter);

            ui.label(t("params.bolt_type"));
            egui::ComboBox::from_id_salt("bolt_type")
                .selected_text(params.bolt_type.label())
                .show_ui(ui, |ui| {
                    for bt in BoltType::all() {
                        ui.selectable_value(&mut params.bolt_type, *bt, bt.label());
                    }
                });
            ui.end_row();

            ui.label(t("params.property_class"));
            egui::ComboBox::from_id_salt("property_class")
                .selected_text(params.property_class.label())
                .show_ui(ui, |ui| {
                    for pc in PropertyClass::all() {
                        ui.selectable_value(&mut params.property_class, *pc, pc.label());
                    }
                });
            ui.end_row();
        });

    ui.add_space(6.0);
    if ui.button(t("params.reset")).clicked() {
        params = ParameterSet::default();
    }

    // No-op when nothing changed
    state.set_params(params);
}

fn length_row(ui: &mut Ui, label: &str, value: &mut f64) {
    ui.label(label);
    ui.add(
        egui::DragValue::new(value)
            .range(0.0..=2000.0)
            .speed(1.0)
            .suffix(" mm"),
    );
    ui.end_row();
}
