//! Application menu bar and settings window

use eframe::egui;

use crate::controller::ViewportController;
use crate::i18n::{lang, set_lang, t};
use crate::state::settings::{Language, ViewerSettings};
use crate::state::AppState;
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, controller: &mut ViewportController) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui
            .add_enabled(controller.has_presented(), egui::Button::new(t("menu.export_png")))
            .clicked()
        {
            ui.close_menu();
            if let Err(e) = toolbar::action_export(ui.ctx(), controller) {
                tracing::warn!("Export: {e}");
            }
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the view menu
pub fn view_menu(
    ui: &mut egui::Ui,
    state: &mut AppState,
    viewport: &mut ViewportPanel,
    controller: &mut ViewportController,
) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.parameters, t("menu.parameters"));
        ui.checkbox(&mut state.panels.results, t("menu.results"));
        ui.separator();
        if ui.checkbox(&mut state.settings.grid.visible, t("menu.grid")).changed() {
            state.settings.save();
        }
        if ui
            .checkbox(&mut state.settings.lighting.shadows, t("menu.shadows"))
            .changed()
        {
            state.settings.save();
        }
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera(state);
            ui.close_menu();
        }
        if ui.button(t("menu.fullscreen")).clicked() {
            toolbar::action_toggle_fullscreen(ui.ctx(), state, controller);
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            if ui.selectable_label(lang() == Language::En, "English").clicked() {
                select_language(state, Language::En);
                ui.close_menu();
            }
            if ui.selectable_label(lang() == Language::Ru, "Русский").clicked() {
                select_language(state, Language::Ru);
                ui.close_menu();
            }
        });
    });
}

fn select_language(state: &mut AppState, language: Language) {
    set_lang(language);
    state.settings.ui.language = language;
    state.settings.save();
}

pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.panels.settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    let mut open = state.panels.settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_grid_settings(ui, state);
                show_lighting_settings(ui, state);
                show_rotation_settings(ui, state);
                show_camera_settings(ui, state);
                show_viewport_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state, viewport);
            });
        });
    state.panels.settings_window = open && state.panels.settings_window;
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.grid"));
    ui.checkbox(&mut state.settings.grid.visible, t("settings.grid_visible"));

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.size)
                .speed(10.0)
                .range(100.0..=5000.0)
                .suffix(" mm"),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_divisions"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.divisions)
                .speed(1)
                .range(1..=200),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_lighting_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.lighting"));
    ui.horizontal(|ui| {
        ui.label(t("settings.ambient"));
        ui.add(egui::Slider::new(
            &mut state.settings.lighting.ambient_intensity,
            0.0..=2.0,
        ));
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.directional"));
        ui.add(egui::Slider::new(
            &mut state.settings.lighting.directional_intensity,
            0.0..=3.0,
        ));
    });
    ui.checkbox(&mut state.settings.lighting.shadows, t("settings.shadows"));
    ui.add_space(10.0);
}

fn show_rotation_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.rotation"));
    ui.horizontal(|ui| {
        ui.label(t("settings.rotation_step"));
        ui.add(
            egui::DragValue::new(&mut state.settings.rotation.step)
                .speed(0.001)
                .range(0.0..=0.1)
                .suffix(" rad"),
        );
    });
    ui.add_space(10.0);
}

fn show_camera_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.camera"));
    let camera = &mut state.settings.camera;
    ui.horizontal(|ui| {
        ui.label(t("settings.min_distance"));
        ui.add(
            egui::DragValue::new(&mut camera.min_distance)
                .speed(10.0)
                .range(10.0..=camera.max_distance)
                .suffix(" mm"),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.max_distance"));
        ui.add(
            egui::DragValue::new(&mut camera.max_distance)
                .speed(10.0)
                .range(camera.min_distance..=20_000.0)
                .suffix(" mm"),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.fov"));
        ui.add(
            egui::DragValue::new(&mut camera.fov_degrees)
                .speed(0.5)
                .range(10.0..=120.0)
                .suffix("°"),
        );
    });
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.viewport"));
    ui.horizontal(|ui| {
        ui.label(t("settings.bg_color"));
        let [r, g, b] = state.settings.viewport.background_color;
        let mut color = egui::Color32::from_rgb(r, g, b);
        if ui.color_edit_button_srgba(&mut color).changed() {
            state.settings.viewport.background_color = [color.r(), color.g(), color.b()];
        }
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            state.settings.save();
            viewport.reset_camera(state);
        }
        if ui.button(t("settings.reset")).clicked() {
            let language = state.settings.ui.language;
            state.settings = ViewerSettings::default();
            state.settings.ui.language = language;
            viewport.reset_camera(state);
        }
        if ui.button(t("settings.close")).clicked() {
            state.panels.settings_window = false;
        }
    });
}
