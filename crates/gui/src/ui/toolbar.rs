//! Toolbar actions and UI

use egui::Ui;

use crate::controller::ViewportController;
use crate::error::ViewerResult;
use crate::i18n::t;
use crate::state::AppState;

// ── Public actions (callable from menus and shortcuts too) ───

pub fn action_toggle_rotation(state: &mut AppState) {
    state.interaction.toggle_auto_rotate();
}

pub fn action_toggle_fullscreen(
    ctx: &egui::Context,
    state: &mut AppState,
    controller: &mut ViewportController,
) {
    let target = controller.toggle_fullscreen(&mut state.interaction);
    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(target));
}

/// Ask the backend for a screenshot; the result arrives as an input event
pub fn action_export(ctx: &egui::Context, controller: &mut ViewportController) -> ViewerResult<()> {
    controller.request_capture()?;
    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    Ok(())
}

// ── Toolbar UI ───────────────────────────────────────────────

pub fn show(ui: &mut Ui, state: &mut AppState, controller: &mut ViewportController) {
    ui.horizontal(|ui| {
        let rotation_label = if state.interaction.auto_rotating() {
            t("tb.stop_rotation")
        } else {
            t("tb.start_rotation")
        };
        if ui
            .button(rotation_label)
            .on_hover_text(t("tip.rotation"))
            .clicked()
        {
            action_toggle_rotation(state);
        }

        let fullscreen_label = if state.interaction.fullscreen() {
            t("tb.exit_fullscreen")
        } else {
            t("tb.fullscreen")
        };
        if ui
            .button(fullscreen_label)
            .on_hover_text(t("tip.fullscreen"))
            .clicked()
        {
            action_toggle_fullscreen(ui.ctx(), state, controller);
        }

        ui.separator();

        let can_export = controller.has_presented() && !controller.capture_requested();
        let export = ui
            .add_enabled(can_export, egui::Button::new(t("tb.export")))
            .on_hover_text(t("tip.export"))
            .on_disabled_hover_text(t("tip.export_disabled"));
        if export.clicked() {
            if let Err(e) = action_export(ui.ctx(), controller) {
                tracing::warn!("Export: {e}");
            }
        }
    });
}
