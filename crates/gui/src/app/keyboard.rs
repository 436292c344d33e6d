//! Keyboard shortcut handling

use eframe::egui;

use crate::controller::ViewportController;
use crate::state::AppState;
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(
    ctx: &egui::Context,
    state: &mut AppState,
    viewport: &mut ViewportPanel,
    controller: &mut ViewportController,
) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (toggle_rotation, toggle_fullscreen, export, reset_camera) = ctx.input(|i| {
        (
            // R: start/stop auto-rotation
            i.key_pressed(egui::Key::R) && !i.modifiers.command,
            // F11: fullscreen
            i.key_pressed(egui::Key::F11),
            // Ctrl+S: export snapshot
            i.modifiers.command && i.key_pressed(egui::Key::S),
            // Home: reset camera
            i.key_pressed(egui::Key::Home),
        )
    });

    if toggle_rotation {
        toolbar::action_toggle_rotation(state);
    }
    if toggle_fullscreen {
        toolbar::action_toggle_fullscreen(ctx, state, controller);
    }
    if export {
        if let Err(e) = toolbar::action_export(ctx, controller) {
            tracing::warn!("Export: {e}");
        }
    }
    if reset_camera {
        viewport.reset_camera(state);
    }
}
