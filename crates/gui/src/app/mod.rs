//! Main application module

mod keyboard;
mod menus;
mod styles;

use std::sync::Arc;

use eframe::egui;
use shared::{DesignResult, ParameterSet};

use crate::controller::ViewportController;
use crate::error::ViewerResult;
use crate::export::{CapturedFrame, DEFAULT_FILE_NAME};
use crate::i18n::{set_lang, t};
use crate::state::{AppState, ViewerSettings};
use crate::ui::{parameters, results, status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct SpliceApp {
    state: AppState,
    viewport: ViewportPanel,
    controller: ViewportController,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Outcome of the last export, shown in the status bar
    notice: Option<String>,
}

impl SpliceApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        params: ParameterSet,
        design: Option<DesignResult>,
    ) -> Self {
        let mut state = AppState::new(ViewerSettings::load(), params);
        state.design = design;

        set_lang(state.settings.ui.language);
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new(&state);

        // Initialize GL renderer if glow context is available
        match cc.gl.as_ref() {
            Some(gl) => viewport.init_gl(gl, &state.settings.grid),
            None => tracing::error!("No glow context: 3D view disabled"),
        }

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            viewport,
            controller: ViewportController::new(),
            last_font_size,
            notice: None,
        }
    }
}

impl eframe::App for SpliceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        self.state.tick();

        let platform_fullscreen = ctx.input(|i| i.viewport().fullscreen);
        self.controller
            .reconcile_fullscreen(platform_fullscreen, &mut self.state.interaction);

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport, &mut self.controller);

        self.handle_screenshot(ctx);
        if self.controller.expire_capture() {
            self.notice = Some(t("status.capture_timeout").to_string());
        }

        let fullscreen = self.state.interaction.fullscreen();

        // ── Menu bar ──────────────────────────────────────────
        if !fullscreen {
            egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
                egui::menu::bar(ui, |ui| {
                    menus::file_menu(ui, &mut self.controller);
                    menus::view_menu(ui, &mut self.state, &mut self.viewport, &mut self.controller);
                    menus::settings_menu(ui, &mut self.state);
                });
            });
        }

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state, &mut self.viewport);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state, &mut self.controller);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state, self.notice.as_deref());
            });

        if !fullscreen {
            // ── Left panel: Parameters ───────────────────────────
            if self.state.panels.parameters {
                egui::SidePanel::left("parameters")
                    .default_width(240.0)
                    .width_range(180.0..=400.0)
                    .resizable(true)
                    .frame(
                        egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)),
                    )
                    .show(ctx, |ui| {
                        parameters::show(ui, &mut self.state);
                    });
            }

            // ── Right panel: Design results ──────────────────────
            if self.state.panels.results {
                egui::SidePanel::right("results")
                    .default_width(280.0)
                    .width_range(200.0..=480.0)
                    .resizable(true)
                    .frame(
                        egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)),
                    )
                    .show(ctx, |ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("results_scroll")
                            .show(ui, |ui| {
                                results::show(ui, &self.state);
                            });
                    });
            }
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state, &mut self.controller);
            });

        // Continuous redraw only while spinning or waiting on the platform
        if self.state.interaction.auto_rotating()
            || self.controller.capture_requested()
            || self.controller.fullscreen_pending()
        {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }
}

impl SpliceApp {
    /// Pick up a screenshot delivered by the backend, crop it to the viewport
    /// and offer to save it as PNG.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let image = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = image else {
            return;
        };
        if !self.controller.take_capture_request() {
            return;
        }

        match crop_to_viewport(&image, self.viewport.rect(), ctx.pixels_per_point()) {
            Ok(frame) => {
                self.controller.store_capture(frame);
                self.save_png();
            }
            Err(e) => {
                tracing::error!("Capture failed: {e}");
                self.notice = Some(format!("{}: {e}", t("status.export_failed")));
            }
        }
    }

    fn save_png(&mut self) {
        let png = match self.controller.export_image() {
            Ok(png) => png,
            Err(e) => {
                tracing::error!("Export failed: {e}");
                self.notice = Some(format!("{}: {e}", t("status.export_failed")));
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_title(t("menu.export_png_title"))
            .add_filter("PNG", &["png"])
            .set_file_name(DEFAULT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        match std::fs::write(&path, &png) {
            Ok(()) => {
                tracing::info!("Saved snapshot to {}", path.display());
                self.notice = Some(format!("{}: {}", t("status.exported"), path.display()));
            }
            Err(e) => {
                tracing::error!("Failed to write {}: {e}", path.display());
                self.notice = Some(format!("{}: {e}", t("status.export_failed")));
            }
        }
    }
}

fn crop_to_viewport(
    image: &Arc<egui::ColorImage>,
    rect: Option<egui::Rect>,
    pixels_per_point: f32,
) -> ViewerResult<CapturedFrame> {
    let region = match rect {
        Some(rect) => image.region(&rect, Some(pixels_per_point)),
        None => (**image).clone(),
    };
    let [width, height] = region.size;
    let rgba = region
        .pixels
        .iter()
        .flat_map(|c| c.to_srgba_unmultiplied())
        .collect();
    CapturedFrame::new(width as u32, height as u32, rgba)
}
