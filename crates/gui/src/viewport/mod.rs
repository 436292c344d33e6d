//! 3D viewport panel with OpenGL rendering

mod gl_renderer;
pub use splice_viewer_lib::viewport::{camera, mesh, picking};
mod overlays;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use egui::Ui;
use shared::PartId;

use crate::build::AssemblyCache;
use crate::controller::ViewportController;
use crate::error::{ViewerError, ViewerResult};
use crate::i18n::t;
use crate::state::settings::GridSettings;
use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;
use mesh::MeshData;
use picking::pick_part;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: ViewerResult<Arc<Mutex<GlRenderer>>>,
    cache: AssemblyCache,
    /// Screen rectangle of the last frame (for cropping captures)
    rect: Option<egui::Rect>,
}

impl ViewportPanel {
    pub fn new(state: &AppState) -> Self {
        Self {
            camera: ArcBallCamera::new(&state.settings.camera),
            gl_renderer: Err(ViewerError::render_init("no OpenGL context")),
            cache: AssemblyCache::new(),
            rect: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context, grid: &GridSettings) {
        self.gl_renderer = GlRenderer::new(gl, grid).map(|r| Arc::new(Mutex::new(r)));
        if let Err(e) = &self.gl_renderer {
            tracing::error!("{e}");
        }
    }

    /// Release GPU resources
    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Ok(renderer) = &self.gl_renderer {
            if let Ok(mut r) = renderer.lock() {
                r.destroy(gl);
            }
        }
        self.gl_renderer = Err(ViewerError::render_init("renderer released"));
    }

    pub fn reset_camera(&mut self, state: &AppState) {
        self.camera = ArcBallCamera::new(&state.settings.camera);
    }

    /// Viewport rectangle of the last frame, in points
    pub fn rect(&self) -> Option<egui::Rect> {
        self.rect
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState, controller: &mut ViewportController) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );
        self.rect = Some(rect);

        // ── Camera controls ─────────────────────────────
        self.handle_camera(&response, ui);

        // ── Build part meshes BEFORE picking ─────────────────────────
        self.sync_cache(state);

        // ── Hover picking ───────────────────────────────
        self.handle_hover(&response, rect, state);
        self.sync_cache(state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter_at(rect);

        if let Err(e) = &self.gl_renderer {
            overlays::draw_placeholder(&painter, rect, t("viewport.unavailable"), &e.to_string());
            return;
        }

        if let Err(e) = state.parts() {
            overlays::draw_placeholder(&painter, rect, t("viewport.invalid_params"), &e.to_string());
            return;
        }

        // ── GL rendering ────────────────────────────────────────
        // Queued even after a failure so the upload is retried
        self.render_gl(ui, rect, state);
        if let Some(e) = self.render_error() {
            overlays::draw_placeholder(&painter, rect, t("viewport.unavailable"), &e.to_string());
            return;
        }
        controller.present();

        // ── Overlays ─────────────────────────────────────
        self.draw_overlays(&painter, rect, state);
    }

    /// Failure of the renderer's last paint, if any
    fn render_error(&self) -> Option<ViewerError> {
        let renderer = self.gl_renderer.as_ref().ok()?;
        let r = renderer.lock().ok()?;
        r.last_error().cloned()
    }

    fn handle_camera(&mut self, response: &egui::Response, ui: &Ui) {
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            self.camera.pan(delta.x, delta.y);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.002);
            }
        }

        if response.double_clicked() {
            self.camera.reset();
        }
    }

    fn handle_hover(&self, response: &egui::Response, rect: egui::Rect, state: &mut AppState) {
        let hit = match response.hover_pos() {
            Some(pos) if !response.dragged() => {
                let ray = self.camera.screen_ray(pos, rect);
                pick_part(&ray, self.cache.aabbs(), state.frame.rotation())
            }
            _ => None,
        };
        state.interaction.update_hover(hit);
    }

    fn sync_cache(&mut self, state: &AppState) {
        let version = state.params_version();
        match state.parts() {
            Ok(parts) => {
                let hovered = state.interaction.hovered();
                if !self.cache.is_valid(version, hovered) {
                    self.cache.rebuild(parts, &state.interaction, version);
                }
            }
            Err(_) => self.cache.clear(version),
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Ok(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera = self.camera;

        let meshes: HashMap<PartId, MeshData> = self.cache.meshes_clone();
        let version = self.cache.rebuild_count();

        let grid_settings = state.settings.grid.clone();
        let lighting = state.settings.lighting.clone();
        let bg_color = state.settings.viewport.background_color;
        let rotation = state.frame.rotation();

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    if let Err(e) = r.prepare(gl, &grid_settings, &meshes, version) {
                        tracing::error!("GPU upload failed: {e}");
                        return;
                    }

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible: grid_settings.visible,
                        bg_color,
                        rotation,
                        lighting: lighting.clone(),
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
        overlays::draw_dimension_labels(painter, rect, &self.camera, state.params());

        if let (Some(id), Ok(parts)) = (state.interaction.hovered(), state.parts()) {
            if let Some(part) = parts.iter().find(|p| p.id == id) {
                overlays::draw_part_tooltip(
                    painter,
                    rect,
                    &self.camera,
                    part,
                    state.params(),
                    state.frame.rotation(),
                );
            }
        }

        overlays::draw_nav_hint(painter, rect, t("viewport.nav_hint"));
    }
}
