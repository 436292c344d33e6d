//! Headless test harness for driving the viewer without a window.
//!
//! Mirrors one frame of the app: parameters → parts → hover and rotation →
//! cached meshes → capture and export. No GL context is involved.

use shared::{ParameterSet, PartDescriptor, PartId};

use crate::build::AssemblyCache;
use crate::controller::ViewportController;
use crate::error::ViewerResult;
use crate::export::CapturedFrame;
use crate::state::{AppState, ViewerSettings};
use crate::validation::MeshValidator;
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::{pick_part, Ray};

/// Headless test harness: app state, viewport controller, and mesh cache
pub struct TestHarness {
    pub state: AppState,
    pub controller: ViewportController,
    cache: AssemblyCache,
}

impl TestHarness {
    /// Harness with default settings and the reference parameters.
    pub fn new() -> Self {
        Self::with_params(ParameterSet::default())
    }

    pub fn with_params(params: ParameterSet) -> Self {
        Self {
            state: AppState::new(ViewerSettings::default(), params),
            controller: ViewportController::new(),
            cache: AssemblyCache::new(),
        }
    }

    // ── Parameters ────────────────────────────────────────────

    pub fn set_params(&mut self, params: ParameterSet) {
        self.state.set_params(params);
    }

    /// Apply a parameter set from JSON (camelCase keys, missing keys default)
    pub fn set_params_json(&mut self, json: &str) -> Result<(), String> {
        let params: ParameterSet =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        self.set_params(params);
        Ok(())
    }

    /// Export the current parameters as JSON
    pub fn params_json(&self) -> String {
        serde_json::to_string_pretty(self.state.params()).unwrap_or_default()
    }

    // ── Interaction ───────────────────────────────────────────

    /// Feed a pick result, as the viewport does on pointer motion
    pub fn hover(&mut self, hit: Option<PartId>) {
        self.state.interaction.update_hover(hit);
    }

    /// Pick with a world-space ray against the current cache, then hover the hit
    pub fn hover_ray(&mut self, ray: &Ray) -> Option<PartId> {
        self.sync();
        let hit = pick_part(ray, self.cache.aabbs(), self.state.frame.rotation());
        self.hover(hit);
        hit
    }

    /// Advance `n` render ticks
    pub fn tick(&mut self, n: usize) {
        for _ in 0..n {
            self.state.tick();
        }
    }

    pub fn toggle_auto_rotate(&mut self) {
        self.state.interaction.toggle_auto_rotate();
    }

    pub fn rotation(&self) -> f32 {
        self.state.frame.rotation()
    }

    // ── Build + inspection ────────────────────────────────────

    /// Bring the mesh cache up to date, the way the viewport does per frame
    pub fn sync(&mut self) {
        let version = self.state.params_version();
        match self.state.parts() {
            Ok(parts) => {
                let hovered = self.state.interaction.hovered();
                if !self.cache.is_valid(version, hovered) {
                    self.cache.rebuild(parts, &self.state.interaction, version);
                }
            }
            Err(_) => self.cache.clear(version),
        }
    }

    pub fn parts(&self) -> &[PartDescriptor] {
        self.state.parts().unwrap_or(&[])
    }

    pub fn part(&self, id: PartId) -> Option<&PartDescriptor> {
        self.parts().iter().find(|p| p.id == id)
    }

    /// Message shown instead of geometry, if the parameters were rejected
    pub fn error(&self) -> Option<String> {
        self.state.parts().err().map(|e| e.to_string())
    }

    pub fn mesh_count(&self) -> usize {
        self.cache.meshes().len()
    }

    pub fn mesh_of(&self, id: PartId) -> Option<&MeshData> {
        self.cache.meshes().get(&id)
    }

    /// Create a validator for a part's mesh
    pub fn validate_mesh(&self, id: PartId) -> Option<MeshValidator<'_>> {
        self.mesh_of(id).map(MeshValidator::new)
    }

    pub fn rebuild_count(&self) -> u64 {
        self.cache.rebuild_count()
    }

    // ── Frames and export ─────────────────────────────────────

    /// Sync and mark one frame as presented
    pub fn present_frame(&mut self) {
        self.sync();
        self.state.tick();
        self.controller.present();
    }

    /// Request a capture and deliver `frame` as its result
    pub fn capture(&mut self, frame: CapturedFrame) -> ViewerResult<()> {
        self.controller.request_capture()?;
        if self.controller.take_capture_request() {
            self.controller.store_capture(frame);
        }
        Ok(())
    }

    pub fn export_png(&self) -> ViewerResult<Vec<u8>> {
        self.controller.export_image()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_new_harness_has_six_parts() {
        let mut h = TestHarness::new();
        h.sync();
        assert_eq!(h.parts().len(), 6);
        assert_eq!(h.mesh_count(), 6);
        assert!(h.error().is_none());
    }

    #[test]
    fn test_params_json_round_trip() {
        let mut h = TestHarness::new();
        h.set_params_json(r#"{"flangeWidth": 250, "boltType": "Bearing Bolt"}"#)
            .unwrap();
        let json = h.params_json();

        let mut h2 = TestHarness::new();
        h2.set_params_json(&json).unwrap();
        assert_eq!(h2.state.params(), h.state.params());
        assert_eq!(h2.state.params().flange_width, 250.0);
    }

    #[test]
    fn test_bad_json_reports_error() {
        let mut h = TestHarness::new();
        assert!(h.set_params_json("{not json").is_err());
        assert!(h.set_params_json(r#"{"boltType": "Hex"}"#).is_err());
    }

    #[test]
    fn test_invalid_params_clear_meshes() {
        let mut h = TestHarness::new();
        h.sync();
        h.set_params(fixtures::invalid_params());
        h.sync();
        assert_eq!(h.mesh_count(), 0);
        assert!(h.error().unwrap().contains("webHeight"));
    }

    #[test]
    fn test_rotation_does_not_rebuild() {
        let mut h = TestHarness::new();
        h.sync();
        let before = h.rebuild_count();
        h.tick(100);
        h.sync();
        assert_eq!(h.rebuild_count(), before);
        assert!(h.rotation() > 0.0);
    }

    #[test]
    fn test_validate_mesh() {
        let mut h = TestHarness::new();
        h.sync();
        let v = h.validate_mesh(PartId::Web).unwrap();
        assert!(v.validate_all().is_empty());
        assert!(v.assert_dimensions_approx([10.0, 300.0, 20.0], 0.01));
    }
}
