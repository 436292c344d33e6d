//! Viewer settings

use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// Ground grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Show grid
    pub visible: bool,
    /// Total grid width (mm)
    pub size: f32,
    /// Number of cells along each side
    pub divisions: u32,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 1000.0,
            divisions: 20,
            opacity: 0.6,
        }
    }
}

/// Orbit camera limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub min_distance: f32,
    pub max_distance: f32,
    pub fov_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            min_distance: 300.0,
            max_distance: 1000.0,
            fov_degrees: 45.0,
        }
    }
}

/// Ambient + one directional light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingSettings {
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    /// Directional light position; the light shines toward the origin
    pub light_position: [f32; 3],
    /// Draw projected shadows on the ground plane
    pub shadows: bool,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.5,
            directional_intensity: 1.2,
            light_position: [100.0, 100.0, 100.0],
            shadows: true,
        }
    }
}

/// Auto-rotation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationSettings {
    /// Angle added per render tick (radians)
    pub step: f32,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self { step: 0.005 }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [236, 240, 241],
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    pub language: Language,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Language::En,
        }
    }
}

/// All viewer settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewerSettings {
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub lighting: LightingSettings,
    #[serde(default)]
    pub rotation: RotationSettings,
    #[serde(default)]
    pub viewport: ViewportSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl ViewerSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "splice", "splice-viewer") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                match serde_json::from_str::<Self>(&json) {
                    Ok(settings) => return settings.sanitized(),
                    Err(e) => tracing::warn!("Ignoring malformed {}: {e}", config_path.display()),
                }
            }
        }
        Self::default()
    }

    /// Replace hand-edited values the viewer cannot use: non-finite numbers
    /// fall back to their defaults, the rest is clamped to the ranges the
    /// settings window offers.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let grid = &mut self.grid;
        grid.size = clamp_or(grid.size, 100.0, 5000.0, defaults.grid.size);
        grid.divisions = grid.divisions.clamp(1, 200);
        grid.opacity = clamp_or(grid.opacity, 0.0, 1.0, defaults.grid.opacity);

        let camera = &mut self.camera;
        camera.min_distance = clamp_or(camera.min_distance, 10.0, 20_000.0, defaults.camera.min_distance);
        camera.max_distance = clamp_or(
            camera.max_distance,
            camera.min_distance,
            20_000.0,
            defaults.camera.max_distance.max(camera.min_distance),
        );
        camera.fov_degrees = clamp_or(camera.fov_degrees, 10.0, 120.0, defaults.camera.fov_degrees);

        let lighting = &mut self.lighting;
        lighting.ambient_intensity =
            clamp_or(lighting.ambient_intensity, 0.0, 2.0, defaults.lighting.ambient_intensity);
        lighting.directional_intensity = clamp_or(
            lighting.directional_intensity,
            0.0,
            3.0,
            defaults.lighting.directional_intensity,
        );
        if lighting.light_position.iter().any(|v| !v.is_finite()) {
            lighting.light_position = defaults.lighting.light_position;
        }

        self.rotation.step = clamp_or(self.rotation.step, 0.0, 0.1, defaults.rotation.step);
        self.ui.font_size = clamp_or(self.ui.font_size, 8.0, 24.0, defaults.ui.font_size);
        self
    }

    /// Save settings to file
    pub fn save(&self) {
        let Some(dirs) = directories::ProjectDirs::from("com", "splice", "splice-viewer") else {
            return;
        };
        let config_dir = dirs.config_dir();
        if let Err(e) = std::fs::create_dir_all(config_dir) {
            tracing::error!("Failed to create config dir: {e}");
            return;
        }
        let config_path = config_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&config_path, json) {
                    tracing::error!("Failed to write settings: {e}");
                }
            }
            Err(e) => tracing::error!("Failed to serialize settings: {e}"),
        }
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let json = r#"{"grid": {"visible": false, "size": 500.0, "divisions": 10, "opacity": 1.0}}"#;
        let s: ViewerSettings = serde_json::from_str(json).unwrap();
        assert!(!s.grid.visible);
        assert_eq!(s.camera, CameraSettings::default());
        assert_eq!(s.rotation.step, 0.005);
    }

    #[test]
    fn test_defaults_match_reference_layout() {
        let s = ViewerSettings::default();
        assert_eq!(s.camera.min_distance, 300.0);
        assert_eq!(s.camera.max_distance, 1000.0);
        assert_eq!(s.lighting.ambient_intensity, 0.5);
        assert_eq!(s.lighting.directional_intensity, 1.2);
        assert_eq!(s.grid.divisions, 20);
    }

    #[test]
    fn test_non_finite_values_fall_back_to_defaults() {
        let mut s = ViewerSettings::default();
        s.rotation.step = f32::NAN;
        s.camera.fov_degrees = f32::INFINITY;
        s.lighting.light_position = [100.0, f32::NAN, 100.0];
        s.ui.font_size = f32::NEG_INFINITY;

        let s = s.sanitized();
        assert_eq!(s.rotation.step, 0.005);
        assert_eq!(s.camera.fov_degrees, 45.0);
        assert_eq!(s.lighting.light_position, [100.0, 100.0, 100.0]);
        assert_eq!(s.ui.font_size, 14.0);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let json = r#"{
            "rotation": {"step": 3.0},
            "camera": {"min_distance": 800.0, "max_distance": 200.0, "fov_degrees": 45.0},
            "grid": {"visible": true, "size": 1000.0, "divisions": 0, "opacity": 4.0}
        }"#;
        let s = serde_json::from_str::<ViewerSettings>(json).unwrap().sanitized();
        assert_eq!(s.rotation.step, 0.1);
        assert_eq!(s.camera.min_distance, 800.0);
        assert_eq!(s.camera.max_distance, 800.0);
        assert_eq!(s.grid.divisions, 1);
        assert_eq!(s.grid.opacity, 1.0);
    }

    #[test]
    fn test_defaults_survive_sanitizing() {
        assert_eq!(ViewerSettings::default().sanitized(), ViewerSettings::default());
    }
}
