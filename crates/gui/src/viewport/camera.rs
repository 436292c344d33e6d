use glam::{Mat4, Vec3, Vec4};

use super::picking::Ray;
use crate::state::settings::CameraSettings;

/// Initial eye position (mm), looking at the assembly origin
pub const INITIAL_EYE: [f32; 3] = [500.0, 400.0, 500.0];

/// Orbit camera for the 3D viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcBallCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self::new(&CameraSettings::default())
    }
}

impl ArcBallCamera {
    pub fn new(settings: &CameraSettings) -> Self {
        let eye = Vec3::from(INITIAL_EYE);
        let distance = eye.length();
        let min_distance = settings.min_distance.min(settings.max_distance);
        let max_distance = settings.max_distance.max(settings.min_distance);
        Self {
            yaw: eye.x.atan2(eye.z),
            pitch: (eye.y / distance).asin(),
            distance: distance.clamp(min_distance, max_distance),
            target: Vec3::ZERO,
            fov: settings.fov_degrees.to_radians(),
            min_distance,
            max_distance,
        }
    }

    /// Restore the initial pose, keeping the configured limits
    pub fn reset(&mut self) {
        let eye = Vec3::from(INITIAL_EYE);
        let distance = eye.length();
        self.yaw = eye.x.atan2(eye.z);
        self.pitch = (eye.y / distance).asin();
        self.distance = distance.clamp(self.min_distance, self.max_distance);
        self.target = Vec3::ZERO;
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-1.5, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(self.min_distance, self.max_distance);
    }

    /// Pan in screen space; deltas are in pixels and scale with distance
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let scale = self.distance * 0.0015;
        let right = self.right_vector();
        let up = self.up_vector();
        self.target += (-right * dx + up * dy) * scale;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 1.0, 10_000.0)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// Project a 3D point to 2D screen coords (for overlay text)
    pub fn project(&self, point: [f32; 3], rect: egui::Rect) -> Option<egui::Pos2> {
        let aspect = rect.width() / rect.height();
        let vp = self.view_projection(aspect);
        let p = vp * Vec4::new(point[0], point[1], point[2], 1.0);
        if p.w <= 0.0 {
            return None;
        }
        let ndc = p.truncate() / p.w;
        let screen_x = rect.center().x + ndc.x * rect.width() * 0.5;
        let screen_y = rect.center().y - ndc.y * rect.height() * 0.5;
        Some(egui::pos2(screen_x, screen_y))
    }

    /// Cast a ray from a screen position into the 3D scene
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let aspect = rect.width() / rect.height();

        // Screen → NDC
        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        let vp_inv = self.view_projection(aspect).inverse();

        let near_world = vp_inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: self.eye_position(),
            direction: (far - near).normalize_or_zero(),
        }
    }
}
