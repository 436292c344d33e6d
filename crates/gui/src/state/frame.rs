//! Cumulative rotation of the assembly about the vertical axis.

use std::f32::consts::TAU;

/// Angle added per tick when no setting overrides it (radians)
pub const DEFAULT_ROTATION_STEP: f32 = 0.005;

/// One render tick of auto-rotation. The result stays in [0, 2π).
/// A non-finite step leaves the angle unchanged.
pub fn advance_rotation(angle: f32, auto_rotating: bool, step: f32) -> f32 {
    if !auto_rotating || !step.is_finite() {
        return angle;
    }
    (angle + step).rem_euclid(TAU)
}

/// Rotation state of the rendered assembly. Starts at 0 and is never
/// reset afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyFrame {
    rotation: f32,
    ticks: u64,
}

impl AssemblyFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Render ticks seen so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self, auto_rotating: bool, step: f32) {
        self.rotation = advance_rotation(self.rotation, auto_rotating, step);
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_when_rotating() {
        let a = advance_rotation(0.0, true, DEFAULT_ROTATION_STEP);
        assert!((a - 0.005).abs() < 1e-7);
    }

    #[test]
    fn test_no_change_when_stopped() {
        let mut frame = AssemblyFrame::new();
        frame.tick(true, 0.1);
        let before = frame.rotation();
        for _ in 0..50 {
            frame.tick(false, 0.1);
        }
        assert_eq!(frame.rotation(), before);
        assert_eq!(frame.ticks(), 51);
    }

    #[test]
    fn test_wraps_past_full_turn() {
        let a = advance_rotation(TAU - 0.001, true, 0.005);
        assert!(a >= 0.0 && a < 0.01);
    }

    #[test]
    fn test_non_finite_step_keeps_angle() {
        let mut frame = AssemblyFrame::new();
        frame.tick(true, 0.25);
        frame.tick(true, f32::NAN);
        frame.tick(true, f32::INFINITY);
        assert_eq!(frame.rotation(), 0.25);
        assert!(frame.rotation().is_finite());
    }
}
