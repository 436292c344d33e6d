//! Factory functions for creating test data.
//!
//! Parameter sets, design results, and captured frames used by unit tests,
//! integration tests, and the headless harness.

use shared::*;

use crate::export::CapturedFrame;

// ── Parameter factories ─────────────────────────────────────────

/// Reference section: 200 × 20 flange, 300 × 10 web, Ø10 HSFG 8.8 bolts.
pub fn reference_params() -> ParameterSet {
    ParameterSet::default()
}

/// Parameter set with custom section lengths and default bolt grade.
pub fn params(
    flange_width: f64,
    web_height: f64,
    flange_thickness: f64,
    web_thickness: f64,
    bolt_diameter: f64,
) -> ParameterSet {
    ParameterSet {
        flange_width,
        web_height,
        flange_thickness,
        web_thickness,
        bolt_diameter,
        ..Default::default()
    }
}

/// Flange narrower than two edge distances: the outer bolts swap sides.
pub fn narrow_flange_params() -> ParameterSet {
    ParameterSet {
        flange_width: 60.0,
        ..Default::default()
    }
}

/// Parameters rejected by the builder (zero web height).
pub fn invalid_params() -> ParameterSet {
    ParameterSet {
        web_height: 0.0,
        ..Default::default()
    }
}

/// Parameters with a non-default bolt specification.
pub fn bolt_spec_params(bolt_type: BoltType, property_class: PropertyClass) -> ParameterSet {
    ParameterSet {
        bolt_type,
        property_class,
        ..Default::default()
    }
}

// ── Design results ──────────────────────────────────────────────

/// A passing design result with plausible values.
pub fn safe_result() -> DesignResult {
    DesignResult {
        section_size: "ISMB 300".to_string(),
        bending_moment: 85_000.0,
        shear_force: 120.0,
        axial_force: 40.0,
        flange_thickness: 12.4,
        web_thickness: 7.5,
        member_capacity: 210.0,
        flange_plate_thickness: 10.0,
        web_plate_thickness: 8.0,
        weld_strength: 189.0,
        design_status: DesignStatus::Safe,
        ..Default::default()
    }
}

/// A failing design result.
pub fn unsafe_result() -> DesignResult {
    DesignResult {
        member_capacity: 95.0,
        design_status: DesignStatus::Unsafe,
        ..safe_result()
    }
}

// ── Frames ──────────────────────────────────────────────────────

/// Solid-color frame of the given size.
pub fn solid_frame(width: u32, height: u32, rgba: [u8; 4]) -> CapturedFrame {
    let pixels = rgba
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect();
    CapturedFrame {
        width,
        height,
        rgba: pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_params_valid() {
        assert!(reference_params().validate().is_ok());
        assert!(narrow_flange_params().validate().is_ok());
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert_eq!(invalid_params().validate().unwrap_err().field, "webHeight");
    }

    #[test]
    fn test_custom_params() {
        let p = params(250.0, 400.0, 16.0, 12.0, 20.0);
        assert_eq!(p.web_height, 400.0);
        assert_eq!(p.bolt_type, BoltType::Hsfg);
    }

    #[test]
    fn test_results_status() {
        assert_eq!(safe_result().design_status, DesignStatus::Safe);
        assert_eq!(unsafe_result().design_status, DesignStatus::Unsafe);
        assert_eq!(unsafe_result().material, "Fe 410 WA");
    }

    #[test]
    fn test_solid_frame_size() {
        let f = solid_frame(3, 2, [1, 2, 3, 4]);
        assert_eq!(f.rgba.len(), 24);
        assert_eq!(&f.rgba[4..8], &[1, 2, 3, 4]);
    }
}
