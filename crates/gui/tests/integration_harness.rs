//! Integration tests for TestHarness.
//!
//! Drives the headless viewer: parameters, hover, auto-rotation, capture and export.

use std::collections::HashMap;

use glam::Vec3;
use shared::PartId;
use splice_viewer_lib::error::ViewerError;
use splice_viewer_lib::fixtures::*;
use splice_viewer_lib::harness::TestHarness;
use splice_viewer_lib::viewport::picking::{pick_part, Aabb, Ray};

/// Ray travelling along -Z through `(x, y)` in world space
fn ray_at(x: f32, y: f32) -> Ray {
    Ray {
        origin: Vec3::new(x, y, 1000.0),
        direction: Vec3::NEG_Z,
    }
}

#[test]
fn test_harness_builds_reference_assembly() {
    let mut h = TestHarness::new();
    h.sync();

    assert_eq!(h.mesh_count(), 6);
    assert!(h.error().is_none());
    for id in [PartId::Flange, PartId::Web, PartId::Bolt(0), PartId::CoverPlate] {
        let v = h.validate_mesh(id).unwrap();
        assert!(v.validate_all().is_empty(), "{id}");
    }
}

#[test]
fn test_hover_and_leave() {
    let mut h = TestHarness::new();
    assert_eq!(h.hover_ray(&ray_at(0.0, 170.0)), Some(PartId::Web));
    assert_eq!(h.state.interaction.hovered(), Some(PartId::Web));

    assert_eq!(h.hover_ray(&ray_at(50.0, 70.0)), Some(PartId::Bolt(2)));
    assert_eq!(h.state.interaction.hovered(), Some(PartId::Bolt(2)));

    assert_eq!(h.hover_ray(&ray_at(900.0, 900.0)), None);
    assert_eq!(h.state.interaction.hovered(), None);
}

#[test]
fn test_hover_rebuilds_colors_not_geometry() {
    let mut h = TestHarness::new();
    h.sync();
    let before = h.rebuild_count();
    let web_dims = h.validate_mesh(PartId::Web).unwrap().dimensions();

    h.hover(Some(PartId::Web));
    h.sync();
    assert_eq!(h.rebuild_count(), before + 1);
    assert_eq!(h.validate_mesh(PartId::Web).unwrap().dimensions(), web_dims);

    // Same hover again: cache stays valid
    h.hover(Some(PartId::Web));
    h.sync();
    assert_eq!(h.rebuild_count(), before + 1);
}

#[test]
fn test_auto_rotation_toggle() {
    let mut h = TestHarness::new();
    assert!(h.state.interaction.auto_rotating());
    h.tick(10);
    let spun = h.rotation();
    assert!(spun > 0.0);

    h.toggle_auto_rotate();
    h.tick(10);
    assert_eq!(h.rotation(), spun);

    h.toggle_auto_rotate();
    h.tick(1);
    assert!(h.rotation() > spun);
}

#[test]
fn test_picking_follows_rotation() {
    let h = TestHarness::new();
    let aabbs: HashMap<PartId, Aabb> = h
        .parts()
        .iter()
        .map(|p| (p.id, Aabb::from_part(p)))
        .collect();

    // After a quarter turn, bolt 2 (x = +50) sits at z = -50 in world space
    let ray = Ray {
        origin: Vec3::new(500.0, 70.0, -50.0),
        direction: Vec3::NEG_X,
    };
    assert_eq!(pick_part(&ray, &aabbs, 0.0), None);
    assert_eq!(
        pick_part(&ray, &aabbs, std::f32::consts::FRAC_PI_2),
        Some(PartId::Bolt(2))
    );
}

#[test]
fn test_invalid_params_then_recover() {
    let mut h = TestHarness::new();
    h.hover(Some(PartId::Flange));
    h.set_params(invalid_params());
    h.sync();

    assert_eq!(h.mesh_count(), 0);
    assert!(h.parts().is_empty());
    assert!(h.error().is_some());
    assert_eq!(h.state.interaction.hovered(), None);

    h.set_params(params(250.0, 350.0, 18.0, 9.0, 16.0));
    h.sync();
    assert!(h.error().is_none());
    assert_eq!(h.mesh_count(), 6);
    let plate = h.part(PartId::CoverPlate).unwrap();
    assert_eq!(plate.position[1], 18.0 + 350.0 + 5.0);
}

#[test]
fn test_params_change_rebuilds_meshes() {
    let mut h = TestHarness::new();
    h.sync();
    let before = h.rebuild_count();

    h.set_params_json(r#"{"flangeWidth": 320}"#).unwrap();
    h.sync();
    assert_eq!(h.rebuild_count(), before + 1);
    let v = h.validate_mesh(PartId::Flange).unwrap();
    assert!(v.assert_dimensions_approx([320.0, 20.0, 20.0], 0.01));
}

#[test]
fn test_export_before_first_frame_is_rejected() {
    let mut h = TestHarness::new();
    let err = h.capture(solid_frame(4, 4, [255, 255, 255, 255])).unwrap_err();
    assert_eq!(err, ViewerError::CaptureUnavailable);
    assert_eq!(h.export_png().unwrap_err(), ViewerError::CaptureUnavailable);
}

#[test]
fn test_capture_and_export_png() {
    let mut h = TestHarness::new();
    h.present_frame();
    h.capture(solid_frame(8, 6, [236, 240, 241, 255])).unwrap();

    let png = h.export_png().unwrap();
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (8, 6));
    assert_eq!(decoded.get_pixel(3, 2).0, [236, 240, 241, 255]);
}

#[test]
fn test_export_uses_latest_capture() {
    let mut h = TestHarness::new();
    h.present_frame();
    h.capture(solid_frame(2, 2, [0, 0, 0, 255])).unwrap();
    h.capture(solid_frame(3, 1, [255, 0, 0, 255])).unwrap();

    let decoded = image::load_from_memory(&h.export_png().unwrap())
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
}
