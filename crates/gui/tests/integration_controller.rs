//! Integration tests for the viewport controller: fullscreen reconciliation
//! and capture requests across frames.

use splice_viewer_lib::controller::{
    ViewportController, CAPTURE_TIMEOUT_FRAMES, FULLSCREEN_SETTLE_FRAMES,
};
use splice_viewer_lib::fixtures::solid_frame;
use splice_viewer_lib::state::InteractionState;

#[test]
fn test_fullscreen_round_trip_with_platform() {
    let mut c = ViewportController::new();
    let mut s = InteractionState::default();

    assert!(c.toggle_fullscreen(&mut s));
    // Platform lags a couple of frames
    c.reconcile_fullscreen(Some(false), &mut s);
    c.reconcile_fullscreen(Some(false), &mut s);
    assert!(s.fullscreen());
    assert!(c.fullscreen_pending());

    c.reconcile_fullscreen(Some(true), &mut s);
    assert!(!c.fullscreen_pending());
    assert!(s.fullscreen());

    assert!(!c.toggle_fullscreen(&mut s));
    c.reconcile_fullscreen(Some(false), &mut s);
    assert!(!s.fullscreen());
    assert!(!c.fullscreen_pending());
}

#[test]
fn test_refused_fullscreen_falls_back() {
    let mut c = ViewportController::new();
    let mut s = InteractionState::default();
    c.toggle_fullscreen(&mut s);

    for _ in 0..FULLSCREEN_SETTLE_FRAMES - 1 {
        c.reconcile_fullscreen(Some(false), &mut s);
    }
    assert!(s.fullscreen());

    c.reconcile_fullscreen(Some(false), &mut s);
    assert!(!s.fullscreen());
    assert!(!c.fullscreen_pending());
}

#[test]
fn test_external_exit_is_adopted() {
    let mut c = ViewportController::new();
    let mut s = InteractionState::default();
    c.toggle_fullscreen(&mut s);
    c.reconcile_fullscreen(Some(true), &mut s);

    // User pressed Escape / window manager left fullscreen
    c.reconcile_fullscreen(Some(false), &mut s);
    assert!(!s.fullscreen());
}

#[test]
fn test_unknown_platform_state_changes_nothing() {
    let mut c = ViewportController::new();
    let mut s = InteractionState::default();
    c.toggle_fullscreen(&mut s);
    for _ in 0..FULLSCREEN_SETTLE_FRAMES * 2 {
        c.reconcile_fullscreen(None, &mut s);
    }
    assert!(s.fullscreen());
    assert!(c.fullscreen_pending());
}

#[test]
fn test_fullscreen_keeps_auto_rotation() {
    let mut c = ViewportController::new();
    let mut s = InteractionState::default();
    c.toggle_fullscreen(&mut s);
    assert!(s.auto_rotating());
    assert_eq!(s.hovered(), None);
}

#[test]
fn test_capture_request_is_consumed_once() {
    let mut c = ViewportController::new();
    assert!(c.request_capture().is_err());
    assert!(!c.capture_requested());

    c.present();
    c.request_capture().unwrap();
    assert!(c.capture_requested());
    assert!(c.take_capture_request());
    assert!(!c.take_capture_request());

    c.store_capture(solid_frame(1, 1, [1, 2, 3, 255]));
    let png = c.export_image().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(0, 0).0, [1, 2, 3, 255]);
}

#[test]
fn test_capture_request_expires_without_screenshot() {
    let mut c = ViewportController::new();
    c.present();
    c.request_capture().unwrap();
    let expired = (0..CAPTURE_TIMEOUT_FRAMES).filter(|_| c.expire_capture()).count();
    assert_eq!(expired, 1);
    assert!(!c.capture_requested());
    assert!(!c.take_capture_request());
}
