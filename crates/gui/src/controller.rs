//! Viewport controller: fullscreen toggling and snapshot export.
//!
//! Holds no GL resources. The binary forwards the requests it produces as
//! viewport commands and feeds back what the platform reports.

use crate::error::{ViewerError, ViewerResult};
use crate::export::{self, CapturedFrame};
use crate::state::InteractionState;

/// Frames a fullscreen request may take before the platform's own state wins
pub const FULLSCREEN_SETTLE_FRAMES: u32 = 30;

/// Frames a capture request waits for the backend's screenshot before it is dropped
pub const CAPTURE_TIMEOUT_FRAMES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingFullscreen {
    target: bool,
    frames_left: u32,
}

#[derive(Debug, Default)]
pub struct ViewportController {
    pending_fullscreen: Option<PendingFullscreen>,
    presented: bool,
    /// Frames left before a pending capture request expires
    pending_capture: Option<u32>,
    last_capture: Option<CapturedFrame>,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Fullscreen ───────────────────────────────────────────

    /// Flip the fullscreen flag and return the state to request from the platform
    pub fn toggle_fullscreen(&mut self, interaction: &mut InteractionState) -> bool {
        let target = !interaction.fullscreen();
        interaction.set_fullscreen(target);
        self.pending_fullscreen = Some(PendingFullscreen {
            target,
            frames_left: FULLSCREEN_SETTLE_FRAMES,
        });
        tracing::info!("fullscreen requested: {target}");
        target
    }

    /// Whether a fullscreen request is still waiting for the platform
    pub fn fullscreen_pending(&self) -> bool {
        self.pending_fullscreen.is_some()
    }

    /// Align the fullscreen flag with the platform's report for this frame.
    /// `None` means the platform does not report it; nothing changes.
    pub fn reconcile_fullscreen(&mut self, platform: Option<bool>, interaction: &mut InteractionState) {
        let Some(actual) = platform else {
            return;
        };

        if let Some(pending) = self.pending_fullscreen.as_mut() {
            if actual == pending.target {
                self.pending_fullscreen = None;
                return;
            }
            pending.frames_left = pending.frames_left.saturating_sub(1);
            if pending.frames_left == 0 {
                tracing::warn!(
                    "fullscreen request ({}) not honored by the platform, keeping {actual}",
                    pending.target
                );
                self.pending_fullscreen = None;
                interaction.set_fullscreen(actual);
            }
            return;
        }

        if actual != interaction.fullscreen() {
            tracing::info!("fullscreen changed externally: {actual}");
            interaction.set_fullscreen(actual);
        }
    }

    // ── Frames and capture ───────────────────────────────────

    /// Record that the viewport has rendered a frame
    pub fn present(&mut self) {
        self.presented = true;
    }

    pub fn has_presented(&self) -> bool {
        self.presented
    }

    /// Ask for a snapshot of the next frame
    pub fn request_capture(&mut self) -> ViewerResult<()> {
        if !self.has_presented() {
            return Err(ViewerError::CaptureUnavailable);
        }
        self.pending_capture = Some(CAPTURE_TIMEOUT_FRAMES);
        tracing::info!("capture requested");
        Ok(())
    }

    pub fn capture_requested(&self) -> bool {
        self.pending_capture.is_some()
    }

    /// Consume the pending capture request, if any
    pub fn take_capture_request(&mut self) -> bool {
        self.pending_capture.take().is_some()
    }

    /// Count down a pending request once per frame. Returns true when the
    /// request has just been dropped because no screenshot arrived in time.
    pub fn expire_capture(&mut self) -> bool {
        let Some(frames_left) = self.pending_capture.as_mut() else {
            return false;
        };
        *frames_left = frames_left.saturating_sub(1);
        if *frames_left > 0 {
            return false;
        }
        self.pending_capture = None;
        tracing::warn!("no screenshot after {CAPTURE_TIMEOUT_FRAMES} frames, capture dropped");
        true
    }

    /// Keep the latest captured frame (already cropped to the viewport)
    pub fn store_capture(&mut self, frame: CapturedFrame) {
        tracing::info!("captured {}x{} frame", frame.width, frame.height);
        self.pending_capture = None;
        self.last_capture = Some(frame);
    }

    /// PNG bytes of the latest captured frame.
    ///
    /// Capturing is deferred: presenting a frame only makes a capture
    /// possible. Callers go through [`request_capture`](Self::request_capture),
    /// hand the screenshot delivered for the next frame to
    /// [`store_capture`](Self::store_capture), and only then export. Until a
    /// frame has been stored this fails with `CaptureUnavailable`, even after
    /// the first render.
    pub fn export_image(&self) -> ViewerResult<Vec<u8>> {
        let frame = self
            .last_capture
            .as_ref()
            .ok_or(ViewerError::CaptureUnavailable)?;
        let png = export::encode_png(frame)?;
        tracing::info!("exported snapshot ({} bytes)", png.len());
        Ok(png)
    }
}
