//! Viewer error types.

use shared::InvalidParameterError;
use thiserror::Error;

/// Result alias for viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// A non-positive dimension reached the geometry builder
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    /// The GL context, shaders, or GPU buffers could not be acquired
    #[error("3D view unavailable: {reason}")]
    RenderInit { reason: String },

    /// Export requested before the viewport produced a frame
    #[error("No rendered frame available to capture yet")]
    CaptureUnavailable,

    #[error("Image encoding failed: {reason}")]
    ImageEncode { reason: String },
}

impl ViewerError {
    pub fn render_init(reason: impl Into<String>) -> Self {
        ViewerError::RenderInit {
            reason: reason.into(),
        }
    }
}
