// Library crate: exposes the headless, testable parts of the splice viewer.
// GUI-specific modules (app, ui, GL rendering, overlays) remain in the binary crate.

pub mod annotations;
pub mod build;
pub mod controller;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod harness;
pub mod state;
pub mod validation;

/// Subset of viewport types that need no GL context (camera math, meshes, picking).
/// The GL renderer and overlays stay in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod mesh;
    pub mod picking;
}
