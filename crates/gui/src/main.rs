mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::build`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use splice_viewer_lib::annotations;
pub use splice_viewer_lib::build;
pub use splice_viewer_lib::controller;
pub use splice_viewer_lib::error;
pub use splice_viewer_lib::export;
pub use splice_viewer_lib::state;

use serde::de::DeserializeOwned;
use shared::{DesignResult, ParameterSet};

use app::SpliceApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "splice_viewer=info".into()),
        )
        .init();

    let params = parse_json_arg::<ParameterSet>("--params").unwrap_or_default();
    let design = parse_json_arg::<DesignResult>("--result");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Beam Splice Visualizer")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "splice-viewer",
        native_options,
        Box::new(move |cc| Ok(Box::new(SpliceApp::new(cc, params, design)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

/// Read `<flag> <path>` from the command line and parse the file as JSON
fn parse_json_arg<T: DeserializeOwned>(flag: &str) -> Option<T> {
    let args: Vec<String> = std::env::args().collect();
    let path = args
        .iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))?;

    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str::<T>(&json) {
            Ok(value) => {
                tracing::info!("Loaded {flag} from {path}");
                Some(value)
            }
            Err(e) => {
                tracing::error!("Failed to parse {flag} JSON from {path}: {e}");
                None
            }
        },
        Err(e) => {
            tracing::error!("Failed to read {flag} file {path}: {e}");
            None
        }
    }
}
