pub mod frame;
pub mod interaction;
pub mod settings;

pub use frame::{advance_rotation, AssemblyFrame};
pub use interaction::{part_color, InteractionState};
pub use settings::ViewerSettings;

use shared::{DesignResult, InvalidParameterError, ParameterSet, PartDescriptor};

use crate::build;

/// Panel visibility flags
pub struct PanelVisibility {
    pub parameters: bool,
    pub results: bool,
    pub settings_window: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            parameters: true,
            results: true,
            settings_window: false,
        }
    }
}

/// Combined application state
pub struct AppState {
    params: ParameterSet,
    parts: Result<Vec<PartDescriptor>, InvalidParameterError>,
    params_version: u64,
    pub interaction: InteractionState,
    pub frame: AssemblyFrame,
    pub settings: ViewerSettings,
    /// Latest calculation result, shown read-only
    pub design: Option<DesignResult>,
    pub panels: PanelVisibility,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewerSettings::load(), ParameterSet::default())
    }
}

impl AppState {
    pub fn new(settings: ViewerSettings, params: ParameterSet) -> Self {
        let parts = build::build(&params);
        if let Err(e) = &parts {
            tracing::warn!("Initial parameters rejected: {e}");
        }
        Self {
            params,
            parts,
            params_version: 0,
            interaction: InteractionState::default(),
            frame: AssemblyFrame::new(),
            settings,
            design: None,
            panels: PanelVisibility::default(),
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Part descriptors for the current parameters, or the rejection reason
    pub fn parts(&self) -> Result<&[PartDescriptor], &InvalidParameterError> {
        self.parts.as_deref()
    }

    /// Bumped every time the parameters (and therefore the parts) change
    pub fn params_version(&self) -> u64 {
        self.params_version
    }

    /// Replace the parameters and rebuild all parts. Identical parameters
    /// are a no-op.
    pub fn set_params(&mut self, params: ParameterSet) {
        if params == self.params {
            return;
        }
        self.parts = build::build(&params);
        match &self.parts {
            Ok(parts) => tracing::info!(
                "Rebuilt {} parts (flange {} x {}, web {} x {})",
                parts.len(),
                params.flange_width,
                params.flange_thickness,
                params.web_height,
                params.web_thickness
            ),
            Err(e) => {
                tracing::warn!("Parameters rejected: {e}");
                self.interaction.set_hover(None);
            }
        }
        self.params = params;
        self.params_version += 1;
    }

    /// One render tick: advance the auto-rotation
    pub fn tick(&mut self) {
        self.frame
            .tick(self.interaction.auto_rotating(), self.settings.rotation.step);
    }
}
