//! Text shown over the viewport: hover tooltips and dimension labels.
//!
//! Positions are in the world frame. Dimension labels are fixed in the
//! world and do not follow the assembly rotation.

use shared::{ParameterSet, PartDescriptor, PartKind};

use crate::build::layout::COVER_PLATE_THICKNESS;

/// A label pinned to a world-space point
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLabel {
    pub text: String,
    pub position: [f32; 3],
}

/// Tooltip lines for a hovered part
pub fn part_tooltip(part: &PartDescriptor, params: &ParameterSet) -> Vec<String> {
    match part.kind {
        PartKind::Bolt => vec![
            format!("Bolt Ø{} mm", params.bolt_diameter),
            format!("Type: {}", params.bolt_type),
            format!("Class: {}", params.property_class),
        ],
        PartKind::Flange => vec![format!(
            "Flange {} × {} mm",
            params.flange_width, params.flange_thickness
        )],
        PartKind::Web => vec![format!(
            "Web {} × {} mm",
            params.web_height, params.web_thickness
        )],
        PartKind::CoverPlate => vec![format!(
            "Cover plate {} × {} mm",
            params.flange_width, COVER_PLATE_THICKNESS
        )],
    }
}

/// Where the tooltip attaches, in the assembly frame. Bolt tooltips sit one
/// diameter above the bolt.
pub fn tooltip_anchor(part: &PartDescriptor) -> [f32; 3] {
    let [x, y, z] = part.position;
    let lift = match part.kind {
        PartKind::Bolt => part.dimensions[1],
        _ => 0.0,
    };
    [x as f32, (y + lift) as f32, z as f32]
}

/// Overall dimension labels for the current parameters
pub fn dimension_labels(params: &ParameterSet) -> Vec<DimensionLabel> {
    vec![
        DimensionLabel {
            text: format!("Web Height: {}mm", params.web_height),
            position: [0.0, (params.web_height + 100.0) as f32, 0.0],
        },
        DimensionLabel {
            text: format!("Flange Width: {}mm", params.flange_width),
            position: [(params.flange_width / 2.0 + 80.0) as f32, 20.0, 0.0],
        },
    ]
}
