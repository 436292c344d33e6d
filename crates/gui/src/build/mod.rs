//! Splice geometry and per-part mesh building.

mod cache;
pub mod layout;

pub use cache::AssemblyCache;
pub use layout::{bolt_offsets, build};

use std::collections::HashMap;

use glam::Vec3;
use shared::{PartDescriptor, PartId};

use crate::state::{part_color, InteractionState};
use crate::viewport::mesh::{cube, MeshData};

/// Box mesh of one part, placed at its position in the assembly frame
pub fn part_mesh(part: &PartDescriptor, interaction: &InteractionState) -> MeshData {
    let [w, h, d] = part.dimensions;
    let [x, y, z] = part.position;
    let mut mesh = cube(w as f32, h as f32, d as f32, part_color(part, interaction));
    mesh.translate(Vec3::new(x as f32, y as f32, z as f32));
    mesh
}

/// Build meshes for every part, colored by the hover state
pub fn build_assembly_meshes(
    parts: &[PartDescriptor],
    interaction: &InteractionState,
) -> HashMap<PartId, MeshData> {
    parts
        .iter()
        .map(|part| (part.id, part_mesh(part, interaction)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::interaction::{base_color, highlight_color};
    use shared::{ParameterSet, PartKind};

    #[test]
    fn test_one_mesh_per_part() {
        let parts = build(&ParameterSet::default()).unwrap();
        let meshes = build_assembly_meshes(&parts, &InteractionState::default());
        assert_eq!(meshes.len(), 6);
        for mesh in meshes.values() {
            assert_eq!(mesh.vertex_count(), 24);
        }
    }

    #[test]
    fn test_hovered_part_uses_highlight() {
        let parts = build(&ParameterSet::default()).unwrap();
        let mut interaction = InteractionState::default();
        interaction.set_hover(Some(PartId::Web));
        let meshes = build_assembly_meshes(&parts, &interaction);

        assert_eq!(meshes[&PartId::Web].color(), Some(highlight_color(PartKind::Web)));
        assert_eq!(meshes[&PartId::Flange].color(), Some(base_color(PartKind::Flange)));
    }

    #[test]
    fn test_part_mesh_spans_its_box() {
        let part = PartDescriptor::new(PartId::Flange, [200.0, 20.0, 20.0], [0.0, 10.0, 0.0]);
        let mesh = part_mesh(&part, &InteractionState::default());
        let ys: Vec<f32> = mesh.vertices.chunks_exact(9).map(|v| v[1]).collect();
        let min = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!((min - 0.0).abs() < 1e-4);
        assert!((max - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_cache_rebuilds_only_on_change() {
        let parts = build(&ParameterSet::default()).unwrap();
        let mut interaction = InteractionState::default();
        let mut cache = AssemblyCache::new();
        assert!(!cache.is_valid(0, None));

        cache.rebuild(&parts, &interaction, 0);
        assert!(cache.is_valid(0, None));
        assert_eq!(cache.rebuild_count(), 1);
        assert_eq!(cache.aabbs().len(), 6);

        interaction.set_hover(Some(PartId::Bolt(0)));
        assert!(!cache.is_valid(0, interaction.hovered()));
        assert!(!cache.is_valid(1, None));

        cache.clear(1);
        assert!(cache.meshes().is_empty());
        assert!(cache.aabbs().is_empty());
    }
}
