//! Assembly mesh cache management

use std::collections::HashMap;

use shared::{PartDescriptor, PartId};

use super::build_assembly_meshes;
use crate::state::InteractionState;
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

/// Cached part meshes, rebuilt when the parameters or the hovered part change.
/// Rotation is applied at draw time and never invalidates the cache.
pub struct AssemblyCache {
    meshes: HashMap<PartId, MeshData>,
    aabbs: HashMap<PartId, Aabb>,
    params_version: u64,
    hovered: Option<PartId>,
    rebuild_count: u64,
}

impl Default for AssemblyCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AssemblyCache {
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            aabbs: HashMap::new(),
            params_version: u64::MAX, // force first rebuild
            hovered: None,
            rebuild_count: 0,
        }
    }

    /// Check if cache is still valid
    pub fn is_valid(&self, params_version: u64, hovered: Option<PartId>) -> bool {
        self.params_version == params_version && self.hovered == hovered
    }

    /// Rebuild cached meshes from the part list
    pub fn rebuild(
        &mut self,
        parts: &[PartDescriptor],
        interaction: &InteractionState,
        params_version: u64,
    ) {
        self.meshes = build_assembly_meshes(parts, interaction);
        self.aabbs = parts.iter().map(|p| (p.id, Aabb::from_part(p))).collect();
        self.params_version = params_version;
        self.hovered = interaction.hovered();
        self.rebuild_count += 1;
    }

    /// Drop all geometry (parameters rejected)
    pub fn clear(&mut self, params_version: u64) {
        if self.meshes.is_empty() && self.params_version == params_version {
            return;
        }
        self.meshes.clear();
        self.aabbs.clear();
        self.params_version = params_version;
        self.hovered = None;
        self.rebuild_count += 1;
    }

    pub fn meshes(&self) -> &HashMap<PartId, MeshData> {
        &self.meshes
    }

    /// Clone the cached mesh map (for passing into PaintCallback)
    pub fn meshes_clone(&self) -> HashMap<PartId, MeshData> {
        self.meshes.clone()
    }

    /// Rebuild counter
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Part boxes in the assembly frame
    pub fn aabbs(&self) -> &HashMap<PartId, Aabb> {
        &self.aabbs
    }
}
