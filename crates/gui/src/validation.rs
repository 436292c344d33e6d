//! Sanity checks for part meshes.
//!
//! Used by tests and the headless harness to verify that a built mesh is a
//! well-formed, uniformly colored box matching its part descriptor.

use glam::Vec3;
use shared::PartDescriptor;

use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

/// Floats per vertex: position, normal, color
const STRIDE: usize = 9;

/// Read-only checks over one `MeshData`.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    fn vertices(&self) -> impl Iterator<Item = &[f32]> {
        self.mesh.vertices.chunks_exact(STRIDE)
    }

    /// Extent of the mesh along X, Y, Z
    pub fn dimensions(&self) -> [f32; 3] {
        let aabb = Aabb::from_mesh(self.mesh);
        (aabb.max - aabb.min).to_array()
    }

    pub fn assert_dimensions_approx(&self, expected: [f32; 3], tolerance: f32) -> bool {
        close(Vec3::from(self.dimensions()), Vec3::from(expected), tolerance)
    }

    pub fn is_centered_at(&self, expected: [f32; 3], tolerance: f32) -> bool {
        close(Aabb::from_mesh(self.mesh).center(), Vec3::from(expected), tolerance)
    }

    /// Every vertex carries `expected` (per channel, within `tolerance`).
    /// An empty mesh has no color.
    pub fn has_color(&self, expected: [f32; 3], tolerance: f32) -> bool {
        let expected = Vec3::from(expected);
        self.vertex_count() > 0
            && self
                .vertices()
                .all(|v| close(Vec3::new(v[6], v[7], v[8]), expected, tolerance))
    }

    /// The mesh box has the part's dimensions and sits at its position
    pub fn matches_part(&self, part: &PartDescriptor, tolerance: f32) -> bool {
        let [w, h, d] = part.dimensions;
        let [x, y, z] = part.position;
        self.assert_dimensions_approx([w as f32, h as f32, d as f32], tolerance)
            && self.is_centered_at([x as f32, y as f32, z as f32], tolerance)
    }

    /// All structural problems found; empty means the mesh can be uploaded.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let vertices = &self.mesh.vertices;
        let indices = &self.mesh.indices;

        if vertices.len() % STRIDE != 0 {
            errors.push(format!(
                "vertex buffer holds {} floats, not a multiple of {STRIDE}",
                vertices.len()
            ));
        }
        if indices.len() % 3 != 0 {
            errors.push(format!("index count {} is not a multiple of 3", indices.len()));
        }

        let count = self.vertex_count() as u32;
        let stray: Vec<u32> = indices.iter().copied().filter(|&i| i >= count).take(5).collect();
        if !stray.is_empty() {
            errors.push(format!("indices out of range (vertex count {count}): {stray:?}"));
        }

        if vertices.iter().any(|f| !f.is_finite()) {
            errors.push("vertex buffer contains non-finite values".to_string());
        } else if self
            .vertices()
            .any(|v| (Vec3::new(v[3], v[4], v[5]).length() - 1.0).abs() > 0.1)
        {
            errors.push("normals are not unit length".to_string());
        }

        errors
    }
}

fn close(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a - b).abs().max_element() < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh::cube;
    use shared::PartId;

    const GREY: [f32; 3] = [0.5, 0.5, 0.5];

    fn plate() -> MeshData {
        let mut m = cube(200.0, 5.0, 25.0, GREY);
        m.translate(Vec3::new(0.0, 325.0, 0.0));
        m
    }

    #[test]
    fn test_box_counts() {
        let mesh = plate();
        let v = MeshValidator::new(&mesh);
        assert_eq!(v.vertex_count(), 24);
        assert_eq!(v.triangle_count(), 12);
        assert!(v.validate_all().is_empty());
    }

    #[test]
    fn test_matches_part() {
        let mesh = plate();
        let v = MeshValidator::new(&mesh);
        let part = PartDescriptor::new(PartId::CoverPlate, [200.0, 5.0, 25.0], [0.0, 325.0, 0.0]);
        assert!(v.matches_part(&part, 0.01));

        let moved = PartDescriptor::new(PartId::CoverPlate, [200.0, 5.0, 25.0], [0.0, 330.0, 0.0]);
        assert!(!v.matches_part(&moved, 0.01));
        assert!(!v.assert_dimensions_approx([200.0, 10.0, 25.0], 0.01));
    }

    #[test]
    fn test_has_color() {
        let mesh = plate();
        let v = MeshValidator::new(&mesh);
        assert!(v.has_color(GREY, 1e-4));
        assert!(!v.has_color([1.0, 0.0, 0.0], 1e-4));

        let empty = MeshData {
            vertices: vec![],
            indices: vec![],
        };
        assert!(!MeshValidator::new(&empty).has_color(GREY, 1.0));
    }

    #[test]
    fn test_reports_broken_buffers() {
        let bad = MeshData {
            vertices: vec![0.0; 10],
            indices: vec![0, 5, 2, 1],
        };
        let errors = MeshValidator::new(&bad).validate_all();
        assert!(errors.iter().any(|e| e.contains("multiple of 9")));
        assert!(errors.iter().any(|e| e.contains("multiple of 3")));
        assert!(errors.iter().any(|e| e.contains("out of range")));
    }

    #[test]
    fn test_reports_bad_normals_and_nan() {
        let skewed = MeshData {
            vertices: vec![0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 0.5, 0.5, 0.5],
            indices: vec![],
        };
        let errors = MeshValidator::new(&skewed).validate_all();
        assert!(errors.iter().any(|e| e.contains("unit length")));

        let mut mesh = plate();
        mesh.vertices[0] = f32::NAN;
        let errors = MeshValidator::new(&mesh).validate_all();
        assert!(errors.iter().any(|e| e.contains("non-finite")));
    }
}
