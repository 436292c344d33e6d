use glam::Vec3;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }

    /// Move every vertex by `offset` (normals and colors untouched)
    pub fn translate(&mut self, offset: Vec3) {
        for v in self.vertices.chunks_exact_mut(9) {
            v[0] += offset.x;
            v[1] += offset.y;
            v[2] += offset.z;
        }
    }

    /// Color of the first vertex (every part mesh is single-colored)
    pub fn color(&self) -> Option<[f32; 3]> {
        self.vertices.get(6..9).map(|c| [c[0], c[1], c[2]])
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 7
    }
}

/// Axis-aligned box centered at the origin, 24 vertices with flat normals.
pub fn cube(w: f32, h: f32, d: f32, color: [f32; 3]) -> MeshData {
    let hw = w * 0.5;
    let hh = h * 0.5;
    let hd = d * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        ([Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)], Vec3::Z),
        // Back (-Z)
        ([Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)], Vec3::NEG_Z),
        // Right (+X)
        ([Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)], Vec3::X),
        // Left (-X)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)], Vec3::NEG_X),
        // Top (+Y)
        ([Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)], Vec3::Y),
        // Bottom (-Y)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)], Vec3::NEG_Y),
    ];

    let mut vertices = Vec::with_capacity(24 * 9);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / 9) as u32;
        for v in quad {
            push_vert(&mut vertices, v.x, v.y, v.z, *normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

// ── Ground grid ──────────────────────────────────────────────

/// Square grid on the y = 0 plane, `size` wide with `divisions` cells per side.
pub fn grid(size: f32, divisions: u32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.55_f32, 0.58, 0.6, opacity];
    let center_color = [0.3_f32, 0.32, 0.35, opacity];

    let divisions = divisions.max(1);
    let half = size * 0.5;
    let step = size / divisions as f32;

    for i in 0..=divisions {
        let f = -half + i as f32 * step;
        let color = if 2 * i == divisions {
            center_color
        } else {
            grid_color
        };
        // Line along Z
        push_line_vert(&mut vertices, f, 0.0, -half, color);
        push_line_vert(&mut vertices, f, 0.0, half, color);
        // Line along X
        push_line_vert(&mut vertices, -half, 0.0, f, color);
        push_line_vert(&mut vertices, half, 0.0, f, color);
    }

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[px, py, pz, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let m = cube(2.0, 4.0, 6.0, [1.0, 0.0, 0.0]);
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.indices.len(), 36);
        assert_eq!(m.color(), Some([1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_translate_moves_positions_only() {
        let mut m = cube(2.0, 2.0, 2.0, [0.5, 0.5, 0.5]);
        let normal_before = m.vertices[3..6].to_vec();
        m.translate(Vec3::new(10.0, 20.0, 0.0));
        let ys: Vec<f32> = m.vertices.chunks_exact(9).map(|v| v[1]).collect();
        assert!(ys.iter().all(|&y| (y - 19.0).abs() < 1e-5 || (y - 21.0).abs() < 1e-5));
        assert_eq!(&m.vertices[3..6], normal_before.as_slice());
    }

    #[test]
    fn test_grid_line_count() {
        let g = grid(1000.0, 20, 0.6);
        // 21 lines per direction, 2 vertices each
        assert_eq!(g.vertex_count(), 21 * 2 * 2);
    }
}
