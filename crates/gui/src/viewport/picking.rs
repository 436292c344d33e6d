use std::collections::HashMap;

use glam::{Quat, Vec3};
use shared::{PartDescriptor, PartId};

use super::mesh::MeshData;

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Express a world-space ray in the assembly frame, which is rotated
    /// by `rotation` radians about the vertical axis.
    pub fn to_assembly_frame(&self, rotation: f32) -> Ray {
        let inverse = Quat::from_rotation_y(-rotation);
        Ray {
            origin: inverse * self.origin,
            direction: inverse * self.direction,
        }
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute AABB from MeshData (9 floats per vertex: pos+normal+color)
    pub fn from_mesh(data: &MeshData) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        for v in data.vertices.chunks_exact(9) {
            let p = Vec3::new(v[0], v[1], v[2]);
            min = min.min(p);
            max = max.max(p);
        }

        Self { min, max }
    }

    /// Box occupied by a part in the assembly frame
    pub fn from_part(part: &PartDescriptor) -> Self {
        let [x0, y0, z0] = part.min();
        let [x1, y1, z1] = part.max();
        Self {
            min: Vec3::new(x0 as f32, y0 as f32, z0 as f32),
            max: Vec3::new(x1 as f32, y1 as f32, z1 as f32),
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Pick the nearest part whose AABB is intersected by the ray.
/// Equal distances resolve to the lower `PartId` so the result is stable.
pub fn pick_nearest(ray: &Ray, aabbs: &HashMap<PartId, Aabb>) -> Option<PartId> {
    let mut best: Option<(PartId, f32)> = None;

    for (id, aabb) in aabbs {
        if let Some(dist) = ray_aabb(ray, aabb) {
            let closer = best
                .as_ref()
                .is_none_or(|(best_id, d)| dist < *d || (dist == *d && id < best_id));
            if closer {
                best = Some((*id, dist));
            }
        }
    }

    best.map(|(id, _)| id)
}

/// Pick against a rotated assembly: the world ray is brought into the
/// assembly frame before testing the part boxes.
pub fn pick_part(ray: &Ray, aabbs: &HashMap<PartId, Aabb>, rotation: f32) -> Option<PartId> {
    pick_nearest(&ray.to_assembly_frame(rotation), aabbs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f32) -> Aabb {
        Aabb {
            min: Vec3::new(x - 1.0, -1.0, -1.0),
            max: Vec3::new(x + 1.0, 1.0, 1.0),
        }
    }

    #[test]
    fn test_ray_hits_box_in_front() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::NEG_Z,
        };
        let hit = ray_aabb(&ray, &unit_box_at(0.0)).unwrap();
        assert!((hit - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_misses_box_behind() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::Z,
        };
        assert!(ray_aabb(&ray, &unit_box_at(0.0)).is_none());
    }

    #[test]
    fn test_pick_nearest_prefers_closer_box() {
        let mut aabbs = HashMap::new();
        aabbs.insert(PartId::Web, unit_box_at(0.0));
        aabbs.insert(
            PartId::Flange,
            Aabb {
                min: Vec3::new(-1.0, -1.0, -6.0),
                max: Vec3::new(1.0, 1.0, -4.0),
            },
        );
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::NEG_Z,
        };
        assert_eq!(pick_nearest(&ray, &aabbs), Some(PartId::Web));
    }

    #[test]
    fn test_pick_part_respects_rotation() {
        // Box sits on +X in the assembly frame. After a quarter turn about Y
        // it appears on -Z in world space.
        let mut aabbs = HashMap::new();
        aabbs.insert(PartId::Bolt(2), unit_box_at(5.0));

        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, -20.0),
            direction: Vec3::Z,
        };
        assert_eq!(pick_part(&ray, &aabbs, 0.0), None);

        let down_x = Ray {
            origin: Vec3::new(0.0, 20.0, -5.0),
            direction: Vec3::NEG_Y,
        };
        assert_eq!(
            pick_part(&down_x, &aabbs, std::f32::consts::FRAC_PI_2),
            Some(PartId::Bolt(2))
        );
    }
}
