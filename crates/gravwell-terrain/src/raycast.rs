//! Ray intersection helpers shared by terrain and entity hit tests.

use glam::Vec3;

use gravwell_core::types::AimRay;

/// Directions closer to zero than this are treated as parallel to a slab.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A ray intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
}

impl RayHit {
    pub fn new(ray: &AimRay, distance: f32) -> Self {
        Self {
            point: ray.at(distance),
            distance,
        }
    }
}

/// Slab test against an axis-aligned box.
///
/// Returns the `(enter, exit)` distances along the ray, with `enter`
/// clamped to 0 when the origin is inside. `None` if the box is missed or
/// lies entirely behind the origin.
pub fn ray_box(ray: &AimRay, min: Vec3, max: Vec3) -> Option<(f32, f32)> {
    let mut enter = 0.0_f32;
    let mut exit = f32::INFINITY;

    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.direction[axis];
        if d.abs() < PARALLEL_EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        enter = enter.max(t0);
        exit = exit.min(t1);
        if enter > exit {
            return None;
        }
    }

    Some((enter, exit))
}

/// Entry hit against a cube of `half_size` centred on `center`.
pub fn ray_cube(ray: &AimRay, center: Vec3, half_size: f32) -> Option<RayHit> {
    let half = Vec3::splat(half_size);
    let (enter, _) = ray_box(ray, center - half, center + half)?;
    Some(RayHit::new(ray, enter))
}
