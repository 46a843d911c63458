//! Respawn placement after a capture.

use glam::Vec3;
use rand::Rng;

use gravwell_core::constants::SPECTER_RESPAWN_ATTEMPTS;

/// Pick a spawn point inside `±half_extent` at least `min_distance` (on the
/// horizontal plane) from `avoid`. Falls back to the corner farthest from
/// `avoid` when random draws keep landing too close.
pub fn respawn_position<R: Rng>(
    rng: &mut R,
    avoid: Vec3,
    half_extent: f32,
    min_distance: f32,
    hover_height: f32,
) -> Vec3 {
    for _ in 0..SPECTER_RESPAWN_ATTEMPTS {
        let x = rng.gen_range(-half_extent..=half_extent);
        let z = rng.gen_range(-half_extent..=half_extent);
        let candidate = Vec3::new(x, hover_height, z);
        if horizontal_distance(candidate, avoid) >= min_distance {
            return candidate;
        }
    }
    farthest_corner(avoid, half_extent, hover_height)
}

/// Corner of the patrol square farthest from `from`.
pub fn farthest_corner(from: Vec3, half_extent: f32, hover_height: f32) -> Vec3 {
    let x = if from.x > 0.0 { -half_extent } else { half_extent };
    let z = if from.z > 0.0 { -half_extent } else { half_extent };
    Vec3::new(x, hover_height, z)
}

fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}
