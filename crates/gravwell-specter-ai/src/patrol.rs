//! Random-walk patrol with reactive boundary containment.
//!
//! Per frame: maybe pick a new heading, step along it, pin the height, then
//! reflect the heading on any axis that has left the field. The specter can
//! overshoot a bound by at most one step before it turns back. A heading
//! drawn while already outside is reflected before the step, so a resample
//! never carries it further out.

use glam::Vec3;
use rand::Rng;

use gravwell_core::constants::SPECTER_RESAMPLE_PROBABILITY;

/// Input to the patrol step for a single specter.
pub struct PatrolContext {
    pub position: Vec3,
    /// Unit vector on the horizontal plane.
    pub direction: Vec3,
    /// Units per frame.
    pub speed: f32,
    /// Half the side length of the patrol area.
    pub half_extent: f32,
    pub hover_height: f32,
}

/// Output from the patrol step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolUpdate {
    pub position: Vec3,
    pub direction: Vec3,
    pub resampled: bool,
    pub reflected: bool,
}

/// Advance one frame of patrol.
pub fn evaluate<R: Rng>(ctx: &PatrolContext, rng: &mut R) -> PatrolUpdate {
    let resampled = rng.gen_bool(SPECTER_RESAMPLE_PROBABILITY);
    let direction = if resampled {
        random_direction(rng)
    } else {
        ctx.direction
    };
    let (direction, reflected_before) = contain(ctx.position, direction, ctx.half_extent);

    let mut position = ctx.position + direction * ctx.speed;
    position.y = ctx.hover_height;

    let (direction, reflected_after) = contain(position, direction, ctx.half_extent);

    PatrolUpdate {
        position,
        direction,
        resampled,
        reflected: reflected_before || reflected_after,
    }
}

/// Uniformly random heading on the horizontal plane, unit length.
pub fn random_direction<R: Rng>(rng: &mut R) -> Vec3 {
    loop {
        let x: f32 = rng.gen_range(-1.0..1.0);
        let z: f32 = rng.gen_range(-1.0..1.0);
        if let Some(dir) = Vec3::new(x, 0.0, z).try_normalize() {
            return dir;
        }
    }
}

/// Point the heading back inward on every axis where `position` is outside
/// `±half_extent`. Each bound reflects its own axis, so the heading keeps
/// its length.
pub fn contain(position: Vec3, direction: Vec3, half_extent: f32) -> (Vec3, bool) {
    let mut dir = direction;
    if position.x > half_extent {
        dir.x = -dir.x.abs();
    } else if position.x < -half_extent {
        dir.x = dir.x.abs();
    }
    if position.z > half_extent {
        dir.z = -dir.z.abs();
    } else if position.z < -half_extent {
        dir.z = dir.z.abs();
    }
    (dir, dir != direction)
}
