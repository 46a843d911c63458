//! Projectile system: ballistic integration and ground impact.

use gravwell_core::constants::{PROJECTILE_GRAVITY, PROJECTILE_IMPACT_HEIGHT};

use crate::projectile::{Impact, Projectile};

/// Advance the in-flight projectile by one frame. On impact the projectile
/// is cleared and the impact returned.
pub fn run(projectile: &mut Option<Projectile>) -> Option<Impact> {
    let p = projectile.as_mut()?;

    p.velocity.y -= PROJECTILE_GRAVITY;
    p.position += p.velocity;

    // Approximate ground test: a fixed height, not the terrain under it.
    if p.position.y <= PROJECTILE_IMPACT_HEIGHT && p.velocity.y < 0.0 {
        let landed = projectile.take()?;
        return Some(Impact {
            position: landed.position,
            hit: landed.hit,
            locked_target: landed.locked_target,
        });
    }

    None
}
