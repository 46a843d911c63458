//! Trail fade system: linear opacity decay on a fixed interval.

use gravwell_core::constants::TRAIL_FADE_STEP;

use crate::effects::BulletTrail;

/// Fade every trail by the steps that fell due, then drop faded trails.
pub fn run(trails: &mut Vec<BulletTrail>, dt_secs: f32) {
    for trail in trails.iter_mut() {
        let now = trail.age_secs + dt_secs;
        while trail.timer.pop_due(now, f32::INFINITY) {
            trail.opacity = 1.0 - trail.timer.fired() as f32 * TRAIL_FADE_STEP;
            if trail.is_faded() {
                trail.timer.cancel();
            }
        }
        trail.age_secs = now;
    }
    trails.retain(|trail| !trail.is_faded());
}
