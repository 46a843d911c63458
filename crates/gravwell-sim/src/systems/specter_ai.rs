//! Specter AI system: advances every specter's patrol each frame.
//!
//! Calls the patrol step from gravwell-specter-ai, then writes the result
//! back to the ECS components.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use gravwell_core::components::{Body, Patrol, Specter};

use gravwell_specter_ai::patrol::{evaluate, PatrolContext};

/// Run the patrol step for each specter.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, half_extent: f32, hover_height: f32) {
    for (_entity, (_specter, body, patrol)) in
        world.query_mut::<(&Specter, &mut Body, &mut Patrol)>()
    {
        let ctx = PatrolContext {
            position: body.position,
            direction: patrol.direction,
            speed: patrol.speed,
            half_extent,
            hover_height,
        };

        let update = evaluate(&ctx, rng);
        body.position = update.position;
        patrol.direction = update.direction;
    }
}
