//! Entity spawn factories for setting up the simulation world.

use glam::Vec3;
use hecs::World;

use gravwell_core::components::*;
use gravwell_core::constants::*;

use gravwell_terrain::HeightField;

/// Spawn the player standing on the terrain at its spawn column.
pub fn spawn_player(world: &mut World, terrain: &HeightField) -> hecs::Entity {
    let ground = terrain.height_at(PLAYER_SPAWN.x, PLAYER_SPAWN.z);
    let body = Body {
        position: Vec3::new(PLAYER_SPAWN.x, ground + PLAYER_HALF_HEIGHT, PLAYER_SPAWN.z),
        vertical_velocity: 0.0,
        grounded: true,
    };

    world.spawn((
        Player,
        body,
        Extent {
            half_size: PLAYER_HALF_HEIGHT,
        },
        JumpLatch::default(),
        Orientation::default(),
    ))
}

/// Spawn a specter with fresh patrol state at `position`, pinned to the
/// hover height.
pub fn spawn_specter(world: &mut World, position: Vec3, hover_height: f32) -> hecs::Entity {
    let body = Body {
        position: Vec3::new(position.x, hover_height, position.z),
        vertical_velocity: 0.0,
        grounded: true,
    };

    world.spawn((
        Specter,
        body,
        Extent {
            half_size: SPECTER_HALF_SIZE,
        },
        Patrol {
            direction: SPECTER_INITIAL_DIRECTION,
            speed: SPECTER_SPEED,
        },
    ))
}
