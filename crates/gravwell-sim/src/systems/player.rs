//! Player kinematics: ground probe, jump, movement and gravity.
//!
//! Grounded/Airborne state machine. Movement constants are per frame; the
//! movement keys act on each horizontal axis independently, so diagonal
//! movement is faster than straight movement.

use glam::Vec3;
use hecs::World;

use gravwell_core::commands::KeyState;
use gravwell_core::components::{Body, Extent, JumpLatch, Orientation, Player};
use gravwell_core::constants::*;
use gravwell_core::events::SimEvent;

use gravwell_terrain::HeightField;

/// Run one frame of player kinematics.
pub fn run(world: &mut World, terrain: &HeightField, keys: &KeyState, events: &mut Vec<SimEvent>) {
    for (_entity, (_player, body, extent, latch, orientation)) in world.query_mut::<(
        &Player,
        &mut Body,
        &Extent,
        &mut JumpLatch,
        &mut Orientation,
    )>() {
        step(body, latch, extent.half_size, keys, terrain, events);
        orientation.pitch += PLAYER_SPIN_RATE;
        orientation.yaw += PLAYER_SPIN_RATE;
    }
}

/// Advance a single body by one frame.
pub fn step(
    body: &mut Body,
    latch: &mut JumpLatch,
    half_height: f32,
    keys: &KeyState,
    terrain: &HeightField,
    events: &mut Vec<SimEvent>,
) {
    // 1. Terrain-relative clamp at the start of the frame.
    resolve_ground(body, latch, half_height, terrain, events);

    // 2. Jump: grounded, not already jumping, key held.
    if keys.jump && body.grounded && !latch.jumping {
        body.vertical_velocity = PLAYER_JUMP_IMPULSE;
        body.grounded = false;
        latch.jumping = true;
        events.push(SimEvent::Jumped);
    }

    // 3. Horizontal movement, each axis on its own.
    if keys.forward {
        body.position.z -= PLAYER_MOVE_SPEED;
    }
    if keys.backward {
        body.position.z += PLAYER_MOVE_SPEED;
    }
    if keys.left {
        body.position.x -= PLAYER_MOVE_SPEED;
    }
    if keys.right {
        body.position.x += PLAYER_MOVE_SPEED;
    }

    // 4. Gravity and Euler integration while airborne.
    if !body.grounded {
        body.vertical_velocity -= PLAYER_GRAVITY;
        body.position.y += body.vertical_velocity;
    }

    // 5. Re-probe at the new position: follow cell steps, land, or walk off.
    resolve_ground(body, latch, half_height, terrain, events);

    // 6. Manual descent ignores the grounded state and leaves the body
    // ungrounded until the next clamp.
    if keys.down {
        body.position.y -= PLAYER_MOVE_SPEED;
        body.grounded = false;
    }
}

/// Probe below the body and snap it onto the terrain when in contact.
/// A body moving upward is never caught by the ground. Only a falling body
/// reports a landing.
fn resolve_ground(
    body: &mut Body,
    latch: &mut JumpLatch,
    half_height: f32,
    terrain: &HeightField,
    events: &mut Vec<SimEvent>,
) {
    let base = body.position - Vec3::Y * half_height;
    match terrain.probe_down(base, GROUND_PROBE_DISTANCE) {
        Some(ground) if body.vertical_velocity <= 0.0 => {
            if !body.grounded && body.vertical_velocity < 0.0 {
                events.push(SimEvent::Landed);
            }
            body.grounded = true;
            body.vertical_velocity = 0.0;
            body.position.y = ground + half_height;
            latch.jumping = false;
        }
        _ => body.grounded = false,
    }
}

/// Camera position for the player at `player_position`.
pub fn camera_position(player_position: Vec3) -> Vec3 {
    player_position + CAMERA_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravwell_core::config::TerrainConfig;

    fn grounded_body(terrain: &HeightField, x: f32, z: f32) -> Body {
        Body {
            position: Vec3::new(x, terrain.height_at(x, z) + PLAYER_HALF_HEIGHT, z),
            vertical_velocity: 0.0,
            grounded: true,
        }
    }

    #[test]
    fn test_diagonal_not_normalized() {
        let terrain = HeightField::flat(&TerrainConfig::default(), 0.0);
        let mut body = grounded_body(&terrain, 0.0, 0.0);
        let mut latch = JumpLatch::default();
        let keys = KeyState {
            forward: true,
            right: true,
            ..Default::default()
        };
        step(&mut body, &mut latch, PLAYER_HALF_HEIGHT, &keys, &terrain, &mut Vec::new());
        assert!((body.position.x - PLAYER_MOVE_SPEED).abs() < 1e-6);
        assert!((body.position.z + PLAYER_MOVE_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let terrain = HeightField::flat(&TerrainConfig::default(), 0.0);
        let mut body = grounded_body(&terrain, 0.0, 0.0);
        let mut latch = JumpLatch::default();
        let keys = KeyState {
            left: true,
            right: true,
            ..Default::default()
        };
        step(&mut body, &mut latch, PLAYER_HALF_HEIGHT, &keys, &terrain, &mut Vec::new());
        assert!(body.position.x.abs() < 1e-6);
    }

    #[test]
    fn test_steps_up_onto_taller_cell() {
        // Cell column 5 (x in [0, 10)) at height 0, column 4 at height 3.
        let mut heights = vec![0.0; 100];
        for row in 0..10 {
            heights[row * 10 + 4] = 3.0;
        }
        let terrain = HeightField::from_heights(&TerrainConfig::default(), heights).unwrap();
        let mut body = grounded_body(&terrain, 0.05, 0.0);
        let mut latch = JumpLatch::default();
        let keys = KeyState {
            left: true,
            ..Default::default()
        };
        step(&mut body, &mut latch, PLAYER_HALF_HEIGHT, &keys, &terrain, &mut Vec::new());
        assert!(body.grounded);
        assert_eq!(body.position.y, 3.0 + PLAYER_HALF_HEIGHT);
    }

    #[test]
    fn test_walks_off_ledge_and_falls() {
        let mut heights = vec![0.0; 100];
        for row in 0..10 {
            heights[row * 10 + 5] = 4.0;
        }
        let terrain = HeightField::from_heights(&TerrainConfig::default(), heights).unwrap();
        let mut body = grounded_body(&terrain, 0.05, 0.0);
        let mut latch = JumpLatch::default();
        let mut events = Vec::new();
        let keys = KeyState {
            left: true,
            ..Default::default()
        };
        step(&mut body, &mut latch, PLAYER_HALF_HEIGHT, &keys, &terrain, &mut events);
        assert!(!body.grounded, "no ground within probe distance");

        let idle = KeyState::default();
        for _ in 0..200 {
            step(&mut body, &mut latch, PLAYER_HALF_HEIGHT, &idle, &terrain, &mut events);
            if body.grounded {
                break;
            }
        }
        assert!(body.grounded, "should land on the lower cell");
        assert_eq!(body.position.y, PLAYER_HALF_HEIGHT);
        assert!(events.contains(&SimEvent::Landed));
    }

    #[test]
    fn test_down_key_applies_while_grounded() {
        let terrain = HeightField::flat(&TerrainConfig::default(), 1.0);
        let mut body = grounded_body(&terrain, 0.0, 0.0);
        let mut latch = JumpLatch::default();
        let keys = KeyState {
            down: true,
            ..Default::default()
        };
        let mut events = Vec::new();
        step(&mut body, &mut latch, PLAYER_HALF_HEIGHT, &keys, &terrain, &mut events);
        assert!((body.position.y - (1.5 - PLAYER_MOVE_SPEED)).abs() < 1e-6);
        assert!(!body.grounded, "pushed below the clamp, so not grounded");
        // Next frame the ground clamp puts it back.
        step(
            &mut body,
            &mut latch,
            PLAYER_HALF_HEIGHT,
            &KeyState::default(),
            &terrain,
            &mut events,
        );
        assert_eq!(body.position.y, 1.5);
        assert!(body.grounded);
        assert!(!events.contains(&SimEvent::Landed), "re-clamp is not a landing");
    }

    #[test]
    fn test_camera_follows_with_offset() {
        assert_eq!(
            camera_position(Vec3::new(1.0, 2.0, 3.0)),
            Vec3::new(1.0, 4.0, 8.0)
        );
    }
}
