//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Marker for the player-controlled cube.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marker for the patrolling, capturable cube.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Specter;

/// Kinematic state shared by every simulated actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Centre of the cube.
    pub position: Vec3,
    /// Units per frame, positive is up.
    pub vertical_velocity: f32,
    pub grounded: bool,
}

/// Half side length of an axis-aligned cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub half_size: f32,
}

/// Set when a jump starts, cleared on the next ground contact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct JumpLatch {
    pub jumping: bool,
}

/// Cosmetic rotation (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

/// Patrol state driven by the specter AI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patrol {
    /// Unit vector on the horizontal plane.
    pub direction: Vec3,
    /// Units per frame.
    pub speed: f32,
}
