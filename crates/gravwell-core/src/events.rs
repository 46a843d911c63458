//! Events emitted by the simulation for UI, audio and logging.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::HitKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Fire attempted with an empty magazine.
    OutOfAmmo,
    /// A shot resolved against a target and launched a projectile.
    ShotFired { target: Vec3, hit: HitKind },
    /// A shot consumed ammo but its ray hit nothing.
    ShotMissed,
    /// A new shot replaced the projectile still in flight.
    ProjectileReplaced,
    FieldSpawned {
        field_id: u32,
        center: Vec3,
        target_locked: bool,
    },
    FieldExpired { field_id: u32 },
    SpecterCaptured { field_id: u32, position: Vec3 },
    SpecterSpawned { position: Vec3 },
    Jumped,
    Landed,
}
