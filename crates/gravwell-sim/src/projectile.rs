//! Gravity-well projectile data model.
//!
//! Stored in `SimulationEngine` as an `Option`, NOT as an ECS entity:
//! at most one is in flight and it is cleared on impact.

use glam::Vec3;

use gravwell_core::enums::HitKind;

/// A launched gravity well on its ballistic arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Vec3,
    /// Units per frame.
    pub velocity: Vec3,
    /// Aim point the horizontal launch velocity was directed at.
    pub target: Vec3,
    /// What the aim ray hit when the shot was fired.
    pub hit: HitKind,
    /// Specter hit by the aim ray, if any. Makes the field target-locked.
    pub locked_target: Option<hecs::Entity>,
}

/// A projectile that reached the ground this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub position: Vec3,
    pub hit: HitKind,
    pub locked_target: Option<hecs::Entity>,
}
