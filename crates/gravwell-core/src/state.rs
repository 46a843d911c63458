//! Frame snapshot: everything the renderer and UI read after each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete visible state produced by every frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: EntityView,
    /// Absent between a capture and the respawn.
    pub specter: Option<EntityView>,
    pub camera: Vec3,
    pub projectile: Option<ProjectileView>,
    pub fields: Vec<FieldView>,
    pub trails: Vec<TrailView>,
    pub hud: HudView,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub position: Vec3,
    /// Euler rotation (pitch, yaw, roll) in radians.
    pub rotation: Vec3,
    pub grounded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// An active gravity field sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldView {
    pub field_id: u32,
    pub center: Vec3,
    pub radius: f32,
    /// Fades linearly with remaining lifetime.
    pub opacity: f32,
    pub remaining_secs: f32,
    pub target_locked: bool,
}

/// A fading shot trail segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailView {
    pub from: Vec3,
    pub to: Vec3,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub ammo: u32,
    pub max_ammo: u32,
    /// 0.0..=1.0
    pub health_fraction: f32,
}
