//! Timed effects: gravity fields and bullet trails.
//!
//! Stored in `SimulationEngine`'s effect lists, NOT as ECS entities. Each
//! effect owns its own tick schedule and refers to entities only through
//! `hecs::Entity` handles, so a despawned target is a lookup miss.

use glam::Vec3;

use gravwell_core::constants::*;
use gravwell_core::enums::CaptureState;
use gravwell_core::state::{FieldView, TrailView};

use crate::timer::TickTimer;

/// One entity being pulled by a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPull {
    pub entity: hecs::Entity,
    pub state: CaptureState,
}

impl FieldPull {
    pub fn new(entity: hecs::Entity) -> Self {
        Self {
            entity,
            state: CaptureState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == CaptureState::Active
    }

    /// Stop pulling without a capture. No-op once the pull has ended.
    pub fn release(&mut self) {
        if self.is_active() {
            self.state = CaptureState::Released;
        }
    }
}

/// Radial attraction zone spawned where a projectile lands.
#[derive(Debug, Clone)]
pub struct GravityField {
    pub id: u32,
    pub center: Vec3,
    pub radius: f32,
    pub duration_secs: f32,
    pub age_secs: f32,
    /// Set when the shot hit the specter directly; only it is affected.
    pub target_locked: bool,
    pub pulls: Vec<FieldPull>,
    pub timer: TickTimer,
}

impl GravityField {
    pub fn new(id: u32, center: Vec3, target_locked: bool, affected: &[hecs::Entity]) -> Self {
        Self {
            id,
            center,
            radius: FIELD_RADIUS,
            duration_secs: FIELD_DURATION_SECS,
            age_secs: 0.0,
            target_locked,
            pulls: affected.iter().copied().map(FieldPull::new).collect(),
            timer: TickTimer::new(FIELD_TICK_INTERVAL_SECS),
        }
    }

    pub fn remaining_secs(&self) -> f32 {
        (self.duration_secs - self.age_secs).max(0.0)
    }

    pub fn is_expired(&self) -> bool {
        self.age_secs >= self.duration_secs
    }

    /// Release every pull still active and stop the tick schedule.
    pub fn shut_down(&mut self) {
        for pull in &mut self.pulls {
            pull.release();
        }
        self.timer.cancel();
    }

    pub fn view(&self) -> FieldView {
        let life = if self.duration_secs > 0.0 {
            self.remaining_secs() / self.duration_secs
        } else {
            0.0
        };
        FieldView {
            field_id: self.id,
            center: self.center,
            radius: self.radius,
            opacity: FIELD_BASE_OPACITY * life,
            remaining_secs: self.remaining_secs(),
            target_locked: self.target_locked,
        }
    }
}

/// Fading line from the shooter to the aim point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletTrail {
    pub from: Vec3,
    pub to: Vec3,
    pub opacity: f32,
    pub age_secs: f32,
    pub timer: TickTimer,
}

impl BulletTrail {
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self {
            from,
            to,
            opacity: 1.0,
            age_secs: 0.0,
            timer: TickTimer::new(TRAIL_FADE_INTERVAL_SECS),
        }
    }

    pub fn is_faded(&self) -> bool {
        self.opacity <= 0.0
    }

    pub fn view(&self) -> TrailView {
        TrailView {
            from: self.from,
            to: self.to,
            opacity: self.opacity.max(0.0),
        }
    }
}
