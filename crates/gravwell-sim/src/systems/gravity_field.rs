//! Gravity field system: spawning, pull ticks, capture and expiry.
//!
//! Each field ticks on its own schedule. A pull whose entity has been
//! despawned (e.g. captured by another field) is released on its next tick
//! instead of touching anything.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use gravwell_core::components::{Body, Specter};
use gravwell_core::constants::*;
use gravwell_core::enums::{CaptureState, HitKind};
use gravwell_core::events::SimEvent;

use gravwell_specter_ai::spawn::respawn_position;

use crate::effects::GravityField;
use crate::projectile::Impact;
use crate::world_setup;

/// Where and how a captured specter is replaced.
#[derive(Debug, Clone, Copy)]
pub struct RespawnRules {
    pub half_extent: f32,
    pub hover_height: f32,
}

/// Create the field for an impact.
///
/// A shot that hit the specter locks the field onto that specter alone;
/// otherwise the field affects the player and the current specter.
pub fn spawn(
    id: u32,
    impact: &Impact,
    player: hecs::Entity,
    specter: Option<hecs::Entity>,
    events: &mut Vec<SimEvent>,
) -> GravityField {
    let target_locked = impact.hit == HitKind::Specter;
    let affected: Vec<hecs::Entity> = if target_locked {
        impact.locked_target.into_iter().collect()
    } else {
        std::iter::once(player).chain(specter).collect()
    };

    log::info!(
        "Gravity field {} spawned at {:?} ({} affected, locked: {})",
        id,
        impact.position,
        affected.len(),
        target_locked
    );
    events.push(SimEvent::FieldSpawned {
        field_id: id,
        center: impact.position,
        target_locked,
    });

    GravityField::new(id, impact.position, target_locked, &affected)
}

/// Advance every field by `dt_secs`: run due ticks, then drop expired fields.
pub fn run(
    world: &mut World,
    fields: &mut Vec<GravityField>,
    specter: &mut Option<hecs::Entity>,
    rng: &mut ChaCha8Rng,
    rules: RespawnRules,
    dt_secs: f32,
    events: &mut Vec<SimEvent>,
) {
    for field in fields.iter_mut() {
        let now = field.age_secs + dt_secs;
        while field.timer.pop_due(now, field.duration_secs) {
            tick(world, field, specter, rng, rules, events);
        }
        field.age_secs = now;
    }

    fields.retain_mut(|field| {
        if !field.is_expired() {
            return true;
        }
        field.shut_down();
        log::info!("Gravity field {} expired", field.id);
        events.push(SimEvent::FieldExpired { field_id: field.id });
        false
    });
}

/// One pull tick of a single field.
fn tick(
    world: &mut World,
    field: &mut GravityField,
    specter: &mut Option<hecs::Entity>,
    rng: &mut ChaCha8Rng,
    rules: RespawnRules,
    events: &mut Vec<SimEvent>,
) {
    let (field_id, center, radius) = (field.id, field.center, field.radius);

    for pull in field.pulls.iter_mut().filter(|p| p.is_active()) {
        let is_specter = world.get::<&Specter>(pull.entity).is_ok();

        let captured_at = {
            let Ok(mut body) = world.get::<&mut Body>(pull.entity) else {
                log::debug!("Field {}: target gone, releasing pull", field_id);
                pull.release();
                continue;
            };

            let offset = center - body.position;
            let distance = offset.length();
            if distance >= radius {
                continue;
            }

            body.position += offset.normalize_or_zero() * FIELD_PULL_STEP;

            (is_specter && distance < FIELD_CAPTURE_DISTANCE).then_some(body.position)
        };

        if let Some(position) = captured_at {
            pull.state = CaptureState::Captured;
            capture(world, field_id, center, pull.entity, position, specter, rng, rules, events);
        }
    }

    if field.pulls.iter().all(|p| !p.is_active()) {
        field.timer.cancel();
    }
}

/// Remove a captured specter and put a fresh one far from the field.
#[allow(clippy::too_many_arguments)]
fn capture(
    world: &mut World,
    field_id: u32,
    center: Vec3,
    entity: hecs::Entity,
    position: Vec3,
    specter: &mut Option<hecs::Entity>,
    rng: &mut ChaCha8Rng,
    rules: RespawnRules,
    events: &mut Vec<SimEvent>,
) {
    let _ = world.despawn(entity);
    log::info!("Specter captured by field {} at {:?}", field_id, position);
    events.push(SimEvent::SpecterCaptured { field_id, position });

    let spawn_at = respawn_position(
        rng,
        center,
        rules.half_extent,
        SPECTER_RESPAWN_MIN_DISTANCE,
        rules.hover_height,
    );
    *specter = Some(world_setup::spawn_specter(world, spawn_at, rules.hover_height));
    log::info!("Specter respawned at {:?}", spawn_at);
    events.push(SimEvent::SpecterSpawned { position: spawn_at });
}
