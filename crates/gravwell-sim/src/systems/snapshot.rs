//! Snapshot system: reads the world and effect lists into a FrameSnapshot.
//!
//! Read-only; it never modifies the world.

use glam::Vec3;
use hecs::World;

use gravwell_core::components::{Body, Orientation};
use gravwell_core::enums::GamePhase;
use gravwell_core::events::SimEvent;
use gravwell_core::state::*;
use gravwell_core::types::SimTime;

use crate::effects::{BulletTrail, GravityField};
use crate::projectile::Projectile;
use crate::session::Counters;

/// Everything the snapshot is built from.
pub struct SnapshotInput<'a> {
    pub world: &'a World,
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: hecs::Entity,
    pub specter: Option<hecs::Entity>,
    pub camera: Vec3,
    pub projectile: Option<&'a Projectile>,
    pub fields: &'a [GravityField],
    pub trails: &'a [BulletTrail],
    pub counters: &'a Counters,
    pub events: Vec<SimEvent>,
}

/// Build a complete FrameSnapshot from the current state.
pub fn build_snapshot(input: SnapshotInput<'_>) -> FrameSnapshot {
    FrameSnapshot {
        time: input.time,
        phase: input.phase,
        player: entity_view(input.world, input.player).unwrap_or_default(),
        specter: input
            .specter
            .and_then(|entity| entity_view(input.world, entity)),
        camera: input.camera,
        projectile: input.projectile.map(|p| ProjectileView {
            position: p.position,
            velocity: p.velocity,
        }),
        fields: input.fields.iter().map(GravityField::view).collect(),
        trails: input.trails.iter().map(BulletTrail::view).collect(),
        hud: input.counters.hud(),
        events: input.events,
    }
}

/// View of a live entity; `None` once it has been despawned.
fn entity_view(world: &World, entity: hecs::Entity) -> Option<EntityView> {
    let body = *world.get::<&Body>(entity).ok()?;
    let rotation = world
        .get::<&Orientation>(entity)
        .map(|o| Vec3::new(o.pitch, o.yaw, 0.0))
        .unwrap_or(Vec3::ZERO);

    Some(EntityView {
        position: body.position,
        rotation,
        grounded: body.grounded,
    })
}
