//! Fire control: ammo gate, aim resolution and projectile launch.
//!
//! A shot spends one round, resolves the aim ray against the specter and the
//! terrain, draws a trail to the aim point, and launches a projectile on a
//! fixed-lift arc toward it. The arc is not solved for range.

use glam::Vec3;
use hecs::World;

use gravwell_core::components::{Body, Extent, Specter};
use gravwell_core::constants::*;
use gravwell_core::enums::HitKind;
use gravwell_core::events::SimEvent;
use gravwell_core::types::{horizontal, AimRay};

use gravwell_terrain::raycast::ray_cube;
use gravwell_terrain::HeightField;

use crate::effects::BulletTrail;
use crate::projectile::Projectile;
use crate::session::Counters;

/// Where an aim ray landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimResolution {
    pub point: Vec3,
    pub hit: HitKind,
    /// The specter that was hit, when `hit` is `HitKind::Specter`.
    pub specter: Option<hecs::Entity>,
}

/// Everything a shot may touch.
pub struct FireContext<'a> {
    pub world: &'a World,
    pub terrain: &'a HeightField,
    pub counters: &'a mut Counters,
    pub projectile: &'a mut Option<Projectile>,
    pub trails: &'a mut Vec<BulletTrail>,
    pub events: &'a mut Vec<SimEvent>,
}

/// Handle a fire action. An empty magazine drops the shot.
///
/// The ray direction is renormalised, so rays built by hand or decoded from a
/// command keep distances in world units. A zero direction is a miss.
pub fn fire(ctx: FireContext<'_>, ray: &AimRay) {
    if !ctx.counters.try_consume_ammo() {
        log::info!("Out of ammo");
        ctx.events.push(SimEvent::OutOfAmmo);
        return;
    }

    let aim = AimRay::from_camera(ray.origin, ray.direction)
        .and_then(|ray| resolve_aim(ctx.world, ctx.terrain, &ray));
    let Some(aim) = aim else {
        log::debug!("Shot hit nothing");
        ctx.events.push(SimEvent::ShotMissed);
        return;
    };

    ctx.trails.push(BulletTrail::new(ray.origin, aim.point));

    if ctx.projectile.is_some() {
        log::debug!("Replacing projectile still in flight");
        ctx.events.push(SimEvent::ProjectileReplaced);
    }
    *ctx.projectile = Some(launch(ray.origin, &aim));

    log::info!(
        "Shot fired at {:?} ({:?}), {} rounds left",
        aim.point,
        aim.hit,
        ctx.counters.ammo
    );
    ctx.events.push(SimEvent::ShotFired {
        target: aim.point,
        hit: aim.hit,
    });
}

/// Resolve the aim ray. A specter hit wins over a terrain hit regardless of
/// distance; a removed specter is simply not there to hit.
pub fn resolve_aim(world: &World, terrain: &HeightField, ray: &AimRay) -> Option<AimResolution> {
    let specter_hit = world
        .query::<(&Specter, &Body, &Extent)>()
        .iter()
        .filter_map(|(entity, (_specter, body, extent))| {
            ray_cube(ray, body.position, extent.half_size)
                .filter(|hit| hit.distance <= AIM_RAY_MAX_DISTANCE)
                .map(|hit| (entity, hit))
        })
        .min_by(|a, b| a.1.distance.total_cmp(&b.1.distance));

    if let Some((entity, hit)) = specter_hit {
        return Some(AimResolution {
            point: hit.point,
            hit: HitKind::Specter,
            specter: Some(entity),
        });
    }

    terrain.raycast(ray).map(|hit| AimResolution {
        point: hit.point,
        hit: HitKind::Terrain,
        specter: None,
    })
}

/// Initial projectile state: horizontal speed toward the aim point plus a
/// fixed lift.
pub fn launch(origin: Vec3, aim: &AimResolution) -> Projectile {
    let heading = horizontal(aim.point - origin).normalize_or_zero();
    let velocity = heading * PROJECTILE_LAUNCH_SPEED + Vec3::Y * PROJECTILE_LAUNCH_LIFT;

    Projectile {
        position: origin,
        velocity,
        target: aim.point,
        hit: aim.hit,
        locked_target: aim.specter,
    }
}
