use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gravwell_core::constants::*;

use crate::patrol::{contain, evaluate, random_direction, PatrolContext};
use crate::spawn::{farthest_corner, respawn_position};

const HALF: f32 = 50.0;

fn make_context(position: Vec3, direction: Vec3) -> PatrolContext {
    PatrolContext {
        position,
        direction,
        speed: SPECTER_SPEED,
        half_extent: HALF,
        hover_height: 1.0,
    }
}

fn assert_unit_horizontal(dir: Vec3) {
    assert!(
        (dir.length() - 1.0).abs() < 1e-5,
        "direction {dir:?} is not unit length"
    );
    assert_eq!(dir.y, 0.0, "direction {dir:?} has a vertical component");
}

#[test]
fn test_random_direction_is_unit_and_horizontal() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..10_000 {
        assert_unit_horizontal(random_direction(&mut rng));
    }
}

#[test]
fn test_step_moves_along_direction_and_pins_height() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let ctx = make_context(Vec3::new(0.0, 7.0, 0.0), Vec3::X);
    let update = evaluate(&ctx, &mut rng);
    assert_eq!(update.position.y, 1.0);
    if !update.resampled {
        assert!((update.position.x - SPECTER_SPEED).abs() < 1e-6);
        assert_eq!(update.position.z, 0.0);
        assert_eq!(update.direction, Vec3::X);
    }
    assert!(!update.reflected);
}

#[test]
fn test_resample_rate_is_about_one_percent() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let ctx = make_context(Vec3::ZERO, Vec3::X);
    let n = 100_000;
    let resampled = (0..n).filter(|_| evaluate(&ctx, &mut rng).resampled).count();
    let rate = resampled as f64 / n as f64;
    assert!(
        (0.008..0.012).contains(&rate),
        "resample rate should be ~1%, got {rate}"
    );
}

#[test]
fn test_reflection_per_bound() {
    let diag = Vec3::new(1.0, 0.0, 1.0).normalize();

    let (dir, reflected) = contain(Vec3::new(HALF + 0.01, 1.0, 0.0), diag, HALF);
    assert!(reflected);
    assert!(dir.x < 0.0 && dir.z > 0.0, "+x bound flips x only: {dir:?}");

    let (dir, reflected) = contain(Vec3::new(-HALF - 0.01, 1.0, 0.0), -diag, HALF);
    assert!(reflected);
    assert!(dir.x > 0.0 && dir.z < 0.0, "-x bound flips x only: {dir:?}");

    let (dir, reflected) = contain(Vec3::new(0.0, 1.0, HALF + 0.01), diag, HALF);
    assert!(reflected);
    assert!(dir.x > 0.0 && dir.z < 0.0, "+z bound flips z only: {dir:?}");

    let (dir, reflected) = contain(Vec3::new(0.0, 1.0, -HALF - 0.01), -diag, HALF);
    assert!(reflected);
    assert!(dir.x < 0.0 && dir.z > 0.0, "-z bound flips z only: {dir:?}");

    assert_unit_horizontal(dir);
}

#[test]
fn test_inward_heading_not_reflected() {
    let inward = Vec3::NEG_X;
    let (dir, reflected) = contain(Vec3::new(HALF + 0.01, 1.0, 0.0), inward, HALF);
    assert!(!reflected);
    assert_eq!(dir, inward);
}

/// Long random walk: heading stays unit length and the specter never
/// strays more than one step past a bound.
#[test]
fn test_long_patrol_stays_contained() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    // Start near a corner heading out to exercise reflections quickly.
    let mut position = Vec3::new(HALF - 0.5, 1.0, HALF - 0.5);
    let mut direction = Vec3::new(1.0, 0.0, 1.0).normalize();
    let speed = 0.5;
    let mut reflections = 0;

    for _ in 0..200_000 {
        let ctx = PatrolContext {
            position,
            direction,
            speed,
            half_extent: HALF,
            hover_height: 1.0,
        };
        let update = evaluate(&ctx, &mut rng);
        position = update.position;
        direction = update.direction;
        if update.reflected {
            reflections += 1;
        }

        assert_unit_horizontal(direction);
        assert!(position.x.abs() <= HALF + speed + 1e-3, "x escaped: {position:?}");
        assert!(position.z.abs() <= HALF + speed + 1e-3, "z escaped: {position:?}");
    }
    assert!(reflections > 0, "walk should have hit a bound");
}

#[test]
fn test_respawn_far_from_capture() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..1_000 {
        let avoid = Vec3::new(3.0, 0.5, -4.0);
        let p = respawn_position(&mut rng, avoid, HALF, SPECTER_RESPAWN_MIN_DISTANCE, 1.0);
        let d = Vec3::new(p.x - avoid.x, 0.0, p.z - avoid.z).length();
        assert!(d >= SPECTER_RESPAWN_MIN_DISTANCE, "respawned too close: {p:?}");
        assert!(p.x.abs() <= HALF && p.z.abs() <= HALF);
        assert_eq!(p.y, 1.0);
    }
}

#[test]
fn test_respawn_falls_back_to_far_corner() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    // Minimum distance larger than most of the square forces the fallback.
    let avoid = Vec3::new(10.0, 0.0, -10.0);
    let p = respawn_position(&mut rng, avoid, 5.0, 1_000.0, 1.0);
    assert_eq!(p, Vec3::new(-5.0, 1.0, 5.0));
    assert_eq!(farthest_corner(avoid, 5.0, 1.0), p);
}
