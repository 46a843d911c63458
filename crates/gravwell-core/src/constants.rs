//! Simulation constants and tuning parameters.
//!
//! Kinematic values are expressed per frame and are tuned for the nominal
//! frame rate. Timed effects (field ticks, trail fade, lifetimes) are
//! expressed in seconds and are independent of frame rate.

use glam::Vec3;

/// Display refresh rate the per-frame constants are tuned for (Hz).
pub const NOMINAL_FRAME_RATE: u32 = 60;

/// Seconds per frame at the nominal frame rate.
pub const NOMINAL_FRAME_DT: f32 = 1.0 / NOMINAL_FRAME_RATE as f32;

/// Longest frame duration consumed by timed tasks in a single step (seconds).
pub const MAX_FRAME_DT: f32 = 0.25;

// --- Terrain ---

/// Side length of the square terrain (units).
pub const TERRAIN_SIZE: f32 = 100.0;

/// Side length of one constant-height terrain cell (units).
pub const TERRAIN_CELL_SIZE: f32 = 10.0;

/// Upper bound for a cell height (units).
pub const TERRAIN_MAX_HEIGHT: f32 = 5.0;

/// Largest accepted number of cells along one side of the field.
pub const MAX_TERRAIN_CELLS_PER_SIDE: usize = 1024;

/// How far below an entity's base the ground probe still counts as contact.
pub const GROUND_PROBE_DISTANCE: f32 = 0.2;

/// March step used when casting rays against the terrain (units).
pub const TERRAIN_RAY_STEP: f32 = 0.05;

/// Farthest distance an aim ray is tested (units, camera far plane).
pub const AIM_RAY_MAX_DISTANCE: f32 = 1000.0;

// --- Player ---

/// Spawn position of the player cube.
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Horizontal distance moved per frame per held movement key.
pub const PLAYER_MOVE_SPEED: f32 = 0.1;

/// Half the height of the player cube.
pub const PLAYER_HALF_HEIGHT: f32 = 0.5;

/// Upward vertical velocity applied by a jump (units/frame).
pub const PLAYER_JUMP_IMPULSE: f32 = 0.25;

/// Downward acceleration while airborne (units/frame²).
pub const PLAYER_GRAVITY: f32 = 0.01;

/// Cosmetic spin of the player cube about X and Y (radians/frame).
pub const PLAYER_SPIN_RATE: f32 = 0.01;

/// Camera position relative to the player.
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 5.0);

// --- Specter ---

/// Spawn position of the first specter.
pub const SPECTER_SPAWN: Vec3 = Vec3::new(10.0, 1.0, 10.0);

/// Patrol direction of the first specter.
pub const SPECTER_INITIAL_DIRECTION: Vec3 = Vec3::X;

/// Patrol speed (units/frame), slower than the player.
pub const SPECTER_SPEED: f32 = 0.02;

/// Half the side length of the specter cube.
pub const SPECTER_HALF_SIZE: f32 = 0.4;

/// Per-frame chance of picking a new patrol direction.
pub const SPECTER_RESAMPLE_PROBABILITY: f64 = 0.01;

/// Minimum distance between a capturing field and the respawned specter.
pub const SPECTER_RESPAWN_MIN_DISTANCE: f32 = 20.0;

/// Random placements tried before falling back to the farthest corner.
pub const SPECTER_RESPAWN_ATTEMPTS: u32 = 16;

// --- Projectile ---

/// Horizontal launch speed toward the aim point (units/frame).
pub const PROJECTILE_LAUNCH_SPEED: f32 = 0.5;

/// Fixed upward launch speed, independent of target range (units/frame).
pub const PROJECTILE_LAUNCH_LIFT: f32 = 0.3;

/// Downward acceleration applied to the projectile (units/frame²).
pub const PROJECTILE_GRAVITY: f32 = 0.01;

/// Height at or below which a descending projectile has impacted.
pub const PROJECTILE_IMPACT_HEIGHT: f32 = 0.5;

// --- Gravity field ---

/// Radius inside which entities are pulled (units).
pub const FIELD_RADIUS: f32 = 3.0;

/// Distance an entity is pulled toward the centre per tick (units).
pub const FIELD_PULL_STEP: f32 = 0.05;

/// Interval between field ticks (seconds).
pub const FIELD_TICK_INTERVAL_SECS: f32 = 0.05;

/// Lifetime of a field (seconds).
pub const FIELD_DURATION_SECS: f32 = 2.0;

/// A specter closer than this to the centre is captured (units).
pub const FIELD_CAPTURE_DISTANCE: f32 = 1.0;

/// Opacity of a freshly spawned field sphere.
pub const FIELD_BASE_OPACITY: f32 = 0.5;

// --- Bullet trail ---

/// Opacity lost per fade step.
pub const TRAIL_FADE_STEP: f32 = 0.05;

/// Interval between fade steps (seconds).
pub const TRAIL_FADE_INTERVAL_SECS: f32 = 0.05;

// --- Counters ---

/// Default ammo capacity.
pub const DEFAULT_MAX_AMMO: u32 = 10;

/// Default health capacity.
pub const DEFAULT_MAX_HEALTH: f32 = 100.0;
