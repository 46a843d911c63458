//! Terrain system for GRAVWELL.
//!
//! Blocky procedural height field, ground probing and ray casting.

pub use gravwell_core as core;

pub mod heightfield;
pub mod raycast;

// Re-export key types for convenience.
pub use heightfield::HeightField;
pub use raycast::{ray_box, ray_cube, RayHit};
