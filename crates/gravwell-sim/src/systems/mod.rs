//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). Per-frame state they touch is passed in explicitly.

pub mod fire_control;
pub mod gravity_field;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod specter_ai;
pub mod trail;
