//! Specter AI for GRAVWELL.
//!
//! Patrol steering, boundary containment and respawn placement as pure
//! functions over plain data. No ECS dependency.

pub mod patrol;
pub mod spawn;

pub use gravwell_core as core;

#[cfg(test)]
mod tests;
