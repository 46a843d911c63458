//! Simulation engine for GRAVWELL.
//!
//! Owns the hecs ECS world, runs systems once per frame,
//! and produces FrameSnapshots for the renderer and UI.

pub mod effects;
pub mod engine;
pub mod projectile;
pub mod session;
pub mod systems;
pub mod timer;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use gravwell_core as core;
