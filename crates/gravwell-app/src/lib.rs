//! GRAVWELL headless runner.
//!
//! Drives the simulation engine from a frame-pacing loop with a pluggable
//! input source. The binary feeds it a scripted autopilot.

pub mod autopilot;
pub mod game_loop;

pub use gravwell_core as core;
