//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}

/// What an aim ray resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitKind {
    Specter,
    Terrain,
}

/// Per-entity state of a gravity field's pull.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureState {
    /// Pull is ticking.
    #[default]
    Active,
    /// The specter reached the centre and was removed.
    Captured,
    /// Pull stopped without a capture (target gone or field expired).
    Released,
}
