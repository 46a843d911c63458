//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::types::AimRay;

/// Debounced logical key state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Manual descent, applied regardless of grounded state.
    pub down: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace the held-key state.
    SetKeys { keys: KeyState },
    /// Fire a gravity well along the targeting ray.
    Fire { ray: AimRay },
    /// Freeze the simulation.
    Pause,
    /// Unfreeze the simulation.
    Resume,
}
