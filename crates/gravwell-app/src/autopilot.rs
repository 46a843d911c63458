//! Scripted input source for headless runs.
//!
//! Walks forward with periodic strafing, taps jump every few seconds, and
//! fires at the specter (or at the ground ahead when there is none) on a
//! fixed cadence. Schedules are in frames so a run is reproducible.

use glam::Vec3;

use gravwell_core::commands::{KeyState, PlayerCommand};
use gravwell_core::state::FrameSnapshot;
use gravwell_core::types::AimRay;

use crate::game_loop::InputSource;

/// Frames between strafe direction changes.
const STRAFE_PERIOD: u64 = 90;
/// Frames between jumps.
const JUMP_PERIOD: u64 = 180;
/// Frames between shots (2 s at 60 Hz).
const FIRE_PERIOD: u64 = 120;
/// Ground aim point ahead of the player when no specter is visible.
const FALLBACK_AIM: Vec3 = Vec3::new(0.0, -1.0, -8.0);

#[derive(Debug, Default)]
pub struct Autopilot {
    frame: u64,
    keys: KeyState,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys_for(frame: u64) -> KeyState {
        let phase = (frame / STRAFE_PERIOD) % 4;
        KeyState {
            forward: true,
            left: phase == 1,
            right: phase == 3,
            jump: frame % JUMP_PERIOD == 0 && frame > 0,
            ..Default::default()
        }
    }

    fn aim(snapshot: &FrameSnapshot) -> Option<AimRay> {
        let target = match &snapshot.specter {
            Some(specter) => specter.position,
            None => snapshot.player.position + FALLBACK_AIM,
        };
        AimRay::toward(snapshot.camera, target)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, last: Option<&FrameSnapshot>) -> Vec<PlayerCommand> {
        let frame = self.frame;
        self.frame += 1;

        let mut commands = Vec::new();
        let keys = Self::keys_for(frame);
        if keys != self.keys {
            self.keys = keys;
            commands.push(PlayerCommand::SetKeys { keys });
        }

        if frame % FIRE_PERIOD == FIRE_PERIOD - 1 {
            if let Some(ray) = last.and_then(Self::aim) {
                commands.push(PlayerCommand::Fire { ray });
            }
        }
        commands
    }
}
