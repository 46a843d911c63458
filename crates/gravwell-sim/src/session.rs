//! Session counters read by the HUD.

use gravwell_core::config::SimConfig;
use gravwell_core::state::HudView;

/// Ammo and health. The core only spends ammo; health is displayed as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counters {
    pub ammo: u32,
    pub max_ammo: u32,
    pub health: f32,
    pub max_health: f32,
}

impl Counters {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            ammo: config.starting_ammo.min(config.max_ammo),
            max_ammo: config.max_ammo,
            health: config.max_health,
            max_health: config.max_health,
        }
    }

    /// Spend one round. Returns `false` and leaves the count alone when empty.
    pub fn try_consume_ammo(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    pub fn hud(&self) -> HudView {
        HudView {
            ammo: self.ammo,
            max_ammo: self.max_ammo,
            health_fraction: self.health_fraction(),
        }
    }
}
