//! Session configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides. Loading is the only fallible surface of the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading or validating a [`SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Height field dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Side length of the square field, centred on the origin.
    pub size: f32,
    /// Side length of one constant-height cell.
    pub cell_size: f32,
    pub max_height: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: TERRAIN_SIZE,
            cell_size: TERRAIN_CELL_SIZE,
            max_height: TERRAIN_MAX_HEIGHT,
        }
    }
}

impl TerrainConfig {
    /// Number of cells along one side, in `1..=MAX_TERRAIN_CELLS_PER_SIDE`.
    pub fn cells_per_side(&self) -> usize {
        let cells = (self.size / self.cell_size).round();
        if cells.is_nan() {
            return 1;
        }
        cells.clamp(1.0, MAX_TERRAIN_CELLS_PER_SIDE as f32) as usize
    }

    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs = same simulation.
    pub seed: u64,
    pub terrain: TerrainConfig,
    pub starting_ammo: u32,
    pub max_ammo: u32,
    pub max_health: f32,
    /// Fixed height the specter patrols at.
    pub specter_hover_height: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            terrain: TerrainConfig::default(),
            starting_ammo: DEFAULT_MAX_AMMO,
            max_ammo: DEFAULT_MAX_AMMO,
            max_health: DEFAULT_MAX_HEALTH,
            specter_hover_height: SPECTER_SPAWN.y,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.terrain;
        if !(t.size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "terrain.size must be positive, got {}",
                t.size
            )));
        }
        if !(t.cell_size > 0.0) || t.cell_size > t.size {
            return Err(ConfigError::Invalid(format!(
                "terrain.cell_size must be in (0, {}], got {}",
                t.size, t.cell_size
            )));
        }
        let cells = t.size / t.cell_size;
        if (cells - cells.round()).abs() > 1e-4 {
            return Err(ConfigError::Invalid(format!(
                "terrain.cell_size {} does not tile a field of size {}",
                t.cell_size, t.size
            )));
        }
        if cells.round() > MAX_TERRAIN_CELLS_PER_SIDE as f32 {
            return Err(ConfigError::Invalid(format!(
                "terrain has {} cells per side, at most {} allowed",
                cells.round(),
                MAX_TERRAIN_CELLS_PER_SIDE
            )));
        }
        if !(t.max_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "terrain.max_height must be positive, got {}",
                t.max_height
            )));
        }
        if self.starting_ammo > self.max_ammo {
            return Err(ConfigError::Invalid(format!(
                "starting_ammo {} exceeds max_ammo {}",
                self.starting_ammo, self.max_ammo
            )));
        }
        if !(self.max_health > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_health must be positive, got {}",
                self.max_health
            )));
        }
        Ok(())
    }
}
