//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Frame clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated frames.
    pub frame: u64,
    /// Sum of consumed frame durations in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt_secs`.
    pub fn advance(&mut self, dt_secs: f32) {
        self.frame += 1;
        self.elapsed_secs += dt_secs as f64;
    }
}

/// Targeting ray cast from the viewpoint when firing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimRay {
    pub origin: Vec3,
    /// Unit-length direction.
    pub direction: Vec3,
}

impl AimRay {
    /// Build a ray from the camera position along its forward vector.
    /// Returns `None` for a zero-length forward vector.
    pub fn from_camera(camera: Vec3, forward: Vec3) -> Option<Self> {
        let direction = forward.try_normalize()?;
        Some(Self {
            origin: camera,
            direction,
        })
    }

    /// Ray from `origin` through `target`.
    pub fn toward(origin: Vec3, target: Vec3) -> Option<Self> {
        Self::from_camera(origin, target - origin)
    }

    /// Point at `distance` along the ray.
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Project onto the horizontal (XZ) plane.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
