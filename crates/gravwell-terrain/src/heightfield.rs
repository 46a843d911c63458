//! HeightField: piecewise-constant terrain with height queries.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gravwell_core::config::TerrainConfig;
use gravwell_core::constants::{AIM_RAY_MAX_DISTANCE, TERRAIN_RAY_STEP};
use gravwell_core::types::AimRay;

use crate::raycast::{ray_box, RayHit};

/// Bisection passes used to refine a terrain ray hit.
const RAY_REFINE_ITERATIONS: u32 = 12;

/// Square terrain centred on the origin, split into `n × n` cells of
/// constant height. Immutable after generation.
#[derive(Debug, Clone)]
pub struct HeightField {
    config: TerrainConfig,
    cells_per_side: usize,
    /// Row-major heights: row = z cell, column = x cell.
    heights: Vec<f32>,
}

impl HeightField {
    /// Generate a field by drawing one height in `[0, max_height)` per cell.
    pub fn generate<R: Rng>(config: &TerrainConfig, rng: &mut R) -> Self {
        let n = config.cells_per_side().max(1);
        let heights = (0..n * n)
            .map(|_| {
                if config.max_height > 0.0 {
                    rng.gen_range(0.0..config.max_height)
                } else {
                    0.0
                }
            })
            .collect();
        Self {
            config: *config,
            cells_per_side: n,
            heights,
        }
    }

    /// Generate with a dedicated seeded RNG.
    pub fn from_seed(config: &TerrainConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }

    /// Build from explicit row-major heights. Returns `None` if the number of
    /// heights does not match the cell count or any height is out of range.
    pub fn from_heights(config: &TerrainConfig, heights: Vec<f32>) -> Option<Self> {
        let n = config.cells_per_side().max(1);
        let in_range = heights
            .iter()
            .all(|h| (0.0..=config.max_height).contains(h));
        if heights.len() != n * n || !in_range {
            return None;
        }
        Some(Self {
            config: *config,
            cells_per_side: n,
            heights,
        })
    }

    /// Field where every cell has the same height.
    pub fn flat(config: &TerrainConfig, height: f32) -> Self {
        let n = config.cells_per_side().max(1);
        Self {
            config: *config,
            cells_per_side: n,
            heights: vec![height.clamp(0.0, config.max_height.max(0.0)); n * n],
        }
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn cells_per_side(&self) -> usize {
        self.cells_per_side
    }

    pub fn half_size(&self) -> f32 {
        self.config.half_size()
    }

    /// Row-major cell heights, for building a render mesh.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Whether (x, z) lies on the field.
    pub fn contains(&self, x: f32, z: f32) -> bool {
        let half = self.half_size();
        (-half..=half).contains(&x) && (-half..=half).contains(&z)
    }

    /// Cell (column, row) containing (x, z), clamped to the nearest valid cell.
    pub fn cell_index(&self, x: f32, z: f32) -> (usize, usize) {
        (self.axis_index(x), self.axis_index(z))
    }

    fn axis_index(&self, v: f32) -> usize {
        let last = self.cells_per_side - 1;
        let idx = ((v + self.half_size()) / self.config.cell_size).floor();
        if idx.is_nan() || idx < 0.0 {
            0
        } else {
            (idx as usize).min(last)
        }
    }

    /// Height of a cell by (column, row). Out-of-range indices clamp.
    pub fn cell_height(&self, col: usize, row: usize) -> f32 {
        let last = self.cells_per_side - 1;
        self.heights[row.min(last) * self.cells_per_side + col.min(last)]
    }

    /// Terrain height at (x, z). Never fails: off-field queries clamp.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let (col, row) = self.cell_index(x, z);
        self.cell_height(col, row)
    }

    /// Downward ground probe from `base` (the bottom of an entity).
    ///
    /// Returns the ground height when terrain is at or above `base`, or
    /// below it by at most `max_distance`. `None` means nothing to stand on.
    pub fn probe_down(&self, base: Vec3, max_distance: f32) -> Option<f32> {
        let ground = self.height_at(base.x, base.z);
        (base.y - ground <= max_distance).then_some(ground)
    }

    /// Cast a ray against the terrain surface, up to [`AIM_RAY_MAX_DISTANCE`].
    pub fn raycast(&self, ray: &AimRay) -> Option<RayHit> {
        self.raycast_within(ray, AIM_RAY_MAX_DISTANCE)
    }

    /// Cast a ray against the terrain surface. Only the field itself is
    /// solid; rays leaving the field's footprint miss.
    pub fn raycast_within(&self, ray: &AimRay, max_distance: f32) -> Option<RayHit> {
        let half = self.half_size();
        // Everything under the surface counts as solid.
        let (enter, exit) = ray_box(
            ray,
            Vec3::new(-half, -1.0e4, -half),
            Vec3::new(half, self.config.max_height, half),
        )?;
        let end = exit.min(max_distance);
        if enter > end {
            return None;
        }

        let below = |t: f32| {
            let p = ray.at(t);
            p.y <= self.height_at(p.x, p.z)
        };

        if below(enter) {
            return Some(RayHit::new(ray, enter));
        }

        let mut prev = enter;
        let mut t = enter;
        while t < end {
            t = (t + TERRAIN_RAY_STEP).min(end);
            if below(t) {
                let (mut lo, mut hi) = (prev, t);
                for _ in 0..RAY_REFINE_ITERATIONS {
                    let mid = 0.5 * (lo + hi);
                    if below(mid) {
                        hi = mid;
                    } else {
                        lo = mid;
                    }
                }
                return Some(RayHit::new(ray, hi));
            }
            prev = t;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TerrainConfig {
        TerrainConfig::default()
    }

    #[test]
    fn test_heights_bounded() {
        for seed in 0..20 {
            let field = HeightField::from_seed(&config(), seed);
            assert_eq!(field.heights().len(), 100);
            for &h in field.heights() {
                assert!((0.0..=5.0).contains(&h), "height {h} out of range");
            }
        }
    }

    #[test]
    fn test_piecewise_constant_per_cell() {
        let field = HeightField::from_seed(&config(), 9);
        for row in 0..10 {
            for col in 0..10 {
                let expected = field.cell_height(col, row);
                let x0 = -50.0 + col as f32 * 10.0;
                let z0 = -50.0 + row as f32 * 10.0;
                for (dx, dz) in [(0.0, 0.0), (0.01, 9.99), (5.0, 5.0), (9.99, 0.5), (9.99, 9.99)] {
                    assert_eq!(
                        field.height_at(x0 + dx, z0 + dz),
                        expected,
                        "cell ({col}, {row}) not constant at offset ({dx}, {dz})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_flat_with_negative_max_height_is_zero() {
        let config = TerrainConfig {
            max_height: -1.0,
            ..config()
        };
        let field = HeightField::flat(&config, 2.0);
        assert!(field.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = HeightField::from_seed(&config(), 77);
        let b = HeightField::from_seed(&config(), 77);
        let c = HeightField::from_seed(&config(), 78);
        assert_eq!(a.heights(), b.heights());
        assert_ne!(a.heights(), c.heights());
    }

    #[test]
    fn test_out_of_range_queries_clamp() {
        let field = HeightField::from_seed(&config(), 3);
        assert_eq!(field.height_at(-500.0, -500.0), field.cell_height(0, 0));
        assert_eq!(field.height_at(500.0, 500.0), field.cell_height(9, 9));
        assert_eq!(field.height_at(500.0, -500.0), field.cell_height(9, 0));
        assert_eq!(field.height_at(f32::NAN, 0.0), field.height_at(-50.0, 0.0));
    }

    #[test]
    fn test_from_heights_validates() {
        assert!(HeightField::from_heights(&config(), vec![1.0; 99]).is_none());
        assert!(HeightField::from_heights(&config(), vec![6.0; 100]).is_none());
        assert!(HeightField::from_heights(&config(), vec![1.0; 100]).is_some());
    }

    #[test]
    fn test_probe_down() {
        let field = HeightField::flat(&config(), 2.0);
        // Standing on the surface.
        assert_eq!(field.probe_down(Vec3::new(0.0, 2.0, 0.0), 0.2), Some(2.0));
        // Sunk below the surface.
        assert_eq!(field.probe_down(Vec3::new(0.0, 1.5, 0.0), 0.2), Some(2.0));
        // Just within the search distance.
        assert_eq!(field.probe_down(Vec3::new(0.0, 2.15, 0.0), 0.2), Some(2.0));
        // Too far above.
        assert_eq!(field.probe_down(Vec3::new(0.0, 3.0, 0.0), 0.2), None);
    }

    #[test]
    fn test_raycast_flat_ground() {
        let field = HeightField::flat(&config(), 1.0);
        let ray = AimRay::from_camera(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, -1.0)).unwrap();
        let hit = field.raycast(&ray).unwrap();
        assert!((hit.point.y - 1.0).abs() < 1e-3, "hit {:?}", hit.point);
        assert!((hit.point.z + 4.0).abs() < 1e-3, "hit {:?}", hit.point);
        assert!((hit.distance - 4.0 * 2f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn test_raycast_misses_upward_and_off_field() {
        let field = HeightField::flat(&config(), 1.0);
        let up = AimRay::from_camera(Vec3::new(0.0, 3.0, 0.0), Vec3::Y).unwrap();
        assert!(field.raycast(&up).is_none());

        let level = AimRay::from_camera(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Z).unwrap();
        assert!(field.raycast(&level).is_none(), "level ray should leave the field");

        let outside = AimRay::from_camera(Vec3::new(80.0, 3.0, 0.0), Vec3::NEG_Y).unwrap();
        assert!(field.raycast(&outside).is_none());
    }

    #[test]
    fn test_raycast_hits_cell_wall() {
        // Column 6 (x in [10, 20)) is raised in every row.
        let mut heights = vec![0.0; 100];
        for row in 0..10 {
            heights[row * 10 + 6] = 4.0;
        }
        let field = HeightField::from_heights(&config(), heights).unwrap();
        let ray = AimRay::from_camera(Vec3::new(0.0, 2.0, 0.0), Vec3::X).unwrap();
        let hit = field.raycast(&ray).unwrap();
        assert!((hit.point.x - 10.0).abs() < 0.01, "hit {:?}", hit.point);
        assert!((hit.point.y - 2.0).abs() < 1e-5);
    }
}
