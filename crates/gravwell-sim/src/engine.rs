//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the terrain, the in-flight
//! projectile and every active effect. It processes player commands, runs
//! all systems once per frame, and produces `FrameSnapshot`s. Completely
//! headless, single-threaded and deterministic for a given seed and input
//! sequence.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gravwell_core::commands::{KeyState, PlayerCommand};
use gravwell_core::components::Body;
use gravwell_core::config::{ConfigError, SimConfig};
use gravwell_core::constants::{MAX_FRAME_DT, SPECTER_SPAWN};
use gravwell_core::enums::GamePhase;
use gravwell_core::events::SimEvent;
use gravwell_core::state::FrameSnapshot;
use gravwell_core::types::{AimRay, SimTime};

use gravwell_terrain::HeightField;

use crate::effects::{BulletTrail, GravityField};
use crate::projectile::Projectile;
use crate::session::Counters;
use crate::systems;
use crate::systems::fire_control::FireContext;
use crate::systems::gravity_field::RespawnRules;
use crate::systems::snapshot::SnapshotInput;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    terrain: HeightField,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    keys: KeyState,
    events: Vec<SimEvent>,

    player: hecs::Entity,
    specter: Option<hecs::Entity>,
    projectile: Option<Projectile>,
    fields: Vec<GravityField>,
    next_field_id: u32,
    trails: Vec<BulletTrail>,
    counters: Counters,
}

impl SimulationEngine {
    /// Create a new engine, generating the terrain from the config seed.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let terrain = HeightField::generate(&config.terrain, &mut rng);
        Ok(Self::assemble(config, terrain, rng))
    }

    /// Create a new engine on a prepared terrain.
    pub fn with_terrain(config: SimConfig, terrain: HeightField) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self::assemble(config, terrain, rng))
    }

    fn assemble(config: SimConfig, terrain: HeightField, rng: ChaCha8Rng) -> Self {
        let mut world = World::new();
        let player = world_setup::spawn_player(&mut world, &terrain);
        let specter =
            world_setup::spawn_specter(&mut world, SPECTER_SPAWN, config.specter_hover_height);
        let counters = Counters::from_config(&config);

        log::info!(
            "Simulation ready: seed {}, {}x{} terrain cells",
            config.seed,
            terrain.cells_per_side(),
            terrain.cells_per_side()
        );

        Self {
            config,
            world,
            terrain,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            command_queue: VecDeque::new(),
            keys: KeyState::default(),
            events: Vec::new(),
            player,
            specter: Some(specter),
            projectile: None,
            fields: Vec::new(),
            next_field_id: 0,
            trails: Vec::new(),
            counters,
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt_secs` and return the
    /// resulting snapshot. Per-frame motion ignores `dt_secs`; timed effects
    /// consume it.
    pub fn tick(&mut self, dt_secs: f32) -> FrameSnapshot {
        let dt_secs = if dt_secs.is_finite() {
            dt_secs.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt_secs);
            self.time.advance(dt_secs);
        }

        self.snapshot()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn terrain(&self) -> &HeightField {
        &self.terrain
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> hecs::Entity {
        self.player
    }

    /// Current specter handle. Stale handles held elsewhere miss on lookup.
    pub fn specter(&self) -> Option<hecs::Entity> {
        self.specter
    }

    pub fn projectile(&self) -> Option<&Projectile> {
        self.projectile.as_ref()
    }

    pub fn fields(&self) -> &[GravityField] {
        &self.fields
    }

    pub fn trails(&self) -> &[BulletTrail] {
        &self.trails
    }

    pub fn ammo(&self) -> u32 {
        self.counters.ammo
    }

    /// Player body position, if the player exists.
    pub fn player_position(&self) -> Option<Vec3> {
        self.body_position(self.player)
    }

    pub fn specter_position(&self) -> Option<Vec3> {
        self.specter.and_then(|entity| self.body_position(entity))
    }

    /// Camera position following the player.
    pub fn camera(&self) -> Vec3 {
        systems::player::camera_position(self.player_position().unwrap_or_default())
    }

    fn body_position(&self, entity: hecs::Entity) -> Option<Vec3> {
        self.world.get::<&Body>(entity).ok().map(|b| b.position)
    }

    /// Mutable world access for tests that stage positions directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Put a projectile in flight directly (for tests that skip the aim ray).
    #[cfg(test)]
    pub fn set_projectile(&mut self, projectile: Option<Projectile>) {
        self.projectile = projectile;
    }

    /// Spawn a field directly (for tests that skip the projectile).
    #[cfg(test)]
    pub fn spawn_test_field(&mut self, impact: crate::projectile::Impact) -> u32 {
        self.spawn_field(&impact)
    }

    #[cfg(test)]
    pub fn set_ammo(&mut self, ammo: u32) {
        self.counters.ammo = ammo;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetKeys { keys } => {
                self.keys = keys;
            }
            PlayerCommand::Fire { ray } => {
                if self.phase == GamePhase::Active {
                    self.fire(&ray);
                } else {
                    log::debug!("Fire ignored while paused");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    fn fire(&mut self, ray: &AimRay) {
        systems::fire_control::fire(
            FireContext {
                world: &self.world,
                terrain: &self.terrain,
                counters: &mut self.counters,
                projectile: &mut self.projectile,
                trails: &mut self.trails,
                events: &mut self.events,
            },
            ray,
        );
    }

    fn spawn_field(&mut self, impact: &crate::projectile::Impact) -> u32 {
        let id = self.next_field_id;
        self.next_field_id += 1;
        let field = systems::gravity_field::spawn(
            id,
            impact,
            self.player,
            self.specter,
            &mut self.events,
        );
        self.fields.push(field);
        id
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_secs: f32) {
        // 1. Player: terrain clamp, input integration, gravity
        systems::player::run(&mut self.world, &self.terrain, &self.keys, &mut self.events);
        // 2. Specter AI
        systems::specter_ai::run(
            &mut self.world,
            &mut self.rng,
            self.terrain.half_size(),
            self.config.specter_hover_height,
        );
        // 3. Projectile flight; impact spawns a field
        if let Some(impact) = systems::projectile::run(&mut self.projectile) {
            self.spawn_field(&impact);
        }
        // 4. Gravity fields (pull, capture, expiry)
        systems::gravity_field::run(
            &mut self.world,
            &mut self.fields,
            &mut self.specter,
            &mut self.rng,
            RespawnRules {
                half_extent: self.terrain.half_size(),
                hover_height: self.config.specter_hover_height,
            },
            dt_secs,
            &mut self.events,
        );
        // 5. Trail fade
        systems::trail::run(&mut self.trails, dt_secs);
    }

    fn snapshot(&mut self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(SnapshotInput {
            world: &self.world,
            time: self.time,
            phase: self.phase,
            player: self.player,
            specter: self.specter,
            camera: self.camera(),
            projectile: self.projectile.as_ref(),
            fields: &self.fields,
            trails: &self.trails,
            counters: &self.counters,
            events: std::mem::take(&mut self.events),
        })
    }
}
