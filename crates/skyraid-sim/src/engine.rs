//! Simulation engine: the frame driver.
//!
//! `SimulationEngine` owns the hecs ECS world, the player and camera,
//! processes queued host commands, runs all systems in a fixed order and
//! produces `FrameSnapshot`s. Completely headless (no renderer dependency),
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::asset::{LoadProgress, ModelAsset};
use skyraid_core::commands::SimCommand;
use skyraid_core::components::{CameraState, Player};
use skyraid_core::config::FlightConfig;
use skyraid_core::enums::{ActionOutcome, GamePhase, NodeKind};
use skyraid_core::error::{AnimationError, AssetError, SpawnError};
use skyraid_core::events::{GameEvent, SceneEvent, PLAYER_NODE_ID};
use skyraid_core::input::KeyState;
use skyraid_core::state::{FrameSnapshot, ScoreView};
use skyraid_core::types::SimTime;

use crate::animation::AnimationMixer;
use crate::systems;
use crate::systems::snapshot::SnapshotInput;
use crate::systems::spawner::SpawnSelector;
use crate::world_setup::{self, node_id};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Gameplay tuning.
    pub flight: FlightConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            flight: FlightConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: FlightConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    keys: KeyState,
    player: Option<Player>,
    camera: CameraState,
    player_mixer: Option<AnimationMixer>,
    asset: Option<ModelAsset>,
    load_error: Option<AssetError>,
    spawner: SpawnSelector,
    enemies_spawned: u32,
    last_shot: Option<f64>,
    load_progress: LoadProgress,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    scene_events: Vec<SceneEvent>,
    score: ScoreView,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let flight = config.flight;
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            keys: KeyState::default(),
            player: None,
            camera: CameraState {
                position: flight.camera_start(),
                look_at: glam::DVec3::ZERO,
            },
            player_mixer: None,
            asset: None,
            load_error: None,
            spawner: SpawnSelector::from_config(&flight),
            enemies_spawned: 0,
            last_shot: None,
            load_progress: LoadProgress::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            scene_events: Vec::new(),
            score: ScoreView::default(),
            config: flight,
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot.
    ///
    /// Commands are drained first, so key state is read exactly once per
    /// frame. Systems only run while the session is playable.
    pub fn tick(&mut self, dt: f64) -> FrameSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.process_commands();

        if self.phase == GamePhase::Playable {
            self.time.advance(dt);
            self.run_systems(dt);
        }

        let scene_events = std::mem::take(&mut self.scene_events);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            SnapshotInput {
                world: &self.world,
                time: self.time,
                phase: self.phase,
                load_progress: self.load_progress.fraction(),
                player: self.player.as_ref(),
                camera: &self.camera,
                player_mixer: self.player_mixer.as_ref(),
                score: &self.score,
            },
            scene_events,
            events,
        )
    }

    /// Switch the player's animation action.
    ///
    /// Unknown clip names return `ClipNotFound` and change nothing.
    pub fn play_action(&mut self, name: &str) -> Result<ActionOutcome, AnimationError> {
        if self.phase == GamePhase::Disposed {
            return Err(AnimationError::Disposed);
        }
        let mixer = self.player_mixer.as_mut().ok_or(AnimationError::NotLoaded)?;
        let outcome = mixer.play(name)?;
        if outcome == ActionOutcome::Started {
            let name = name.to_lowercase();
            info!("player action -> {name}");
            self.events.push(GameEvent::ActionChanged { name });
        }
        Ok(outcome)
    }

    /// Spawn `count` enemies from the loaded model. Returns how many were spawned.
    pub fn spawn_enemies(&mut self, count: usize) -> Result<usize, SpawnError> {
        if self.phase == GamePhase::Disposed {
            return Err(SpawnError::Disposed);
        }
        let Some(asset) = self.asset.as_ref() else {
            warn!("cannot spawn enemies: base model has not loaded");
            return Err(SpawnError::AssetNotLoaded);
        };

        let mut spawned = 0;
        for _ in 0..count {
            let Some(slot) = self.spawner.next_slot(&mut self.rng) else {
                warn!("cannot spawn enemies: spawn grid is empty");
                break;
            };
            let entity = world_setup::spawn_enemy(
                &mut self.world,
                asset,
                &self.config,
                slot,
                self.enemies_spawned,
            );
            self.enemies_spawned += 1;
            spawned += 1;

            let position = self
                .world
                .get::<&skyraid_core::components::Transform>(entity)
                .map(|t| t.translation)
                .unwrap_or_default();
            self.scene_events.push(SceneEvent::NodeAdded {
                id: node_id(entity),
                kind: NodeKind::Enemy,
                position,
            });
        }
        debug!("spawned {spawned} enemies");
        Ok(spawned)
    }

    /// Tear the session down. Returns `false` if it was already disposed.
    pub fn dispose(&mut self) -> bool {
        if self.phase == GamePhase::Disposed {
            return false;
        }

        if let Some(mut mixer) = self.player_mixer.take() {
            mixer.stop_all();
        }
        self.asset = None;
        let released = systems::cleanup::release_all(&mut self.world);
        self.player = None;
        self.keys = KeyState::default();
        self.command_queue.clear();
        self.scene_events.push(SceneEvent::SceneCleared);
        self.phase = GamePhase::Disposed;
        info!("engine disposed ({released} entities released)");
        true
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn player_mixer(&self) -> Option<&AnimationMixer> {
        self.player_mixer.as_ref()
    }

    /// Why the base model failed to load, once the phase is `Failed`.
    pub fn load_error(&self) -> Option<&AssetError> {
        self.load_error.as_ref()
    }

    /// Mutable player access for tests that need a specific starting state.
    #[cfg(test)]
    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    /// Spawn a bullet at an exact position (for collision tests).
    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, position: glam::DVec3) -> Entity {
        let mut config = self.config.clone();
        config.muzzle_offset = 0.0;
        world_setup::spawn_bullet(&mut self.world, position, &config)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: SimCommand) {
        if self.phase == GamePhase::Disposed {
            return;
        }
        match command {
            SimCommand::KeyDown { code } => {
                self.keys.apply_code(&code, true);
            }
            SimCommand::KeyUp { code } => {
                self.keys.apply_code(&code, false);
            }
            SimCommand::AssetProgress { loaded, total } => {
                self.load_progress = LoadProgress { loaded, total };
            }
            SimCommand::AssetLoaded { asset } => self.on_asset_loaded(asset),
            SimCommand::AssetFailed { message } => {
                let err = AssetError::LoadFailed(message);
                error!("{err}");
                if self.phase == GamePhase::Loading {
                    self.phase = GamePhase::Failed;
                    self.load_error = Some(err);
                }
            }
            SimCommand::PlayAction { name } => {
                if let Err(e) = self.play_action(&name) {
                    debug!("ignoring action request: {e}");
                }
            }
            SimCommand::Dispose => {
                self.dispose();
            }
        }
    }

    /// One-shot load completion: place the player, start its default action,
    /// populate enemies and open the frame loop.
    fn on_asset_loaded(&mut self, asset: ModelAsset) {
        if self.phase != GamePhase::Loading {
            warn!("ignoring asset load in phase {:?}", self.phase);
            return;
        }

        let mixer = AnimationMixer::new(asset.clips.clone(), self.config.cross_fade_secs);
        info!("animations: {}", mixer.clip_names().join(","));
        self.player_mixer = Some(mixer);

        let player = world_setup::new_player(&self.config);
        self.scene_events.push(SceneEvent::NodeAdded {
            id: PLAYER_NODE_ID,
            kind: NodeKind::Player,
            position: player.position,
        });
        self.player = Some(player);
        self.load_progress = LoadProgress { loaded: 1, total: 1 };
        self.asset = Some(asset);

        let default_action = self.config.default_action.clone();
        if let Err(e) = self.play_action(&default_action) {
            debug!("no default action: {e}");
        }

        if let Err(e) = self.spawn_enemies(self.config.enemy_count) {
            warn!("enemy spawn aborted: {e}");
        }

        self.phase = GamePhase::Playable;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let Some(player) = self.player.as_mut() else {
            warn!("playable phase without a player");
            return;
        };

        // 1. Movement
        systems::movement::run(player, &self.keys, &self.config, dt);
        // 2. Camera follows the already-moved player
        systems::camera::run(&mut self.camera, player, &self.config, dt);
        // 3. Bullets: advance, expire, collide
        systems::projectiles::update(
            &mut self.world,
            &self.config,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.scene_events,
            &mut self.score,
        );
        // 4. Player animation
        if let Some(mixer) = self.player_mixer.as_mut() {
            mixer.update(dt);
        }
        // 5. Fire
        if self.keys.shoot {
            systems::projectiles::shoot(
                &mut self.world,
                player,
                &self.keys,
                &self.config,
                self.time.elapsed_secs,
                &mut self.last_shot,
                &mut self.events,
                &mut self.scene_events,
                &mut self.score,
            );
        }
        // 6. Enemy animation
        systems::animation::run(&mut self.world, dt);
        // 7. Forward drift, after collision so bullets spawn from the rendered position
        systems::movement::apply_forward_drift(player, dt);
    }
}
