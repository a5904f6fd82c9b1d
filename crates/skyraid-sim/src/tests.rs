//! Tests for the frame driver, flight controller, projectiles and spawning.

use approx::assert_relative_eq;
use glam::DVec3;
use hecs::Entity;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skyraid_core::asset::{AnimationClip, ModelAsset, SubMesh};
use skyraid_core::commands::SimCommand;
use skyraid_core::components::{Bullet, Enemy, Transform};
use skyraid_core::config::FlightConfig;
use skyraid_core::enums::*;
use skyraid_core::error::{AnimationError, SpawnError};
use skyraid_core::events::{GameEvent, SceneEvent};
use skyraid_core::input::KeyState;
use skyraid_core::types::Aabb;

use crate::animation::AnimationMixer;
use crate::engine::{SimConfig, SimulationEngine};
use crate::systems::movement::{self, TurnDirection};
use crate::systems::spawner::SpawnSelector;
use crate::world_setup::{self, node_id};

// ---- Fixtures ----

/// Drone model: a body long along its local X axis plus a wing spar.
fn drone_asset() -> ModelAsset {
    ModelAsset {
        sub_meshes: vec![
            SubMesh {
                name: "Body".into(),
                bounds: Aabb::from_center(DVec3::ZERO, DVec3::new(0.5, 0.3, 1.5)),
                visible: true,
            },
            SubMesh {
                name: "Wings".into(),
                bounds: Aabb::from_center(DVec3::ZERO, DVec3::new(1.5, 0.1, 0.4)),
                visible: true,
            },
        ],
        clips: vec![
            AnimationClip {
                name: "Fuselage".into(),
                duration: 1.0,
            },
            AnimationClip {
                name: "Idle".into(),
                duration: 2.0,
            },
        ],
    }
}

fn loaded_engine_with(seed: u64, asset: ModelAsset) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(SimCommand::AssetLoaded { asset });
    engine.tick(0.0);
    engine
}

fn loaded_engine() -> SimulationEngine {
    loaded_engine_with(42, drone_asset())
}

fn key_down(engine: &mut SimulationEngine, code: &str) {
    engine.queue_command(SimCommand::KeyDown { code: code.into() });
}

fn key_up(engine: &mut SimulationEngine, code: &str) {
    engine.queue_command(SimCommand::KeyUp { code: code.into() });
}

fn bullet_count(engine: &SimulationEngine) -> usize {
    let mut q = engine.world().query::<&Bullet>();
    q.iter().count()
}

fn enemies(engine: &SimulationEngine) -> Vec<(Entity, Enemy, DVec3)> {
    let mut q = engine.world().query::<(&Enemy, &Transform)>();
    q.iter()
        .map(|(e, (enemy, t))| (e, *enemy, t.translation))
        .collect()
}

fn test_player(config: &FlightConfig) -> skyraid_core::components::Player {
    world_setup::new_player(config)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = loaded_engine_with(12345, drone_asset());
    let mut engine_b = loaded_engine_with(12345, drone_asset());

    for engine in [&mut engine_a, &mut engine_b] {
        key_down(engine, "Space");
        key_down(engine, "KeyD");
    }

    for _ in 0..200 {
        let json_a = serde_json::to_string(&engine_a.tick(1.0 / 60.0)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(1.0 / 60.0)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_different_seeds_place_enemies_differently() {
    let slots = |seed| -> Vec<usize> {
        let engine = loaded_engine_with(seed, drone_asset());
        let mut e = enemies(&engine);
        e.sort_by_key(|(_, enemy, _)| enemy.ordinal);
        e.iter().map(|(_, enemy, _)| enemy.slot.index).collect()
    };
    assert_ne!(slots(111), slots(222));
}

// ---- Load lifecycle ----

#[test]
fn test_nothing_runs_before_load() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    key_down(&mut engine, "ArrowUp");
    engine.queue_command(SimCommand::AssetProgress { loaded: 25, total: 100 });

    let snap = engine.tick(0.5);
    assert_eq!(snap.phase, GamePhase::Loading);
    assert_eq!(snap.time.frame, 0);
    assert!(snap.player.is_none());
    assert_relative_eq!(snap.load_progress, 0.25);
}

#[test]
fn test_asset_load_populates_scene() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(SimCommand::AssetLoaded { asset: drone_asset() });
    let snap = engine.tick(0.0);

    assert_eq!(snap.phase, GamePhase::Playable);
    assert_eq!(snap.enemies.len(), 20);
    assert_eq!(snap.score.enemies_remaining, 20);
    assert_relative_eq!(snap.load_progress, 1.0);
    assert_eq!(snap.animation.clip_names, vec!["fuselage", "idle"]);
    assert_eq!(snap.animation.active.as_deref(), Some("fuselage"));

    let player_added = snap
        .scene_events
        .iter()
        .filter(|e| matches!(e, SceneEvent::NodeAdded { kind: NodeKind::Player, .. }))
        .count();
    let enemies_added = snap
        .scene_events
        .iter()
        .filter(|e| matches!(e, SceneEvent::NodeAdded { kind: NodeKind::Enemy, .. }))
        .count();
    assert_eq!(player_added, 1);
    assert_eq!(enemies_added, 20);
}

#[test]
fn test_asset_failure_blocks_gameplay() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(SimCommand::AssetFailed {
        message: "404".into(),
    });
    assert_eq!(engine.tick(0.1).phase, GamePhase::Failed);
    assert!(matches!(
        engine.load_error(),
        Some(skyraid_core::error::AssetError::LoadFailed(msg)) if msg == "404"
    ));

    // A late load does not revive the session.
    engine.queue_command(SimCommand::AssetLoaded { asset: drone_asset() });
    let snap = engine.tick(0.1);
    assert_eq!(snap.phase, GamePhase::Failed);
    assert!(snap.player.is_none());
    assert!(snap.enemies.is_empty());
}

#[test]
fn test_spawn_before_load_is_rejected() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    assert_eq!(engine.spawn_enemies(3), Err(SpawnError::AssetNotLoaded));
    assert_eq!(engine.world().len(), 0);
}

#[test]
fn test_model_without_default_clip_still_loads() {
    let mut asset = drone_asset();
    asset.clips.clear();
    let engine = loaded_engine_with(1, asset);
    assert_eq!(engine.phase(), GamePhase::Playable);
    assert_eq!(engine.player_mixer().unwrap().active_name(), None);
    assert_eq!(enemies(&engine).len(), 20);
}

// ---- Spawn selector ----

#[test]
fn test_spawn_selector_never_repeats_consecutively() {
    let config = FlightConfig::default();
    let mut selector = SpawnSelector::from_config(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    assert_eq!(selector.slots().len(), 12);
    let mut previous = selector.next_slot(&mut rng).unwrap().index;
    for _ in 0..2_000 {
        let slot = selector.next_slot(&mut rng).unwrap();
        assert_ne!(slot.index, previous);
        previous = slot.index;
    }
}

#[test]
fn test_spawn_grid_layout() {
    let selector = SpawnSelector::from_grid(&[-6.0, 2.0, -2.0, 6.0], &[-4.0, 0.0, 4.0], 16);
    let slots = selector.slots();
    assert_eq!((slots[0].x, slots[0].y), (-6.0, -4.0));
    assert_eq!((slots[5].x, slots[5].y), (2.0, 0.0));
    assert_eq!((slots[11].x, slots[11].y), (6.0, 4.0));
    assert!(slots.iter().enumerate().all(|(i, s)| s.index == i));
}

#[test]
fn test_single_slot_grid_terminates() {
    let mut selector = SpawnSelector::from_grid(&[1.0], &[2.0], 16);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for _ in 0..100 {
        assert_eq!(selector.next_slot(&mut rng).unwrap().index, 0);
    }

    let mut empty = SpawnSelector::from_grid(&[], &[2.0], 16);
    assert!(empty.next_slot(&mut rng).is_none());
}

/// Generator that always yields zero, so every draw lands on slot 0.
struct ZeroRng;

impl rand::RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        dest.fill(0);
        Ok(())
    }
}

#[test]
fn test_repeat_accepted_after_retry_budget() {
    // Two slots, but the generator keeps picking the same one: the re-roll
    // loop must give up after its budget and hand the repeat back.
    let mut selector = SpawnSelector::from_grid(&[-1.0, 1.0], &[0.0], 16);
    let mut rng = ZeroRng;
    for _ in 0..10 {
        assert_eq!(selector.next_slot(&mut rng).unwrap().index, 0);
    }

    let mut no_retries = SpawnSelector::from_grid(&[-1.0, 1.0], &[0.0], 0);
    assert_eq!(no_retries.next_slot(&mut rng).unwrap().index, 0);
    assert_eq!(no_retries.next_slot(&mut rng).unwrap().index, 0);
}

#[test]
fn test_enemy_depths_strictly_increasing() {
    let engine = loaded_engine();
    let mut list = enemies(&engine);
    list.sort_by_key(|(_, enemy, _)| enemy.ordinal);

    for (i, (_, enemy, position)) in list.iter().enumerate() {
        assert_eq!(enemy.ordinal as usize, i);
        let expected = -((i as f64 + 1.0) * 10.0 + 15.0);
        assert_relative_eq!(position.z, expected);
        assert_eq!(position.x, enemy.slot.x);
        assert_eq!(position.y, enemy.slot.y);
    }
    for pair in list.windows(2) {
        assert_ne!(pair[0].1.slot.index, pair[1].1.slot.index);
    }
}

// ---- Movement ----

#[test]
fn test_forward_moves_up() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "ArrowUp");
    let snap = engine.tick(0.1);
    assert_relative_eq!(snap.player.unwrap().position.y, 4.0 * 0.1, epsilon = 1e-12);
}

#[test]
fn test_forward_and_backward_cancel() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "KeyW");
    key_down(&mut engine, "KeyS");
    let snap = engine.tick(0.1);
    assert_relative_eq!(snap.player.unwrap().position.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_key_pressed_and_released_between_frames_is_not_held() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "ArrowUp");
    key_up(&mut engine, "ArrowUp");
    let snap = engine.tick(0.1);
    assert_eq!(snap.player.unwrap().position.y, 0.0);
    assert_eq!(*engine.keys(), KeyState::default());
}

#[test]
fn test_forward_drift_uses_current_speed() {
    let mut engine = loaded_engine();
    let snap = engine.tick(0.5);
    assert_relative_eq!(snap.player.unwrap().position.z, -4.0 * 0.5);
}

#[test]
fn test_acceleration_caps_at_max_speed() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "ShiftLeft");
    for _ in 0..60 {
        let speed = engine.tick(1.0 / 60.0).player.unwrap().speed;
        assert!(speed <= 8.0, "speed {speed} exceeded the cap");
    }
    assert_relative_eq!(engine.player().unwrap().speed, 8.0);

    key_up(&mut engine, "ShiftLeft");
    assert_relative_eq!(engine.tick(1.0 / 60.0).player.unwrap().speed, 7.55, epsilon = 1e-9);
    for _ in 0..20 {
        engine.tick(1.0 / 60.0);
    }
    assert_relative_eq!(engine.player().unwrap().speed, 4.0);
}

#[test]
fn test_speed_and_tilt_stay_bounded() {
    let config = FlightConfig::default();
    let mut player = test_player(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..5_000 {
        let keys = KeyState {
            forward: rng.gen_bool(0.3),
            backward: rng.gen_bool(0.3),
            left: rng.gen_bool(0.4),
            right: rng.gen_bool(0.4),
            shoot: false,
            acceleration: rng.gen_bool(0.5),
        };
        let dt = rng.gen_range(0.0..0.25);
        movement::run(&mut player, &keys, &config, dt);

        assert!(player.speed >= config.default_speed && player.speed <= config.max_speed);
        assert!(player.tilt.abs() <= config.max_tilt, "tilt {}", player.tilt);
    }
}

#[test]
fn test_release_levels_out_without_sign_change() {
    let config = FlightConfig::default();
    for start in [config.max_tilt, -config.max_tilt, 0.004, -0.3] {
        let mut player = test_player(&config);
        player.tilt = start;
        let mut steps = 0;
        while player.tilt != 0.0 {
            movement::run(&mut player, &KeyState::default(), &config, 0.1);
            assert!(player.tilt * start >= 0.0, "tilt crossed zero from {start}");
            steps += 1;
            assert!(steps < 100, "tilt never reached zero from {start}");
        }
        assert_eq!(player.tilt, 0.0);
    }
}

#[test]
fn test_turn_leans_before_translating() {
    let config = FlightConfig::default();
    let mut player = test_player(&config);
    player.tilt = -0.3;

    // Banked left, asked to go right: recover the bank, stay put.
    movement::turn(&mut player, TurnDirection::Right, &config, 0.1);
    assert_relative_eq!(player.tilt, -0.225, epsilon = 1e-12);
    assert_eq!(player.position.x, 0.0);

    // Level: lean in and translate at once.
    player.tilt = 0.0;
    movement::turn(&mut player, TurnDirection::Right, &config, 0.1);
    assert_relative_eq!(player.tilt, 0.075, epsilon = 1e-12);
    assert_relative_eq!(player.position.x, 0.4, epsilon = 1e-12);

    movement::turn(&mut player, TurnDirection::Left, &config, 0.1);
    assert_relative_eq!(player.tilt, 0.0, epsilon = 1e-12);
    assert_relative_eq!(player.position.x, 0.4, epsilon = 1e-12);
}

#[test]
fn test_orientation_rebuilt_from_tilt() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "KeyA");
    for _ in 0..10 {
        engine.tick(0.1);
    }
    let player = *engine.player().unwrap();
    assert!(player.tilt < 0.0);
    assert!(player.rotation.abs_diff_eq(movement::orientation(player.tilt), 1e-12));

    key_up(&mut engine, "KeyA");
    for _ in 0..50 {
        engine.tick(0.1);
    }
    let player = *engine.player().unwrap();
    assert_eq!(player.tilt, 0.0);
    assert!(player.rotation.abs_diff_eq(movement::orientation(0.0), 1e-12));
}

// ---- Camera ----

#[test]
fn test_camera_lags_behind_player() {
    let mut engine = loaded_engine();
    let snap = engine.tick(0.1);

    // Start (0, 1, 5), target (0, 2, 5), blend 0.1 * 3.
    assert_relative_eq!(snap.camera.position.y, 1.3, epsilon = 1e-12);
    assert_relative_eq!(snap.camera.position.z, 5.0, epsilon = 1e-12);
    // Aimed at the player before this frame's forward drift.
    assert_eq!(snap.camera.look_at, DVec3::ZERO);
    assert_relative_eq!(snap.player.unwrap().position.z, -0.4, epsilon = 1e-12);
}

#[test]
fn test_camera_long_frame_lands_on_target() {
    let mut engine = loaded_engine();
    let snap = engine.tick(2.0);
    assert!(snap.camera.position.abs_diff_eq(DVec3::new(0.0, 2.0, 5.0), 1e-12));
}

// ---- Projectiles ----

#[test]
fn test_reload_gate() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "Space");

    engine.tick(0.0); // t = 0.0
    assert_eq!(bullet_count(&engine), 1);
    engine.tick(0.3); // t = 0.3
    assert_eq!(bullet_count(&engine), 1);
    let snap = engine.tick(0.2); // t = 0.5
    assert_eq!(bullet_count(&engine), 2);
    assert_eq!(snap.score.shots_fired, 2);
}

#[test]
fn test_no_shot_without_key() {
    let mut engine = loaded_engine();
    for _ in 0..10 {
        engine.tick(0.5);
    }
    assert_eq!(bullet_count(&engine), 0);
}

#[test]
fn test_bullet_spawns_ahead_of_undrifted_player() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "Space");
    let snap = engine.tick(0.1);

    let bullet = snap.bullets[0];
    let player = snap.player.unwrap();
    // Fired before drift: player has since moved speed * dt further.
    assert_relative_eq!(bullet.position.z, player.position.z + 4.0 * 0.1 - 0.5, epsilon = 1e-12);
    assert!(snap
        .scene_events
        .iter()
        .any(|e| matches!(e, SceneEvent::NodeAdded { kind: NodeKind::Bullet, id, .. } if *id == bullet.id)));
}

#[test]
fn test_bullet_expires_on_the_update_it_hits_zero() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "Space");
    engine.tick(0.0);
    key_up(&mut engine, "Space");
    assert_eq!(bullet_count(&engine), 1);

    for _ in 0..5 {
        engine.tick(0.5);
    }
    assert_eq!(bullet_count(&engine), 1);

    let snap = engine.tick(0.5);
    assert_eq!(bullet_count(&engine), 0);
    assert!(snap.events.iter().any(|e| matches!(
        e,
        GameEvent::BulletRemoved {
            fate: BulletFate::Expired,
            ..
        }
    )));
}

#[test]
fn test_bullet_overlapping_enemy_removes_both() {
    let mut engine = loaded_engine();
    let (enemy, _, position) = enemies(&engine)[0];
    let bullet = engine.spawn_test_bullet(position);

    let snap = engine.tick(0.001);
    assert!(!engine.world().contains(enemy));
    assert!(!engine.world().contains(bullet));
    assert_eq!(snap.enemies.len(), 19);
    assert_eq!(snap.score.enemies_destroyed, 1);
    assert!(snap.events.contains(&GameEvent::EnemyDestroyed {
        enemy: node_id(enemy),
        bullet: node_id(bullet),
    }));
    assert!(snap.scene_events.contains(&SceneEvent::NodeRemoved {
        id: node_id(enemy),
        kind: NodeKind::Enemy,
    }));
}

#[test]
fn test_multiple_hits_in_one_frame_remove_the_right_entities() {
    let mut engine = loaded_engine();
    let list = enemies(&engine);
    let (first, _, first_pos) = list[0];
    let (second, _, second_pos) = list[1];
    let untouched: Vec<Entity> = list[2..].iter().map(|(e, _, _)| *e).collect();

    engine.spawn_test_bullet(first_pos);
    engine.spawn_test_bullet(second_pos);
    engine.spawn_test_bullet(first_pos);

    let snap = engine.tick(0.001);
    assert!(!engine.world().contains(first));
    assert!(!engine.world().contains(second));
    assert!(untouched.iter().all(|e| engine.world().contains(*e)));
    assert_eq!(snap.score.enemies_destroyed, 2);
    // The third bullet found its target already claimed and flies on.
    assert_eq!(bullet_count(&engine), 1);
}

#[test]
fn test_hidden_sub_mesh_does_not_collide() {
    let mut asset = drone_asset();
    asset.sub_meshes.push(SubMesh {
        name: "Cube".into(),
        bounds: Aabb::from_center(DVec3::ZERO, DVec3::splat(3.0)),
        visible: true,
    });

    let offset = DVec3::new(0.0, 2.0, 0.0);

    let mut engine = loaded_engine_with(5, asset.clone());
    let (enemy, _, position) = enemies(&engine)[0];
    engine.spawn_test_bullet(position + offset);
    engine.tick(0.001);
    assert!(!engine.world().contains(enemy));

    asset.hide_sub_mesh("Cube");
    let mut engine = loaded_engine_with(5, asset);
    let (enemy, _, position) = enemies(&engine)[0];
    engine.spawn_test_bullet(position + offset);
    engine.tick(0.001);
    assert!(engine.world().contains(enemy));
    assert_eq!(bullet_count(&engine), 1);
}

#[test]
fn test_collections_hold_no_stale_entries() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "Space");
    key_down(&mut engine, "KeyD");
    for _ in 0..600 {
        let snap = engine.tick(1.0 / 30.0);
        for bullet in &snap.bullets {
            assert!(bullet.lifetime > 0.0);
        }
        let removed: Vec<u64> = snap
            .scene_events
            .iter()
            .filter_map(|e| match e {
                SceneEvent::NodeRemoved { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        assert!(snap.bullets.iter().all(|b| !removed.contains(&b.id)));
        assert!(snap.enemies.iter().all(|e| !removed.contains(&e.id)));
    }
}

// ---- Animation ----

#[test]
fn test_play_action_switches_and_reports() {
    let mut engine = loaded_engine();
    assert_eq!(engine.play_action("fuselage"), Ok(ActionOutcome::AlreadyActive));
    assert_eq!(engine.play_action("IDLE"), Ok(ActionOutcome::Started));
    assert_eq!(
        engine.play_action("barrel-roll"),
        Err(AnimationError::ClipNotFound("barrel-roll".into()))
    );

    let snap = engine.tick(0.0);
    assert_eq!(snap.animation.active.as_deref(), Some("idle"));
    assert!(snap
        .events
        .contains(&GameEvent::ActionChanged { name: "idle".into() }));
}

#[test]
fn test_play_action_command_ignores_unknown_clip() {
    let mut engine = loaded_engine();
    engine.queue_command(SimCommand::PlayAction {
        name: "missing".into(),
    });
    let snap = engine.tick(0.1);
    assert_eq!(snap.animation.active.as_deref(), Some("fuselage"));
}

#[test]
fn test_play_action_before_load() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    assert_eq!(engine.play_action("idle"), Err(AnimationError::NotLoaded));
}

#[test]
fn test_mixer_cross_fade_and_loop() {
    let clips = drone_asset().clips;
    let mut mixer = AnimationMixer::new(clips, 0.5);

    mixer.play("fuselage").unwrap();
    assert_eq!(mixer.current().unwrap().weight, 1.0);

    mixer.play("idle").unwrap();
    assert_eq!(mixer.current().unwrap().weight, 0.0);
    assert_eq!(mixer.fading().len(), 1);

    mixer.update(0.25);
    assert_relative_eq!(mixer.current().unwrap().weight, 0.5);
    assert_relative_eq!(mixer.fading()[0].weight, 0.5);

    mixer.update(0.25);
    assert_relative_eq!(mixer.current().unwrap().weight, 1.0);
    assert!(mixer.fading().is_empty());

    mixer.update(2.0);
    assert_relative_eq!(mixer.current().unwrap().time, 0.5, epsilon = 1e-12);

    mixer.stop_all();
    assert_eq!(mixer.active_name(), None);
}

#[test]
fn test_enemy_mixers_advance() {
    let mut engine = loaded_engine();
    engine.tick(0.25);
    let mut q = engine.world().query::<(&Enemy, &AnimationMixer)>();
    for (_, (_, mixer)) in q.iter() {
        let action = mixer.current().unwrap();
        assert_eq!(action.name, "fuselage");
        assert_relative_eq!(action.time, 0.25);
    }
}

// ---- Teardown ----

#[test]
fn test_dispose_is_idempotent() {
    let mut engine = loaded_engine();
    key_down(&mut engine, "Space");
    engine.tick(0.1);

    assert!(engine.dispose());
    assert!(!engine.dispose());
    assert_eq!(engine.world().len(), 0);
    assert_eq!(engine.phase(), GamePhase::Disposed);

    let snap = engine.tick(0.1);
    assert_eq!(snap.phase, GamePhase::Disposed);
    assert!(snap.player.is_none());
    assert_eq!(
        snap.scene_events
            .iter()
            .filter(|e| matches!(e, SceneEvent::SceneCleared))
            .count(),
        1
    );
    assert_eq!(engine.spawn_enemies(1), Err(SpawnError::Disposed));

    // Commands after teardown are dropped.
    engine.queue_command(SimCommand::AssetLoaded { asset: drone_asset() });
    assert_eq!(engine.tick(0.1).phase, GamePhase::Disposed);
}

#[test]
fn test_play_action_after_dispose_is_rejected() {
    let mut engine = loaded_engine();
    engine.tick(0.1);
    assert!(engine.dispose());

    assert_eq!(engine.play_action("idle"), Err(AnimationError::Disposed));
    assert!(engine.player_mixer().is_none());

    engine.queue_command(SimCommand::PlayAction { name: "idle".into() });
    let snap = engine.tick(0.1);
    assert_eq!(snap.phase, GamePhase::Disposed);
    assert!(snap.events.is_empty());
    assert!(snap.animation.active.is_none());
}

#[test]
fn test_dispose_command() {
    let mut engine = loaded_engine();
    engine.queue_command(SimCommand::Dispose);
    let snap = engine.tick(0.1);
    assert_eq!(snap.phase, GamePhase::Disposed);
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.time.frame, engine.time().frame);
}
