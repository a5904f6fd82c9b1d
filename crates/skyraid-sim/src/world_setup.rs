//! Entity spawn factories.
//!
//! Creates the player record, enemy drones and bullets with the component
//! bundles the systems expect.

use glam::{DAffine3, DQuat, DVec3};
use hecs::{Entity, World};

use skyraid_core::asset::ModelAsset;
use skyraid_core::components::*;
use skyraid_core::config::FlightConfig;
use skyraid_core::constants::ENEMY_YAW;

use crate::animation::AnimationMixer;
use crate::systems::movement;
use crate::systems::spawner::enemy_depth;

/// Scene node id for an entity. Never zero, so it cannot clash with the player node.
pub fn node_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// The player at the origin, level, at cruise speed.
pub fn new_player(config: &FlightConfig) -> Player {
    Player {
        position: DVec3::ZERO,
        tilt: 0.0,
        speed: config.default_speed,
        rotation: movement::orientation(0.0),
    }
}

/// Spawn one enemy drone cloned from `asset` on `slot`.
///
/// Depth grows with `ordinal` so no two enemies share a depth even when
/// their slots repeat. The drone starts playing the default action when the
/// model has it.
pub fn spawn_enemy(
    world: &mut World,
    asset: &ModelAsset,
    config: &FlightConfig,
    slot: SpawnSlot,
    ordinal: u32,
) -> Entity {
    let transform = Transform {
        translation: DVec3::new(slot.x, slot.y, -enemy_depth(ordinal, config)),
        rotation: DQuat::from_rotation_y(ENEMY_YAW),
    };

    let local = LocalBounds {
        boxes: asset.visible_bounds(),
    };
    let affine = DAffine3::from_rotation_translation(transform.rotation, transform.translation);
    let world_bounds = WorldBounds {
        boxes: local.boxes.iter().map(|b| b.transformed(&affine)).collect(),
    };

    let mut mixer = AnimationMixer::new(asset.clips.clone(), config.cross_fade_secs);
    if mixer.has_clip(&config.default_action) {
        // Known to exist, so play() cannot fail here.
        let _ = mixer.play(&config.default_action);
    }

    world.spawn((Enemy { ordinal, slot }, transform, local, world_bounds, mixer))
}

/// Spawn a bullet just ahead of `origin`, flying down -Z.
pub fn spawn_bullet(world: &mut World, origin: DVec3, config: &FlightConfig) -> Entity {
    let transform = Transform {
        translation: origin - DVec3::Z * config.muzzle_offset,
        rotation: DQuat::IDENTITY,
    };
    let bullet = Bullet {
        direction: DVec3::NEG_Z,
        speed: config.bullet_speed,
        lifetime: config.bullet_lifetime,
        bounds: None,
    };
    world.spawn((transform, bullet))
}
