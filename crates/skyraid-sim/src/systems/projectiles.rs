//! Projectile system: firing with a reload gate, bullet flight, expiry and
//! bullet-vs-enemy collision.

use glam::{DAffine3, DVec3};
use hecs::{Entity, World};
use log::debug;

use skyraid_core::components::{Bullet, Enemy, LocalBounds, Player, Transform, WorldBounds};
use skyraid_core::config::FlightConfig;
use skyraid_core::enums::{BulletFate, NodeKind};
use skyraid_core::events::{GameEvent, SceneEvent};
use skyraid_core::input::KeyState;
use skyraid_core::state::ScoreView;
use skyraid_core::types::Aabb;

use crate::world_setup::{self, node_id};

/// Fire a bullet if the shoot key is held and the weapon has reloaded.
///
/// `now` is the simulation clock in seconds; `last_shot` is updated on success.
#[allow(clippy::too_many_arguments)]
pub fn shoot(
    world: &mut World,
    player: &Player,
    keys: &KeyState,
    config: &FlightConfig,
    now: f64,
    last_shot: &mut Option<f64>,
    events: &mut Vec<GameEvent>,
    scene_events: &mut Vec<SceneEvent>,
    score: &mut ScoreView,
) -> Option<Entity> {
    if !keys.shoot {
        return None;
    }
    if let Some(previous) = *last_shot {
        if now - previous < config.reload_time {
            return None;
        }
    }

    let entity = world_setup::spawn_bullet(world, player.position, config);
    let id = node_id(entity);
    let position = world
        .get::<&Transform>(entity)
        .map(|t| t.translation)
        .unwrap_or(player.position);

    scene_events.push(SceneEvent::NodeAdded {
        id,
        kind: NodeKind::Bullet,
        position,
    });
    events.push(GameEvent::ShotFired { bullet: id });
    score.shots_fired += 1;
    *last_shot = Some(now);
    Some(entity)
}

/// Advance bullets, refresh bounding boxes, resolve hits and expiries.
///
/// Removal targets are gathered as entity handles during the sweep and
/// despawned afterwards. Each bullet destroys at most one enemy, and an
/// enemy already claimed this frame cannot absorb a second bullet.
#[allow(clippy::too_many_arguments)]
pub fn update(
    world: &mut World,
    config: &FlightConfig,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
    scene_events: &mut Vec<SceneEvent>,
    score: &mut ScoreView,
) {
    despawn_buffer.clear();

    let half_extent = DVec3::splat(config.bullet_radius);
    for (_entity, (transform, bullet)) in world.query_mut::<(&mut Transform, &mut Bullet)>() {
        transform.translation += bullet.direction * bullet.speed * dt;
        bullet.lifetime -= dt;
        bullet.bounds = Some(Aabb::from_center(transform.translation, half_extent));
    }

    refresh_enemy_bounds(world);

    let bullets: Vec<(Entity, Option<Aabb>, f64)> = {
        let mut query = world.query::<&Bullet>();
        query.iter().map(|(e, b)| (e, b.bounds, b.lifetime)).collect()
    };
    let enemies: Vec<(Entity, Vec<Aabb>)> = {
        let mut query = world.query::<(&Enemy, &WorldBounds)>();
        query
            .iter()
            .map(|(e, (_enemy, bounds))| (e, bounds.boxes.clone()))
            .collect()
    };

    let mut claimed: Vec<Entity> = Vec::new();
    for (bullet, bounds, lifetime) in bullets {
        let hit = bounds.and_then(|bullet_box| {
            enemies
                .iter()
                .filter(|(enemy, _)| !claimed.contains(enemy))
                .find(|(_, boxes)| boxes.iter().any(|b| bullet_box.intersects(b)))
                .map(|(enemy, _)| *enemy)
        });

        if let Some(enemy) = hit {
            debug!("bullet {} hit enemy {}", node_id(bullet), node_id(enemy));
            claimed.push(enemy);
            despawn_buffer.push(bullet);
            despawn_buffer.push(enemy);
            events.push(GameEvent::EnemyDestroyed {
                enemy: node_id(enemy),
                bullet: node_id(bullet),
            });
            events.push(GameEvent::BulletRemoved {
                bullet: node_id(bullet),
                fate: BulletFate::Hit,
            });
            scene_events.push(SceneEvent::NodeRemoved {
                id: node_id(bullet),
                kind: NodeKind::Bullet,
            });
            scene_events.push(SceneEvent::NodeRemoved {
                id: node_id(enemy),
                kind: NodeKind::Enemy,
            });
            score.enemies_destroyed += 1;
        } else if lifetime <= 0.0 {
            despawn_buffer.push(bullet);
            events.push(GameEvent::BulletRemoved {
                bullet: node_id(bullet),
                fate: BulletFate::Expired,
            });
            scene_events.push(SceneEvent::NodeRemoved {
                id: node_id(bullet),
                kind: NodeKind::Bullet,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Recompute every enemy's world-space sub-mesh boxes from its transform.
pub fn refresh_enemy_bounds(world: &mut World) {
    for (_entity, (transform, local, bounds)) in
        world.query_mut::<(&Transform, &LocalBounds, &mut WorldBounds)>()
    {
        let affine = DAffine3::from_rotation_translation(transform.rotation, transform.translation);
        bounds.boxes.clear();
        bounds
            .boxes
            .extend(local.boxes.iter().map(|b| b.transformed(&affine)));
    }
}
