//! Builds the `FrameSnapshot` handed to the renderer after each tick.

use hecs::World;

use skyraid_core::components::{Bullet, CameraState, Enemy, Player, Transform};
use skyraid_core::enums::GamePhase;
use skyraid_core::events::{GameEvent, SceneEvent};
use skyraid_core::state::*;
use skyraid_core::types::SimTime;

use crate::animation::AnimationMixer;
use crate::world_setup::node_id;

/// Borrowed engine state needed to assemble a snapshot.
pub struct SnapshotInput<'a> {
    pub world: &'a World,
    pub time: SimTime,
    pub phase: GamePhase,
    pub load_progress: f64,
    pub player: Option<&'a Player>,
    pub camera: &'a CameraState,
    pub player_mixer: Option<&'a AnimationMixer>,
    pub score: &'a ScoreView,
}

pub fn build_snapshot(
    input: SnapshotInput<'_>,
    scene_events: Vec<SceneEvent>,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    let enemies: Vec<EnemyView> = {
        let mut query = input.world.query::<(&Enemy, &Transform)>();
        query
            .iter()
            .map(|(entity, (enemy, transform))| EnemyView {
                id: node_id(entity),
                position: transform.translation,
                rotation: transform.rotation,
                slot: enemy.slot.index,
            })
            .collect()
    };

    let bullets: Vec<BulletView> = {
        let mut query = input.world.query::<(&Bullet, &Transform)>();
        query
            .iter()
            .map(|(entity, (bullet, transform))| BulletView {
                id: node_id(entity),
                position: transform.translation,
                lifetime: bullet.lifetime,
            })
            .collect()
    };

    let animation = input
        .player_mixer
        .map(|mixer| AnimationView {
            clip_names: mixer.clip_names(),
            active: mixer.active_name().map(str::to_string),
        })
        .unwrap_or_default();

    let mut score = input.score.clone();
    score.enemies_remaining = enemies.len() as u32;

    FrameSnapshot {
        time: input.time,
        phase: input.phase,
        load_progress: input.load_progress,
        player: input.player.map(PlayerView::from),
        camera: CameraView::from(input.camera),
        enemies,
        bullets,
        animation,
        scene_events,
        events,
        score,
    }
}
