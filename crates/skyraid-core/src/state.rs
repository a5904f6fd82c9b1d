//! Frame snapshot: the complete visible state handed to the renderer each tick.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::components::{CameraState, Player};
use crate::enums::GamePhase;
use crate::events::{GameEvent, SceneEvent};
use crate::types::SimTime;

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Asset loader progress in [0, 1].
    pub load_progress: f64,
    pub player: Option<PlayerView>,
    pub camera: CameraView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub animation: AnimationView,
    pub scene_events: Vec<SceneEvent>,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec3,
    pub rotation: DQuat,
    pub tilt: f64,
    pub speed: f64,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            position: player.position,
            rotation: player.rotation,
            tilt: player.tilt,
            speed: player.speed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub position: DVec3,
    pub look_at: DVec3,
}

impl From<&CameraState> for CameraView {
    fn from(camera: &CameraState) -> Self {
        Self {
            position: camera.position,
            look_at: camera.look_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub position: DVec3,
    pub rotation: DQuat,
    pub slot: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u64,
    pub position: DVec3,
    pub lifetime: f64,
}

/// Animation options exposed to the UI panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationView {
    /// Lowercased clip names from the loaded model.
    pub clip_names: Vec<String>,
    pub active: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub enemies_destroyed: u32,
    pub enemies_remaining: u32,
}
