//! Events emitted by the simulation for the renderer and UI.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{BulletFate, NodeKind};

/// Scene-graph changes the host renderer must mirror.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A node was added at `position`.
    NodeAdded {
        id: u64,
        kind: NodeKind,
        position: DVec3,
    },
    /// A node left the scene.
    NodeRemoved { id: u64, kind: NodeKind },
    /// Every node was released (teardown).
    SceneCleared,
}

/// Gameplay events for sound and HUD feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A bullet left the muzzle.
    ShotFired { bullet: u64 },
    /// A bullet was removed.
    BulletRemoved { bullet: u64, fate: BulletFate },
    /// A bullet destroyed an enemy.
    EnemyDestroyed { enemy: u64, bullet: u64 },
    /// The player's animation action changed.
    ActionChanged { name: String },
}

/// Node id reserved for the player craft. Entity ids are never zero.
pub const PLAYER_NODE_ID: u64 = 0;
