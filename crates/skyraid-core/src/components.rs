//! ECS components and per-frame state records.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::types::Aabb;

/// World transform of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: DVec3,
    pub rotation: DQuat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }
}

/// One of the predefined (x, y) offsets enemies are placed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnSlot {
    /// Index into the flattened slot grid.
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Marks an entity as an enemy drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Spawn order, starting at 0.
    pub ordinal: u32,
    pub slot: SpawnSlot,
}

/// Model-space boxes of an enemy's visible sub-meshes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalBounds {
    pub boxes: Vec<Aabb>,
}

/// World-space boxes of an enemy's sub-meshes, refreshed every projectile update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldBounds {
    pub boxes: Vec<Aabb>,
}

/// A live bullet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Unit travel direction.
    pub direction: DVec3,
    pub speed: f64,
    /// Seconds left before the bullet expires.
    pub lifetime: f64,
    /// Computed on the first update after spawn.
    pub bounds: Option<Aabb>,
}

/// The player craft. Owned by the engine, not stored in the ECS world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: DVec3,
    /// Signed bank angle about the craft's forward axis (radians).
    pub tilt: f64,
    /// Forward speed, within [default_speed, max_speed].
    pub speed: f64,
    /// Rebuilt each frame from the base yaw and `tilt`.
    pub rotation: DQuat,
}

/// Chase camera state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: DVec3,
    /// Point the camera looks at this frame.
    pub look_at: DVec3,
}
