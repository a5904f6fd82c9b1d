//! Per-frame systems.
//!
//! Systems are free functions over the ECS world and the engine-owned
//! player/camera state. They do not own state of their own; the spawn
//! selector is the exception and is held by the engine.

pub mod animation;
pub mod camera;
pub mod cleanup;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
