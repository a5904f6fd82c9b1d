//! Simulation engine for SKYRAID.
//!
//! Owns the hecs ECS world (enemies and bullets), the player craft and the
//! chase camera, runs systems once per frame in a fixed order, and produces
//! `FrameSnapshot`s for the host renderer.

pub mod animation;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skyraid_core as core;

#[cfg(test)]
mod tests;
