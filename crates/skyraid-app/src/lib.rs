//! SKYRAID host application.
//!
//! Wires the simulation engine to a frame scheduler thread and a renderer,
//! and owns the session through an explicit `AppContext`.

pub mod demo;
pub mod game_loop;
pub mod render;
pub mod state;

pub use skyraid_core as core;
