//! Core types and definitions for the SKYRAID flight shooter.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, events, configuration and constants.
//! It has no dependency on a rendering engine or runtime framework.

pub mod asset;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
