//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle of a play session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the base model to load.
    #[default]
    Loading,
    /// Model loaded; the frame loop runs.
    Playable,
    /// The model failed to load. Terminal.
    Failed,
    /// Torn down. Terminal.
    Disposed,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Failed | GamePhase::Disposed)
    }
}

/// Logical input actions a physical key can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAction {
    Forward,
    Backward,
    Left,
    Right,
    Shoot,
    Acceleration,
}

/// Kind of scene node the host renderer tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Player,
    Enemy,
    Bullet,
}

/// Result of a successful `play_action` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A new action started (cross-fading from the previous one, if any).
    Started,
    /// The requested action was already playing; nothing changed.
    AlreadyActive,
}

/// Why a bullet was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletFate {
    Hit,
    Expired,
}
