//! Held-key state and the physical key map.

use serde::{Deserialize, Serialize};

use crate::enums::KeyAction;

/// Which logical actions are currently held.
///
/// Written by key events between frames, read once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    pub acceleration: bool,
}

impl KeyState {
    pub fn set(&mut self, action: KeyAction, held: bool) {
        match action {
            KeyAction::Forward => self.forward = held,
            KeyAction::Backward => self.backward = held,
            KeyAction::Left => self.left = held,
            KeyAction::Right => self.right = held,
            KeyAction::Shoot => self.shoot = held,
            KeyAction::Acceleration => self.acceleration = held,
        }
    }

    /// Apply a key event by physical code. Returns false for unmapped codes.
    pub fn apply_code(&mut self, code: &str, held: bool) -> bool {
        match action_for_code(code) {
            Some(action) => {
                self.set(action, held);
                true
            }
            None => false,
        }
    }
}

/// Map a physical key code (DOM `KeyboardEvent.code` naming) to an action.
pub fn action_for_code(code: &str) -> Option<KeyAction> {
    match code {
        "ArrowUp" | "KeyW" => Some(KeyAction::Forward),
        "ArrowDown" | "KeyS" => Some(KeyAction::Backward),
        "ArrowLeft" | "KeyA" => Some(KeyAction::Left),
        "ArrowRight" | "KeyD" => Some(KeyAction::Right),
        "Space" => Some(KeyAction::Shoot),
        "ShiftLeft" => Some(KeyAction::Acceleration),
        _ => None,
    }
}
