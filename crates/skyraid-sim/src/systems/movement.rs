//! Player flight controller.
//!
//! Integrates vertical movement, banked turning and boost from the held keys.
//! Tilt is the single source of truth for orientation: the rotation is
//! rebuilt from the base yaw and the tilt every frame.

use glam::DQuat;

use skyraid_core::components::Player;
use skyraid_core::config::FlightConfig;
use skyraid_core::constants::{PLAYER_BASE_YAW, TILT_LEVEL_EPSILON};
use skyraid_core::input::KeyState;

/// Side the craft is asked to turn toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    pub fn sign(self) -> f64 {
        match self {
            TurnDirection::Left => -1.0,
            TurnDirection::Right => 1.0,
        }
    }
}

/// Apply one frame of keyboard control to the player.
pub fn run(player: &mut Player, keys: &KeyState, config: &FlightConfig, dt: f64) {
    let step = config.default_speed * dt;
    if keys.forward {
        player.position.y += step;
    }
    if keys.backward {
        player.position.y -= step;
    }

    if keys.left {
        turn(player, TurnDirection::Left, config, dt);
    }
    if keys.right {
        turn(player, TurnDirection::Right, config, dt);
    }
    if !keys.left && !keys.right {
        level_out(player, config.tilt_speed * dt);
    }

    if keys.acceleration {
        accelerate(player, config);
    } else {
        decelerate(player, config);
    }

    player.rotation = orientation(player.tilt);
}

/// Lean toward `direction`, translating sideways once the craft is banked
/// the right way (or level).
pub fn turn(player: &mut Player, direction: TurnDirection, config: &FlightConfig, dt: f64) {
    let sign = direction.sign();
    let delta = config.tilt_speed * dt;

    if player.tilt * sign < 0.0 {
        // Banked the other way: recover first, no sideways motion.
        player.tilt = (player.tilt - player.tilt.signum() * delta).clamp(-config.max_tilt, config.max_tilt);
        return;
    }

    player.tilt = (player.tilt + sign * delta).clamp(-config.max_tilt, config.max_tilt);
    if player.tilt.abs() < TILT_LEVEL_EPSILON || player.tilt * sign > 0.0 {
        player.position.x += sign * config.default_speed * dt;
    }
}

/// Decay the tilt toward zero by `delta`, stopping exactly at zero.
pub fn level_out(player: &mut Player, delta: f64) {
    if player.tilt > 0.0 {
        player.tilt = (player.tilt - delta).max(0.0);
    } else if player.tilt < 0.0 {
        player.tilt = (player.tilt + delta).min(0.0);
    }
}

/// Per-frame boost, capped at `max_speed`.
pub fn accelerate(player: &mut Player, config: &FlightConfig) {
    player.speed = (player.speed + config.acceleration_step).min(config.max_speed);
}

/// Per-frame slowdown, floored at `default_speed`.
pub fn decelerate(player: &mut Player, config: &FlightConfig) {
    player.speed = (player.speed - config.deceleration_step).max(config.default_speed);
}

/// Base yaw followed by a bank about the model's local X axis.
pub fn orientation(tilt: f64) -> DQuat {
    DQuat::from_rotation_y(PLAYER_BASE_YAW) * DQuat::from_rotation_x(tilt)
}

/// Constant forward motion along -Z at the current speed.
pub fn apply_forward_drift(player: &mut Player, dt: f64) {
    player.position.z -= player.speed * dt;
}
