//! Gameplay constants and tuning defaults.
//!
//! `FlightConfig::default()` is built from these values; systems read the
//! config, not the constants, so a TOML file can override any of them.

use std::f64::consts::{FRAC_PI_2, PI};

// --- Player ---

/// Cruise speed, also the lateral/vertical move rate (units/s).
pub const DEFAULT_SPEED: f64 = 4.0;

/// Upper bound on forward speed while boosting (units/s).
pub const MAX_SPEED: f64 = 8.0;

/// Speed gained per frame while the acceleration key is held.
pub const ACCELERATION_STEP: f64 = 0.15;

/// Speed lost per frame once the acceleration key is released.
pub const DECELERATION_STEP: f64 = 0.45;

/// Maximum bank angle (radians).
pub const MAX_TILT: f64 = FRAC_PI_2 * 0.65;

/// Bank rate (radians/s), shared by lean-in and recovery.
pub const TILT_SPEED: f64 = 0.75;

/// Below this magnitude the craft counts as level and may translate sideways.
pub const TILT_LEVEL_EPSILON: f64 = 0.01;

/// Base yaw of the player model so its nose points down -Z.
pub const PLAYER_BASE_YAW: f64 = FRAC_PI_2;

// --- Camera ---

/// Camera offset from the player (above and behind).
pub const CAMERA_OFFSET: [f64; 3] = [0.0, 2.0, 5.0];

/// Exponential smoothing factor for camera follow.
pub const CAMERA_ELASTICITY: f64 = 3.0;

/// Camera position before the first frame.
pub const CAMERA_START: [f64; 3] = [0.0, 1.0, 5.0];

// --- Projectiles ---

/// Minimum seconds between two shots.
pub const RELOAD_TIME: f64 = 0.4;

/// Bullet speed (units/s).
pub const BULLET_SPEED: f64 = MAX_SPEED * 2.0;

/// Bullet lifetime in seconds.
pub const BULLET_LIFETIME: f64 = 3.0;

/// Bullet sphere radius, used as the half-extent of its bounding box.
pub const BULLET_RADIUS: f64 = 0.05;

/// Bullets spawn this far in front of the player (along -Z).
pub const MUZZLE_OFFSET: f64 = 0.5;

// --- Enemies ---

/// Enemies spawned once the base model has loaded.
pub const ENEMY_COUNT: usize = 20;

/// Depth of the first enemy before the per-enemy spacing is added.
pub const ENEMY_START_OFFSET: f64 = 15.0;

/// Depth spacing between consecutive enemies.
pub const ENEMY_SPACING: f64 = 10.0;

/// Yaw applied to enemy models so they face the player.
pub const ENEMY_YAW: f64 = PI * 1.5;

/// Re-rolls the spawn selector attempts before accepting a repeated slot.
pub const SPAWN_RETRY_BUDGET: u32 = 16;

/// Spawn grid columns (x offsets).
pub const SPAWN_COLUMNS: [f64; 4] = [-6.0, 2.0, -2.0, 6.0];

/// Spawn grid rows (y offsets).
pub const SPAWN_ROWS: [f64; 3] = [-4.0, 0.0, 4.0];

// --- Animation ---

/// Clip the player and enemies play after load.
pub const DEFAULT_ACTION: &str = "fuselage";

/// Cross-fade duration when switching actions (seconds).
pub const CROSS_FADE_SECS: f64 = 0.5;

// --- Loop ---

/// Default scheduler rate for the game loop host (Hz).
pub const TARGET_FRAME_RATE: u32 = 60;
