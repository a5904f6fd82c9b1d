//! Gameplay tuning, loadable from TOML.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Every tunable value of the flight shooter. Missing TOML keys fall back to
/// the defaults in `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    // --- Player ---
    pub default_speed: f64,
    pub max_speed: f64,
    pub acceleration_step: f64,
    pub deceleration_step: f64,
    pub max_tilt: f64,
    pub tilt_speed: f64,

    // --- Camera ---
    pub camera_offset: [f64; 3],
    pub camera_start: [f64; 3],
    pub camera_elasticity: f64,

    // --- Projectiles ---
    pub reload_time: f64,
    pub bullet_speed: f64,
    pub bullet_lifetime: f64,
    pub bullet_radius: f64,
    pub muzzle_offset: f64,

    // --- Enemies ---
    pub enemy_count: usize,
    pub enemy_start_offset: f64,
    pub enemy_spacing: f64,
    pub spawn_columns: Vec<f64>,
    pub spawn_rows: Vec<f64>,
    pub spawn_retry_budget: u32,

    // --- Animation ---
    pub default_action: String,
    pub cross_fade_secs: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            default_speed: DEFAULT_SPEED,
            max_speed: MAX_SPEED,
            acceleration_step: ACCELERATION_STEP,
            deceleration_step: DECELERATION_STEP,
            max_tilt: MAX_TILT,
            tilt_speed: TILT_SPEED,
            camera_offset: CAMERA_OFFSET,
            camera_start: CAMERA_START,
            camera_elasticity: CAMERA_ELASTICITY,
            reload_time: RELOAD_TIME,
            bullet_speed: BULLET_SPEED,
            bullet_lifetime: BULLET_LIFETIME,
            bullet_radius: BULLET_RADIUS,
            muzzle_offset: MUZZLE_OFFSET,
            enemy_count: ENEMY_COUNT,
            enemy_start_offset: ENEMY_START_OFFSET,
            enemy_spacing: ENEMY_SPACING,
            spawn_columns: SPAWN_COLUMNS.to_vec(),
            spawn_rows: SPAWN_ROWS.to_vec(),
            spawn_retry_budget: SPAWN_RETRY_BUDGET,
            default_action: DEFAULT_ACTION.to_string(),
            cross_fade_secs: CROSS_FADE_SECS,
        }
    }
}

impl FlightConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Reject values that would break the speed and tilt invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_speed <= 0.0 {
            return Err(invalid("default_speed", "must be positive"));
        }
        if self.max_speed < self.default_speed {
            return Err(invalid("max_speed", "must not be below default_speed"));
        }
        if self.acceleration_step < 0.0 || self.deceleration_step < 0.0 {
            return Err(invalid("acceleration_step", "speed steps must be non-negative"));
        }
        if self.max_tilt < 0.0 || self.tilt_speed < 0.0 {
            return Err(invalid("max_tilt", "tilt limits must be non-negative"));
        }
        if self.reload_time < 0.0 {
            return Err(invalid("reload_time", "must be non-negative"));
        }
        if self.spawn_columns.is_empty() || self.spawn_rows.is_empty() {
            return Err(invalid("spawn_columns", "spawn grid needs at least one slot"));
        }
        Ok(())
    }

    pub fn camera_offset(&self) -> DVec3 {
        DVec3::from_array(self.camera_offset)
    }

    pub fn camera_start(&self) -> DVec3 {
        DVec3::from_array(self.camera_start)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
