//! Chase camera: lags behind the player with exponential smoothing.

use skyraid_core::components::{CameraState, Player};
use skyraid_core::config::FlightConfig;

/// Move the camera toward its follow target and aim it at the player.
///
/// The blend factor `dt * elasticity` is capped at 1 so a long frame lands
/// on the target instead of overshooting it.
pub fn run(camera: &mut CameraState, player: &Player, config: &FlightConfig, dt: f64) {
    let target = player.position + config.camera_offset();
    let t = (dt * config.camera_elasticity).clamp(0.0, 1.0);
    camera.position += (target - camera.position) * t;
    camera.look_at = player.position;
}
