//! Built-in demo content: a stand-in drone model and a scripted flight.
//!
//! The real model comes from the external asset pipeline; this one carries
//! the same sub-mesh layout and clip names so the demo runs headless.

use std::time::Duration;

use glam::DVec3;

use skyraid_core::asset::{AnimationClip, ModelAsset, SubMesh};
use skyraid_core::commands::SimCommand;
use skyraid_core::types::Aabb;

/// Drone model: fuselage, wings, tail, plus a helper cube the viewer hides.
pub fn drone_asset() -> ModelAsset {
    let mesh = |name: &str, center: DVec3, half: DVec3, visible: bool| SubMesh {
        name: name.to_string(),
        bounds: Aabb::from_center(center, half),
        visible,
    };

    let mut asset = ModelAsset {
        sub_meshes: vec![
            mesh("Fuselage", DVec3::ZERO, DVec3::new(1.2, 0.25, 0.25), true),
            mesh("Wings", DVec3::new(-0.2, 0.0, 0.0), DVec3::new(0.4, 0.05, 1.3), true),
            mesh("Tail", DVec3::new(-1.0, 0.3, 0.0), DVec3::new(0.2, 0.3, 0.05), true),
            mesh("Cube", DVec3::ZERO, DVec3::splat(2.0), true),
        ],
        clips: vec![
            AnimationClip {
                name: "Fuselage".into(),
                duration: 1.0,
            },
            AnimationClip {
                name: "Idle".into(),
                duration: 2.5,
            },
        ],
    };
    asset.hide_sub_mesh("Cube");
    asset
}

/// A timed host command: wait `after`, then send `command`.
#[derive(Debug, Clone)]
pub struct ScriptStep {
    pub after: Duration,
    pub command: SimCommand,
}

fn at(millis: u64, command: SimCommand) -> ScriptStep {
    ScriptStep {
        after: Duration::from_millis(millis),
        command,
    }
}

fn key(code: &str, down: bool) -> SimCommand {
    if down {
        SimCommand::KeyDown { code: code.into() }
    } else {
        SimCommand::KeyUp { code: code.into() }
    }
}

/// Load the model, then strafe, boost and fire for a few seconds.
pub fn flight_script() -> Vec<ScriptStep> {
    vec![
        at(0, SimCommand::AssetProgress { loaded: 0, total: 100 }),
        at(50, SimCommand::AssetProgress { loaded: 100, total: 100 }),
        at(0, SimCommand::AssetLoaded { asset: drone_asset() }),
        at(100, key("Space", true)),
        at(0, key("KeyD", true)),
        at(800, key("KeyD", false)),
        at(0, key("ShiftLeft", true)),
        at(0, key("ArrowUp", true)),
        at(600, key("ArrowUp", false)),
        at(0, SimCommand::PlayAction { name: "idle".into() }),
        at(0, key("KeyA", true)),
        at(800, key("KeyA", false)),
        at(0, key("ShiftLeft", false)),
        at(500, key("Space", false)),
    ]
}
