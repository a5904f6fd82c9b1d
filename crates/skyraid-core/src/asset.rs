//! Loaded model data handed over by the external asset loader.
//!
//! Decoding happens outside this crate; the loader only reports the parts
//! the simulation needs: sub-mesh bounds for collision and clip metadata
//! for the animation mixer.

use serde::{Deserialize, Serialize};

use crate::types::Aabb;

/// A mesh node inside a loaded model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubMesh {
    pub name: String,
    /// Model-space bounding box of the mesh geometry.
    pub bounds: Aabb,
    pub visible: bool,
}

/// Metadata for a named animation clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    /// Clip length in seconds. Playback loops over this duration.
    pub duration: f64,
}

/// A loaded model: scene graph meshes plus animation clips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelAsset {
    pub sub_meshes: Vec<SubMesh>,
    pub clips: Vec<AnimationClip>,
}

impl ModelAsset {
    /// Hide every sub-mesh called `name`. Returns how many were hidden.
    pub fn hide_sub_mesh(&mut self, name: &str) -> usize {
        let mut hidden = 0;
        for mesh in self.sub_meshes.iter_mut().filter(|m| m.name == name) {
            if mesh.visible {
                mesh.visible = false;
                hidden += 1;
            }
        }
        hidden
    }

    /// Model-space boxes of the visible sub-meshes.
    pub fn visible_bounds(&self) -> Vec<Aabb> {
        self.sub_meshes
            .iter()
            .filter(|m| m.visible)
            .map(|m| m.bounds)
            .collect()
    }
}

/// Loader progress, as reported by the progress callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl LoadProgress {
    /// Fraction in [0, 1]. Unknown totals report 0.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.loaded as f64 / self.total as f64).clamp(0.0, 1.0)
        }
    }
}
