//! Renderer boundary.
//!
//! The real 3D engine lives outside this workspace. It receives one
//! `FrameSnapshot` per tick and mirrors the scene events into its own graph.

use log::{debug, info, trace};

use skyraid_core::events::SceneEvent;
use skyraid_core::state::FrameSnapshot;

/// Consumer of simulated frames.
pub trait Renderer {
    /// Draw one frame.
    fn render(&mut self, frame: &FrameSnapshot);

    /// Release graphics resources. Called once when the loop stops.
    fn dispose(&mut self) {}
}

/// Headless renderer that tracks the scene node count and logs it.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    nodes: usize,
}

impl LogRenderer {
    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Nodes currently in the mirrored scene.
    pub fn nodes(&self) -> usize {
        self.nodes
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameSnapshot) {
        for event in &frame.scene_events {
            match event {
                SceneEvent::NodeAdded { .. } => self.nodes += 1,
                SceneEvent::NodeRemoved { .. } => self.nodes = self.nodes.saturating_sub(1),
                SceneEvent::SceneCleared => self.nodes = 0,
            }
        }
        self.frames += 1;

        trace!("frame {} ({} nodes)", frame.time.frame, self.nodes);
        if self.frames % 60 == 0 {
            debug!(
                "frame {}: {} enemies, {} bullets, {} destroyed",
                frame.time.frame,
                frame.enemies.len(),
                frame.bullets.len(),
                frame.score.enemies_destroyed
            );
        }
    }

    fn dispose(&mut self) {
        info!("renderer disposed after {} frames", self.frames);
        self.nodes = 0;
    }
}
