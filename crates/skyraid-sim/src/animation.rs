//! Animation action bookkeeping.
//!
//! The external engine does the actual skinning and blending; this mixer
//! tracks which named action is active, its playback time, and the weights
//! of a cross-fade in progress so the renderer can mirror them.

use skyraid_core::asset::AnimationClip;
use skyraid_core::enums::ActionOutcome;
use skyraid_core::error::AnimationError;

/// One playing action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAction {
    pub name: String,
    /// Playback position in seconds, wrapped to the clip duration.
    pub time: f64,
    pub duration: f64,
    /// Blend weight in [0, 1].
    pub weight: f64,
}

impl ActiveAction {
    fn advance(&mut self, dt: f64) {
        self.time += dt;
        if self.duration > 0.0 {
            self.time = self.time.rem_euclid(self.duration);
        }
    }
}

/// Per-model action state.
#[derive(Debug, Clone)]
pub struct AnimationMixer {
    clips: Vec<AnimationClip>,
    current: Option<ActiveAction>,
    /// Actions fading out after a switch.
    fading: Vec<ActiveAction>,
    cross_fade_secs: f64,
}

impl AnimationMixer {
    pub fn new(clips: Vec<AnimationClip>, cross_fade_secs: f64) -> Self {
        Self {
            clips,
            current: None,
            fading: Vec::new(),
            cross_fade_secs: cross_fade_secs.max(0.0),
        }
    }

    /// Switch to the action called `name` (case-insensitive).
    ///
    /// The new action restarts from time zero and cross-fades from the
    /// previous one. Unknown names leave the mixer untouched.
    pub fn play(&mut self, name: &str) -> Result<ActionOutcome, AnimationError> {
        let wanted = name.to_lowercase();
        if self.active_name() == Some(wanted.as_str()) {
            return Ok(ActionOutcome::AlreadyActive);
        }

        let clip = self
            .clips
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
            .ok_or_else(|| AnimationError::ClipNotFound(wanted.clone()))?;

        let mut next = ActiveAction {
            name: wanted,
            time: 0.0,
            duration: clip.duration,
            weight: 1.0,
        };

        if let Some(previous) = self.current.take() {
            if self.cross_fade_secs > 0.0 {
                next.weight = 0.0;
                self.fading.push(previous);
            }
        }
        self.current = Some(next);
        Ok(ActionOutcome::Started)
    }

    /// Advance playback and cross-fade weights by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        let fade_step = if self.cross_fade_secs > 0.0 {
            dt / self.cross_fade_secs
        } else {
            1.0
        };

        if let Some(current) = self.current.as_mut() {
            current.advance(dt);
            current.weight = (current.weight + fade_step).min(1.0);
        }
        for action in &mut self.fading {
            action.advance(dt);
            action.weight -= fade_step;
        }
        self.fading.retain(|a| a.weight > 0.0);
    }

    pub fn stop_all(&mut self) {
        self.current = None;
        self.fading.clear();
    }

    pub fn active_name(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.name.as_str())
    }

    pub fn current(&self) -> Option<&ActiveAction> {
        self.current.as_ref()
    }

    pub fn fading(&self) -> &[ActiveAction] {
        &self.fading
    }

    pub fn has_clip(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.clips.iter().any(|c| c.name.to_lowercase() == wanted)
    }

    /// Lowercased clip names, for the options panel.
    pub fn clip_names(&self) -> Vec<String> {
        self.clips.iter().map(|c| c.name.to_lowercase()).collect()
    }
}
