//! Playground session: the interactive composer's state in one place.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use animkit_catalog_core::AnimationRecord;

use crate::codegen::render_code;
use crate::config::PlaygroundConfig;
use crate::descriptor::MotionDescriptor;
use crate::feedback::CopyFeedback;
use crate::params::{Easing, ElementKind, MotionParams};
use crate::preset::Preset;
use crate::replay::{ReplayOutcome, ReplayPolicy, ReplayState};
use crate::Result;

/// Everything the preview renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewFrame {
    pub element: ElementKind,
    /// Identity key; a change means unmount and remount.
    pub generation: u64,
    pub is_playing: bool,
    pub descriptor: MotionDescriptor,
}

#[derive(Debug, Clone)]
pub struct PlaygroundSession {
    cfg: PlaygroundConfig,
    preset: Preset,
    element: ElementKind,
    params: MotionParams,
    replay: ReplayState,
    copy: CopyFeedback,
}

impl PlaygroundSession {
    /// Open a session on a validated configuration.
    pub fn new(cfg: PlaygroundConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::from_valid(cfg))
    }

    fn from_valid(cfg: PlaygroundConfig) -> Self {
        let preset = Preset::resolve(&cfg.default_preset);
        let params = cfg.default_params;
        let replay = ReplayState::with_delay(ReplayPolicy::Replayable, cfg.reset_delay());
        let copy = CopyFeedback::new(cfg.copy_feedback());
        Self {
            cfg,
            preset,
            element: ElementKind::default(),
            params,
            replay,
            copy,
        }
    }

    #[inline]
    pub fn config(&self) -> &PlaygroundConfig {
        &self.cfg
    }

    #[inline]
    pub fn preset(&self) -> Preset {
        self.preset
    }

    #[inline]
    pub fn element(&self) -> ElementKind {
        self.element
    }

    #[inline]
    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    #[inline]
    pub fn replay_state(&self) -> &ReplayState {
        &self.replay
    }

    #[inline]
    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy
    }

    /// Select a preset by key; unknown keys fall back to the default preset.
    pub fn set_preset(&mut self, key: &str) -> Preset {
        self.preset = Preset::resolve(key);
        self.replay.set_policy(ReplayPolicy::Replayable);
        self.preset
    }

    /// Load a catalog record into the composer.
    ///
    /// Pointer-driven records keep their preview but stop honouring replay.
    pub fn select_record(&mut self, record: &AnimationRecord) -> Preset {
        self.preset = match Preset::for_record(record) {
            Some(p) => p,
            None => {
                tracing::warn!(
                    id = %record.id,
                    fallback = Preset::DEFAULT.key(),
                    "catalog record has no preset"
                );
                Preset::DEFAULT
            }
        };
        self.replay.set_policy(ReplayPolicy::for_record(record));
        self.preset
    }

    pub fn set_element(&mut self, element: ElementKind) {
        self.element = element;
    }

    pub fn set_duration(&mut self, duration: f64) -> Result<()> {
        let duration = self.cfg.duration_range.check("duration", duration)?;
        self.params = MotionParams::new(duration, self.params.delay, self.params.easing)?;
        Ok(())
    }

    pub fn set_delay(&mut self, delay: f64) -> Result<()> {
        let delay = self.cfg.delay_range.check("delay", delay)?;
        self.params = MotionParams::new(self.params.duration, delay, self.params.easing)?;
        Ok(())
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.params.easing = easing;
    }

    pub fn descriptor(&self) -> MotionDescriptor {
        self.preset.descriptor(&self.params)
    }

    pub fn preview(&self) -> PreviewFrame {
        PreviewFrame {
            element: self.element,
            generation: self.replay.generation(),
            is_playing: self.replay.is_playing(),
            descriptor: self.descriptor(),
        }
    }

    pub fn code(&self) -> String {
        render_code(&self.descriptor())
    }

    /// Snippet to hand to the clipboard; arms the "Copied!" confirmation.
    pub fn copy_code(&mut self) -> String {
        self.copy.mark_copied();
        self.code()
    }

    pub fn replay(&mut self) -> ReplayOutcome {
        self.replay.replay()
    }

    /// Advance all session timers. Returns the new generation on remount.
    pub fn advance(&mut self, dt: Duration) -> Option<u64> {
        self.copy.advance(dt);
        self.replay.advance(dt)
    }
}

impl Default for PlaygroundSession {
    fn default() -> Self {
        Self::from_valid(PlaygroundConfig::default())
    }
}
