//! Short-lived UI flags: copy confirmation and the catalog card play overlay.

use std::time::Duration;

use crate::config::PlaygroundConfig;
use crate::descriptor::MotionDescriptor;
use crate::transition::Transition;
use crate::value::props;

/// Boolean that stays set for a fixed hold time after being triggered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimedFlag {
    hold: Duration,
    remaining: Option<Duration>,
}

impl TimedFlag {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            remaining: None,
        }
    }

    /// Set the flag, restarting the hold time if already set.
    pub fn trigger(&mut self) {
        self.remaining = Some(self.hold);
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.remaining.is_some()
    }

    /// Returns true when the flag clears during this step.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(left) = self.remaining else {
            return false;
        };
        let left = left.saturating_sub(dt);
        if left.is_zero() {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(left);
            false
        }
    }

    pub fn clear(&mut self) {
        self.remaining = None;
    }
}

/// "Copied!" confirmation shown after handing a snippet to the clipboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyFeedback {
    flag: TimedFlag,
}

impl CopyFeedback {
    pub const DEFAULT_HOLD: Duration = Duration::from_millis(2000);

    pub fn new(hold: Duration) -> Self {
        Self {
            flag: TimedFlag::new(hold),
        }
    }

    pub fn mark_copied(&mut self) {
        self.flag.trigger();
    }

    #[inline]
    pub fn is_copied(&self) -> bool {
        self.flag.is_set()
    }

    pub fn label(&self) -> &'static str {
        if self.is_copied() {
            "Copied!"
        } else {
            "Copy"
        }
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        self.flag.advance(dt)
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOLD)
    }
}

/// Play overlay on a catalog card: a short fade-up demo keyed on play state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPlayback {
    flag: TimedFlag,
}

impl CardPlayback {
    pub const DEFAULT_HOLD: Duration = Duration::from_millis(1000);
    const DEMO_DURATION: f64 = 0.5;

    pub fn new(hold: Duration) -> Self {
        Self {
            flag: TimedFlag::new(hold),
        }
    }

    /// Hold time taken from `card_play_ms`.
    pub fn from_config(cfg: &PlaygroundConfig) -> Self {
        Self::new(cfg.card_play())
    }

    pub fn play(&mut self) {
        self.flag.trigger();
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.flag.is_set()
    }

    /// Identity key; flips on play so the demo element remounts.
    pub fn key(&self) -> &'static str {
        if self.is_playing() {
            "playing"
        } else {
            "idle"
        }
    }

    pub fn preview_descriptor(&self) -> MotionDescriptor {
        let start_y = if self.is_playing() { 20.0 } else { 0.0 };
        let start_opacity = if self.is_playing() { 0.0 } else { 1.0 };
        MotionDescriptor {
            initial: props([("opacity", start_opacity.into()), ("y", start_y.into())]),
            animate: props([("opacity", 1.0.into()), ("y", 0.0.into())]),
            transition: Transition::with_duration(Self::DEMO_DURATION),
        }
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        self.flag.advance(dt)
    }
}

impl Default for CardPlayback {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOLD)
    }
}
