//! Replay protocol: restart a preview by bumping its identity generation.
//!
//! Recreating an animated element with the same identity does not restart a
//! finished animation; only a new identity does. A replay therefore unmounts
//! the preview (`is_playing = false`), waits a short reset delay, then mounts
//! it again under `generation + 1`.
//!
//! Time is host-driven: call [`ReplayState::advance`] from the frame or timer
//! callback. The pending timer is owned by the state, so dropping the state
//! cancels it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use animkit_catalog_core::AnimationRecord;

/// Default unmount window between replays.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(50);

/// Whether replay requests are honoured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReplayPolicy {
    #[default]
    Replayable,
    /// Pointer-driven demos (hover, magnetic, ...) have nothing to replay.
    UserDriven,
}

impl ReplayPolicy {
    pub fn for_record(record: &AnimationRecord) -> Self {
        if record.is_user_driven() {
            Self::UserDriven
        } else {
            Self::Replayable
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReplayPhase {
    Playing,
    Resetting,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReplayOutcome {
    /// Preview unmounted; remount is pending.
    Scheduled,
    /// A reset is already in flight.
    Debounced,
    /// The preview is user-driven.
    Ignored,
}

/// One-shot countdown armed for the unmount window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetTimer {
    remaining: Duration,
}

impl ResetTimer {
    fn new(delay: Duration) -> Self {
        Self { remaining: delay }
    }

    #[inline]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Returns true once the timer has elapsed.
    fn advance(&mut self, dt: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(dt);
        self.remaining.is_zero()
    }
}

#[derive(Clone, Debug)]
pub struct ReplayState {
    generation: u64,
    policy: ReplayPolicy,
    reset_delay: Duration,
    pending: Option<ResetTimer>,
}

impl ReplayState {
    pub fn new(policy: ReplayPolicy) -> Self {
        Self::with_delay(policy, DEFAULT_RESET_DELAY)
    }

    pub fn with_delay(policy: ReplayPolicy, reset_delay: Duration) -> Self {
        Self {
            generation: 0,
            policy,
            reset_delay,
            pending: None,
        }
    }

    /// Identity key for the preview; changes on every completed replay.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.pending.is_none()
    }

    #[inline]
    pub fn phase(&self) -> ReplayPhase {
        if self.pending.is_some() {
            ReplayPhase::Resetting
        } else {
            ReplayPhase::Playing
        }
    }

    #[inline]
    pub fn policy(&self) -> ReplayPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ReplayPolicy) {
        self.policy = policy;
        if policy == ReplayPolicy::UserDriven {
            self.cancel();
        }
    }

    #[inline]
    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub fn pending(&self) -> Option<&ResetTimer> {
        self.pending.as_ref()
    }

    pub fn replay(&mut self) -> ReplayOutcome {
        if self.policy == ReplayPolicy::UserDriven {
            tracing::debug!(generation = self.generation, "replay ignored for user-driven preview");
            return ReplayOutcome::Ignored;
        }
        if self.pending.is_some() {
            tracing::debug!(generation = self.generation, "replay debounced");
            return ReplayOutcome::Debounced;
        }
        tracing::debug!(
            generation = self.generation,
            delay_ms = self.reset_delay.as_millis() as u64,
            "replay scheduled"
        );
        self.pending = Some(ResetTimer::new(self.reset_delay));
        ReplayOutcome::Scheduled
    }

    /// Advance the pending reset. Returns the new generation when the preview
    /// remounts during this step.
    pub fn advance(&mut self, dt: Duration) -> Option<u64> {
        let elapsed = self.pending.as_mut()?.advance(dt);
        if !elapsed {
            return None;
        }
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(generation = self.generation, "preview remounted");
        Some(self.generation)
    }

    /// Drop any pending reset without bumping the generation.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!(generation = self.generation, "pending replay cancelled");
        }
    }
}

impl Default for ReplayState {
    fn default() -> Self {
        Self::new(ReplayPolicy::Replayable)
    }
}
