//! Playground configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;
use crate::params::{MotionParams, ParamRange};
use crate::preset::Preset;
use crate::Result;

/// Convert a host frame delta in milliseconds to a [`Duration`].
///
/// Negative, non-finite and unrepresentably large deltas are rejected.
pub fn duration_from_ms(dt_ms: f64) -> Result<Duration> {
    if !dt_ms.is_finite() || dt_ms < 0.0 {
        return Err(DescriptorError::invalid("dt_ms", dt_ms, "must be finite and >= 0"));
    }
    Duration::try_from_secs_f64(dt_ms / 1000.0)
        .map_err(|e| DescriptorError::invalid("dt_ms", dt_ms, e.to_string()))
}

/// Timings, slider ranges and initial selection for a playground session.
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Unmount window between replays.
    pub reset_delay_ms: u64,
    /// How long the "Copied!" confirmation stays up.
    pub copy_feedback_ms: u64,
    /// How long a catalog card's play overlay stays active.
    pub card_play_ms: u64,
    pub duration_range: ParamRange,
    pub delay_range: ParamRange,
    /// Preset key selected when the session opens.
    pub default_preset: String,
    pub default_params: MotionParams,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 50,
            copy_feedback_ms: 2000,
            card_play_ms: 1000,
            duration_range: ParamRange::DURATION,
            delay_range: ParamRange::DELAY,
            default_preset: Preset::FadeIn.key().to_string(),
            default_params: MotionParams::default(),
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Ranges must be well formed and contain the default params.
    pub fn validate(&self) -> Result<()> {
        self.duration_range.validate("duration_range")?;
        self.delay_range.validate("delay_range")?;
        self.default_params.validate()?;
        self.duration_range
            .check("duration", self.default_params.duration)?;
        self.delay_range.check("delay", self.default_params.delay)?;
        Ok(())
    }

    #[inline]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    #[inline]
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    #[inline]
    pub fn card_play(&self) -> Duration {
        Duration::from_millis(self.card_play_ms)
    }
}
