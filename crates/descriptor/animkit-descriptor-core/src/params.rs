//! Caller-facing parameters: timing, easing and preview element kind.
//!
//! Values are validated here, at the boundary; the descriptor engine assumes
//! they are in range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;
use crate::Result;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    /// Identifier understood by the motion runtime.
    #[inline]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
        }
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Ease => "Ease",
            Self::EaseIn => "Ease In",
            Self::EaseOut => "Ease Out",
            Self::EaseInOut => "Ease In Out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Easing {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self> {
        Easing::ALL
            .iter()
            .copied()
            .find(|e| e.id() == s)
            .ok_or_else(|| DescriptorError::invalid("easing", s, "unknown easing identifier"))
    }
}

/// Shape of the preview shell. Never affects the descriptor itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Box,
    Button,
    Card,
    Text,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Box,
        ElementKind::Button,
        ElementKind::Card,
        ElementKind::Text,
    ];

    #[inline]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Button => "button",
            Self::Card => "card",
            Self::Text => "text",
        }
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Box => "Box",
            Self::Button => "Button",
            Self::Card => "Card",
            Self::Text => "Text",
        }
    }

    /// Animated element tag wrapping the preview content.
    #[inline]
    pub fn shell_tag(&self) -> &'static str {
        match self {
            Self::Button => "motion.button",
            Self::Box | Self::Card | Self::Text => "motion.div",
        }
    }
}

impl FromStr for ElementKind {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self> {
        ElementKind::ALL
            .iter()
            .copied()
            .find(|k| k.id() == s)
            .ok_or_else(|| DescriptorError::invalid("elementKind", s, "unknown element kind"))
    }
}

/// Validated timing parameters, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionParams {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl MotionParams {
    pub fn new(duration: f64, delay: f64, easing: Easing) -> Result<Self> {
        let params = Self {
            duration,
            delay,
            easing,
        };
        params.validate()?;
        Ok(params)
    }

    /// Duration must be finite and positive, delay finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(DescriptorError::invalid(
                "duration",
                self.duration,
                "must be finite and > 0",
            ));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(DescriptorError::invalid(
                "delay",
                self.delay,
                "must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            duration: 0.5,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }
}

/// Inclusive slider range for a timing parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const DURATION: ParamRange = ParamRange {
        min: 0.1,
        max: 2.0,
        step: 0.1,
    };
    pub const DELAY: ParamRange = ParamRange {
        min: 0.0,
        max: 2.0,
        step: 0.1,
    };

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v.is_finite() && v >= self.min && v <= self.max
    }

    /// Clamp into range; non-finite input maps to `min`.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        if v.is_finite() {
            v.clamp(self.min, self.max)
        } else {
            self.min
        }
    }

    /// Check `v` against the range, naming the parameter in the error.
    pub fn check(&self, name: &str, v: f64) -> Result<f64> {
        if self.contains(v) {
            Ok(v)
        } else {
            Err(DescriptorError::invalid(
                name,
                v,
                format!("must be within [{}, {}]", self.min, self.max),
            ))
        }
    }

    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(DescriptorError::invalid(
                name,
                format!("[{}, {}]", self.min, self.max),
                "range bounds must be finite and ordered",
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(DescriptorError::invalid(name, self.step, "step must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_ids_parse() {
        for e in Easing::ALL {
            assert_eq!(e.id().parse::<Easing>().unwrap(), e);
        }
        assert!(matches!(
            "bouncy".parse::<Easing>(),
            Err(DescriptorError::InvalidParameter { .. })
        ));
        assert_eq!(Easing::EaseInOut.label(), "Ease In Out");
    }

    #[test]
    fn element_kind_shell() {
        assert_eq!(ElementKind::Button.shell_tag(), "motion.button");
        assert_eq!(ElementKind::Card.shell_tag(), "motion.div");
        assert_eq!("text".parse::<ElementKind>().unwrap(), ElementKind::Text);
        assert!("modal".parse::<ElementKind>().is_err());
    }

    #[test]
    fn params_reject_out_of_range() {
        assert!(MotionParams::new(0.5, 0.0, Easing::Linear).is_ok());
        assert!(MotionParams::new(0.0, 0.0, Easing::Linear).is_err());
        assert!(MotionParams::new(-1.0, 0.0, Easing::Linear).is_err());
        assert!(MotionParams::new(f64::NAN, 0.0, Easing::Linear).is_err());
        assert!(MotionParams::new(0.5, -0.1, Easing::Linear).is_err());
        assert!(MotionParams::new(0.5, f64::INFINITY, Easing::Linear).is_err());
    }

    #[test]
    fn ranges_clamp_and_check() {
        let r = ParamRange::DURATION;
        assert_eq!(r.clamp(5.0), 2.0);
        assert_eq!(r.clamp(0.0), 0.1);
        assert_eq!(r.clamp(f64::NAN), 0.1);
        assert!(r.check("duration", 0.7).is_ok());
        assert!(r.check("duration", 2.5).is_err());
        assert!(ParamRange::DELAY.contains(0.0));
    }

    #[test]
    fn easing_serde_is_camel_case() {
        assert_eq!(serde_json::to_string(&Easing::EaseInOut).unwrap(), "\"easeInOut\"");
        let p: MotionParams =
            serde_json::from_str(r#"{"duration":1.0,"delay":0.2,"easing":"linear"}"#).unwrap();
        assert_eq!(p.easing, Easing::Linear);
    }
}
