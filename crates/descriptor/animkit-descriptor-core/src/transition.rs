//! Transition parameters and the preset-level overrides merged into them.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::params::{Easing, MotionParams};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Tween,
    Spring,
}

/// Repeat count. `Infinite` serializes as the float infinity so JS hosts see `Infinity`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Infinite,
}

impl Serialize for Repeat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Repeat::Count(n) => serializer.serialize_u32(*n),
            Repeat::Infinite => serializer.serialize_f64(f64::INFINITY),
        }
    }
}

struct RepeatVisitor;

impl<'de> Visitor<'de> for RepeatVisitor {
    type Value = Repeat;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer, Infinity, or null")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Repeat, E> {
        u32::try_from(v)
            .map(Repeat::Count)
            .map_err(|_| E::custom(format!("repeat count {v} too large")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Repeat, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("repeat count {v} is negative")))
            .and_then(|v| self.visit_u64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Repeat, E> {
        if v.is_infinite() && v > 0.0 {
            Ok(Repeat::Infinite)
        } else if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
            Ok(Repeat::Count(v as u32))
        } else {
            Err(E::custom(format!("invalid repeat value {v}")))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Repeat, E> {
        match v {
            "Infinity" => Ok(Repeat::Infinite),
            _ => Err(E::custom(format!("invalid repeat value {v:?}"))),
        }
    }

    // serde_json writes non-finite floats as null
    fn visit_unit<E: de::Error>(self) -> Result<Repeat, E> {
        Ok(Repeat::Infinite)
    }
}

impl<'de> Deserialize<'de> for Repeat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RepeatVisitor)
    }
}

/// Interpolation parameters handed to the motion runtime.
///
/// Field names follow the runtime's vocabulary (`ease`, `type`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub delay: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Easing>,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<TransitionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce: Option<f64>,
    #[serde(
        default,
        deserialize_with = "present_repeat",
        skip_serializing_if = "Option::is_none"
    )]
    pub repeat: Option<Repeat>,
}

/// A present `repeat` key is always some repeat; `null` means infinite.
fn present_repeat<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Repeat>, D::Error> {
    Repeat::deserialize(d).map(Some)
}

impl Transition {
    /// Plain duration-based tween: exactly `{duration, delay, ease}`.
    pub fn tween(params: &MotionParams) -> Self {
        Self {
            duration: Some(params.duration),
            delay: params.delay,
            ease: Some(params.easing),
            kind: None,
            stiffness: None,
            damping: None,
            bounce: None,
            repeat: None,
        }
    }

    /// Bare duration with no easing, as used by catalog card previews.
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            delay: 0.0,
            ease: None,
            kind: None,
            stiffness: None,
            damping: None,
            bounce: None,
            repeat: None,
        }
    }

    #[inline]
    pub fn is_spring(&self) -> bool {
        self.kind == Some(TransitionKind::Spring)
    }
}

/// Spring physics that replace duration-based easing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Spring {
    /// Duration-based spring with the given bounciness (0..1).
    Bounce(f64),
    /// Physical spring; duration is derived from stiffness and damping.
    Physical { stiffness: f64, damping: f64 },
}

/// Fixed transition fields declared by a preset. Set fields win over caller params.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TransitionOverride {
    pub spring: Option<Spring>,
    pub repeat: Option<Repeat>,
    pub ease: Option<Easing>,
}

impl TransitionOverride {
    pub fn apply(&self, mut t: Transition) -> Transition {
        match self.spring {
            Some(Spring::Bounce(bounce)) => {
                t.kind = Some(TransitionKind::Spring);
                t.bounce = Some(bounce);
            }
            Some(Spring::Physical { stiffness, damping }) => {
                t.kind = Some(TransitionKind::Spring);
                t.stiffness = Some(stiffness);
                t.damping = Some(damping);
                t.duration = None;
                t.ease = None;
            }
            None => {}
        }
        if let Some(ease) = self.ease {
            t.ease = Some(ease);
        }
        if let Some(repeat) = self.repeat {
            t.repeat = Some(repeat);
        }
        t
    }
}
