//! Motion descriptors and the preset lookup entry point.

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;
use crate::params::MotionParams;
use crate::preset::Preset;
use crate::transition::Transition;
use crate::value::{MotionValue, PropertyMap};
use crate::Result;

/// Initial state, target state and transition for one animated element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionDescriptor {
    pub initial: PropertyMap,
    pub animate: PropertyMap,
    pub transition: Transition,
}

impl MotionDescriptor {
    /// `initial` and `animate` must name the same properties, and every
    /// number must be finite so the rendered snippet parses back.
    pub fn validate(&self) -> Result<()> {
        for (side, map) in [("initial", &self.initial), ("animate", &self.animate)] {
            for (k, v) in map {
                let finite = match v {
                    MotionValue::Number(n) => n.is_finite(),
                    MotionValue::Keyframes(frames) => frames.iter().all(|n| n.is_finite()),
                    MotionValue::Text(_) => true,
                };
                if !finite {
                    return Err(DescriptorError::invalid(k, side, "numbers must be finite"));
                }
            }
        }
        let t = &self.transition;
        for (name, v) in [
            ("duration", t.duration),
            ("delay", Some(t.delay)),
            ("stiffness", t.stiffness),
            ("damping", t.damping),
            ("bounce", t.bounce),
        ] {
            if let Some(v) = v.filter(|v| !v.is_finite()) {
                return Err(DescriptorError::invalid(name, v, "must be finite"));
            }
        }
        if let Some(k) = self.initial.keys().find(|k| !self.animate.contains_key(*k)) {
            return Err(DescriptorError::invalid(k, "initial", "missing from animate"));
        }
        if let Some(k) = self.animate.keys().find(|k| !self.initial.contains_key(*k)) {
            return Err(DescriptorError::invalid(k, "animate", "missing from initial"));
        }
        Ok(())
    }
}

/// Map a preset key plus timing parameters to a descriptor.
///
/// Unknown keys resolve to [`Preset::DEFAULT`]. Pure: equal inputs give equal output.
pub fn build_descriptor(preset_key: &str, params: &MotionParams) -> MotionDescriptor {
    Preset::resolve(preset_key).descriptor(params)
}
