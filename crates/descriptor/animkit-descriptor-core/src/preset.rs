//! Closed preset table: each variant carries its keyframe payload and optional
//! transition override.

use serde::{Deserialize, Serialize};

use animkit_catalog_core::AnimationRecord;

use crate::descriptor::MotionDescriptor;
use crate::params::{Easing, MotionParams};
use crate::transition::{Repeat, Spring, Transition, TransitionOverride};
use crate::value::{props, PropertyMap};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    FadeIn,
    FadeInUp,
    SlideInUp,
    SlideInDown,
    SlideInLeft,
    SlideInRight,
    ScaleIn,
    BounceIn,
    RotateIn,
    BlurIn,
    FadeOut,
    SlideOutRight,
    Pulse,
    Rotate,
    ModalSlide,
}

impl Preset {
    /// Used whenever a key has no entry in the table.
    pub const DEFAULT: Preset = Preset::FadeInUp;

    pub const ALL: [Preset; 15] = [
        Preset::FadeIn,
        Preset::FadeInUp,
        Preset::SlideInUp,
        Preset::SlideInDown,
        Preset::SlideInLeft,
        Preset::SlideInRight,
        Preset::ScaleIn,
        Preset::BounceIn,
        Preset::RotateIn,
        Preset::BlurIn,
        Preset::FadeOut,
        Preset::SlideOutRight,
        Preset::Pulse,
        Preset::Rotate,
        Preset::ModalSlide,
    ];

    /// Options offered by the playground's animation type selector.
    pub const PLAYGROUND: [Preset; 8] = [
        Preset::FadeIn,
        Preset::SlideInUp,
        Preset::SlideInDown,
        Preset::SlideInLeft,
        Preset::SlideInRight,
        Preset::ScaleIn,
        Preset::BounceIn,
        Preset::RotateIn,
    ];

    #[inline]
    pub fn key(&self) -> &'static str {
        match self {
            Self::FadeIn => "fadeIn",
            Self::FadeInUp => "fadeInUp",
            Self::SlideInUp => "slideInUp",
            Self::SlideInDown => "slideInDown",
            Self::SlideInLeft => "slideInLeft",
            Self::SlideInRight => "slideInRight",
            Self::ScaleIn => "scaleIn",
            Self::BounceIn => "bounceIn",
            Self::RotateIn => "rotateIn",
            Self::BlurIn => "blurIn",
            Self::FadeOut => "fadeOut",
            Self::SlideOutRight => "slideOutRight",
            Self::Pulse => "pulse",
            Self::Rotate => "rotate",
            Self::ModalSlide => "modalSlide",
        }
    }

    /// Catalog record ids that map onto this preset.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::FadeIn => &["fade-in", "page-fade"],
            Self::FadeInUp => &["fade-in-up"],
            Self::SlideInLeft => &["slide-in-left"],
            Self::ScaleIn => &["scale-in"],
            Self::BounceIn => &["bounce-in"],
            Self::FadeOut => &["fade-out"],
            Self::SlideOutRight => &["slide-out-right"],
            Self::Rotate => &["spinner"],
            Self::ModalSlide => &["modal-slide"],
            _ => &[],
        }
    }

    /// Exact lookup by key or catalog alias.
    pub fn from_key(key: &str) -> Option<Preset> {
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.key() == key || p.aliases().contains(&key))
    }

    /// Lookup with fallback to [`Preset::DEFAULT`]. Keys come from the closed
    /// preset list, so a miss is an internal mismatch rather than user error.
    pub fn resolve(key: &str) -> Preset {
        Preset::from_key(key).unwrap_or_else(|| {
            tracing::debug!(key, fallback = Preset::DEFAULT.key(), "unknown preset key");
            Preset::DEFAULT
        })
    }

    /// Preset matching a catalog record's id, if any.
    pub fn for_record(record: &AnimationRecord) -> Option<Preset> {
        Preset::from_key(&record.id)
    }

    /// (initial, animate) property states.
    pub fn states(&self) -> (PropertyMap, PropertyMap) {
        match self {
            Self::FadeIn => (
                props([("opacity", 0.0.into())]),
                props([("opacity", 1.0.into())]),
            ),
            Self::FadeInUp => (
                props([("opacity", 0.0.into()), ("y", 20.0.into())]),
                props([("opacity", 1.0.into()), ("y", 0.0.into())]),
            ),
            Self::SlideInUp => (
                props([("opacity", 0.0.into()), ("y", 50.0.into())]),
                props([("opacity", 1.0.into()), ("y", 0.0.into())]),
            ),
            Self::SlideInDown => (
                props([("opacity", 0.0.into()), ("y", (-50.0).into())]),
                props([("opacity", 1.0.into()), ("y", 0.0.into())]),
            ),
            Self::SlideInLeft => (
                props([("opacity", 0.0.into()), ("x", (-50.0).into())]),
                props([("opacity", 1.0.into()), ("x", 0.0.into())]),
            ),
            Self::SlideInRight => (
                props([("opacity", 0.0.into()), ("x", 50.0.into())]),
                props([("opacity", 1.0.into()), ("x", 0.0.into())]),
            ),
            Self::ScaleIn => (
                props([("opacity", 0.0.into()), ("scale", 0.8.into())]),
                props([("opacity", 1.0.into()), ("scale", 1.0.into())]),
            ),
            Self::BounceIn => (
                props([("opacity", 0.0.into()), ("scale", 0.3.into())]),
                props([("opacity", 1.0.into()), ("scale", 1.0.into())]),
            ),
            Self::RotateIn => (
                props([("opacity", 0.0.into()), ("rotate", (-180.0).into())]),
                props([("opacity", 1.0.into()), ("rotate", 0.0.into())]),
            ),
            Self::BlurIn => (
                props([("opacity", 0.0.into()), ("filter", "blur(10px)".into())]),
                props([("opacity", 1.0.into()), ("filter", "blur(0px)".into())]),
            ),
            Self::FadeOut => (
                props([("opacity", 1.0.into())]),
                props([("opacity", 0.0.into())]),
            ),
            Self::SlideOutRight => (
                props([("opacity", 1.0.into()), ("x", 0.0.into())]),
                props([("opacity", 0.0.into()), ("x", 50.0.into())]),
            ),
            Self::Pulse => (
                props([("scale", 1.0.into())]),
                props([("scale", vec![1.0, 1.05, 1.0].into())]),
            ),
            Self::Rotate => (
                props([("rotate", 0.0.into())]),
                props([("rotate", 360.0.into())]),
            ),
            Self::ModalSlide => (
                props([("opacity", 0.0.into()), ("y", 100.0.into())]),
                props([("opacity", 1.0.into()), ("y", 0.0.into())]),
            ),
        }
    }

    pub fn transition_override(&self) -> Option<TransitionOverride> {
        match self {
            Self::BounceIn => Some(TransitionOverride {
                spring: Some(Spring::Bounce(0.5)),
                ..Default::default()
            }),
            Self::Pulse => Some(TransitionOverride {
                repeat: Some(Repeat::Infinite),
                ..Default::default()
            }),
            Self::Rotate => Some(TransitionOverride {
                repeat: Some(Repeat::Infinite),
                ease: Some(Easing::Linear),
                ..Default::default()
            }),
            Self::ModalSlide => Some(TransitionOverride {
                spring: Some(Spring::Physical {
                    stiffness: 300.0,
                    damping: 30.0,
                }),
                ..Default::default()
            }),
            _ => None,
        }
    }

    /// Build the descriptor for this preset with the caller's timing.
    pub fn descriptor(&self, params: &MotionParams) -> MotionDescriptor {
        let (initial, animate) = self.states();
        let base = Transition::tween(params);
        let transition = match self.transition_override() {
            Some(o) => o.apply(base),
            None => base,
        };
        MotionDescriptor {
            initial,
            animate,
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in Preset::ALL {
            assert!(seen.insert(p.key()), "duplicate key {}", p.key());
            for a in p.aliases() {
                assert!(seen.insert(*a), "duplicate alias {a}");
            }
        }
    }

    #[test]
    fn states_share_keys() {
        for p in Preset::ALL {
            let (initial, animate) = p.states();
            let a: Vec<_> = initial.keys().collect();
            let b: Vec<_> = animate.keys().collect();
            assert_eq!(a, b, "{}", p.key());
        }
    }

    #[test]
    fn unknown_keys_fall_back_to_default() {
        assert_eq!(Preset::resolve("wobble"), Preset::FadeInUp);
        assert_eq!(Preset::resolve(""), Preset::DEFAULT);
        assert_eq!(Preset::resolve("bounceIn"), Preset::BounceIn);
        assert_eq!(Preset::resolve("bounce-in"), Preset::BounceIn);
        assert_eq!(Preset::from_key("wobble"), None);
    }

    #[test]
    fn serde_key_matches_key() {
        for p in Preset::ALL {
            let s = serde_json::to_string(&p).unwrap();
            assert_eq!(s, format!("\"{}\"", p.key()));
        }
    }

    #[test]
    fn playground_presets_are_one_shot() {
        let params = MotionParams::default();
        for p in Preset::PLAYGROUND {
            assert_eq!(p.descriptor(&params).transition.repeat, None, "{}", p.key());
        }
    }
}
