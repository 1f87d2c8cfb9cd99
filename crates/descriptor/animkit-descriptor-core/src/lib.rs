//! animkit-descriptor-core: preset → motion descriptor engine for the AnimKit playground.
//!
//! - [`build_descriptor`] maps a preset key and timing params to a [`MotionDescriptor`].
//! - [`render_code`] / [`parse_code`] convert descriptors to and from JSX snippets.
//! - [`ReplayState`] restarts a preview by bumping its identity generation.
//! - [`PlaygroundSession`] bundles the above for the interactive composer.

pub mod codegen;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod feedback;
pub mod params;
pub mod preset;
pub mod replay;
pub mod session;
pub mod transition;
pub mod value;

pub use codegen::{parse_code, render_code};
pub use config::{duration_from_ms, PlaygroundConfig};
pub use descriptor::{build_descriptor, MotionDescriptor};
pub use error::DescriptorError;
pub use feedback::{CardPlayback, CopyFeedback, TimedFlag};
pub use params::{Easing, ElementKind, MotionParams, ParamRange};
pub use preset::Preset;
pub use replay::{ReplayOutcome, ReplayPhase, ReplayPolicy, ReplayState, ResetTimer};
pub use session::{PlaygroundSession, PreviewFrame};
pub use transition::{Repeat, Spring, Transition, TransitionKind, TransitionOverride};
pub use value::{MotionValue, PropertyMap};

pub type Result<T> = core::result::Result<T, DescriptorError>;
