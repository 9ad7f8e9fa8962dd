//! keymotion is a keyframe-based 2D animation timeline model.
//!
//! Each named shape owns a sorted sequence of keyframes (tick + position, dimensions, color).
//! The registry ([`Animation`]) is the single mutation entry point; its read surface answers
//! "what does this shape look like at tick T" by linear interpolation between the bounding
//! keyframes, and feeds two encoders.
//!
//! # Pipeline overview
//!
//! 1. **Load**: a text document is read statement by statement into an [`AnimationBuilder`]
//!    ([`read_str`], [`read_path`]).
//! 2. **Edit**: collaborators mutate the registry (`add_shape`, `add_animation`,
//!    `add_keyframe`, `remove_animation`, `remove_shape`).
//! 3. **Query**: [`Animation::shapes_at_tick`] hands out the keyframe bracket around a tick,
//!    [`Animation::state_at`] the interpolated pose.
//! 4. **Encode**: [`TextEncoder`] and [`SvgEncoder`] serialize the registry.
//!
//! The model is single-threaded and synchronous. Every failed mutation leaves the registry
//! untouched.
#![forbid(unsafe_code)]

mod animation;
mod composition;
mod encode;
mod foundation;

pub use animation::keyframe::{Keyframe, KeyframePatch, Segment};
pub use animation::lerp::{Lerp, Weights};
pub use animation::shape::{Bracket, Shape, ShapeAtTick, ShapeKind};
pub use composition::builder::{AnimationBuilder, ModelBuilder, RawPose};
pub use composition::model::Animation;
pub use encode::Encoder;
pub use encode::reader::{read_path, read_str};
pub use encode::svg::{SvgEncoder, SvgOptions};
pub use encode::text::TextEncoder;
pub use foundation::core::{Canvas, Color, Dimensions, Position, Tick};
pub use foundation::error::{KeymotionError, KeymotionResult};
