use std::fmt::Write as _;

use crate::{
    animation::keyframe::Keyframe,
    composition::model::Animation,
    encode::{Encoder, fmt_error},
    foundation::error::KeymotionResult,
};

/// Encodes a registry as `canvas`, `shape` and `motion` statements.
///
/// Shapes without keyframes are skipped; a shape with N >= 2 keyframes yields N-1 motion lines.
/// A lone keyframe has no pair to form a motion, so it is written as a `keyframe` statement.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextEncoder;

impl Encoder for TextEncoder {
    #[tracing::instrument(level = "debug", skip_all, fields(shapes = model.len()))]
    fn encode(&self, model: &Animation) -> KeymotionResult<String> {
        let mut out = String::new();
        let c = model.canvas();
        writeln!(out, "canvas {} {} {} {}", c.left, c.top, c.width, c.height)
            .map_err(fmt_error)?;

        for shape in model.iter().filter(|s| !s.keyframes().is_empty()) {
            tracing::trace!(shape = shape.name(), "encoding shape");
            writeln!(out, "shape {} {}", shape.name(), shape.kind()).map_err(fmt_error)?;
            if let [only] = shape.keyframes() {
                writeln!(out, "keyframe {} {}", shape.name(), PoseFields(only))
                    .map_err(fmt_error)?;
            }
            for pair in shape.keyframes().windows(2) {
                writeln!(
                    out,
                    "motion {} {} {}",
                    shape.name(),
                    PoseFields(&pair[0]),
                    PoseFields(&pair[1])
                )
                .map_err(fmt_error)?;
            }
        }

        Ok(out)
    }
}

/// `t x y w h r g b` for one keyframe.
struct PoseFields<'a>(&'a Keyframe);

impl std::fmt::Display for PoseFields<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kf = self.0;
        let (pos, dim, color) = (kf.position(), kf.dimensions(), kf.color());
        write!(
            f,
            "{} {} {} {} {} {} {} {}",
            kf.tick(),
            pos.x,
            pos.y,
            dim.width(),
            dim.height(),
            color.r(),
            color.g(),
            color.b()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/text.rs"]
mod tests;
