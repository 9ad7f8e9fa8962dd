use crate::{
    animation::{
        keyframe::{Keyframe, KeyframePatch, Segment},
        shape::{Shape, ShapeKind},
    },
    composition::model::Animation,
    foundation::{
        core::{Color, Dimensions, Position, Tick},
        error::KeymotionResult,
    },
};

/// One pose as plain integers, the way the text format spells it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawPose {
    pub t: i64,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl RawPose {
    /// Validate every field and build a [`Keyframe`].
    pub fn to_keyframe(self) -> KeymotionResult<Keyframe> {
        Ok(Keyframe::new(
            Tick::new(self.t)?,
            Position::new(self.x, self.y),
            Dimensions::new(self.w, self.h)?,
            Color::new(self.r, self.g, self.b)?,
        ))
    }
}

impl From<&Keyframe> for RawPose {
    fn from(kf: &Keyframe) -> Self {
        let pos = kf.position();
        let dim = kf.dimensions();
        let color = kf.color();
        Self {
            t: i64::try_from(kf.tick().0).unwrap_or(i64::MAX),
            x: pos.x,
            y: pos.y,
            w: i32::try_from(dim.width()).unwrap_or(i32::MAX),
            h: i32::try_from(dim.height()).unwrap_or(i32::MAX),
            r: i32::from(color.r()),
            g: i32::from(color.g()),
            b: i32::from(color.b()),
        }
    }
}

/// Construction interface driven by a file-format reader, statement by statement.
///
/// Every call maps onto one registry operation and propagates its failure.
pub trait AnimationBuilder {
    /// Finished product.
    type Output;

    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> KeymotionResult<()>;

    /// Declare an empty shape; `kind` is `"rectangle"` or `"ellipse"`.
    fn declare_shape(&mut self, name: &str, kind: &str) -> KeymotionResult<()>;

    /// Append the segment `start -> end` to a declared shape.
    fn add_motion(&mut self, name: &str, start: RawPose, end: RawPose) -> KeymotionResult<()>;

    /// Create or overwrite the keyframe at `pose.t`.
    fn add_keyframe(&mut self, name: &str, pose: RawPose) -> KeymotionResult<()>;

    fn build(self) -> KeymotionResult<Self::Output>;
}

/// Builds an [`Animation`] registry.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: Animation,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnimationBuilder for ModelBuilder {
    type Output = Animation;

    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> KeymotionResult<()> {
        self.model.set_canvas(x, y, width, height);
        Ok(())
    }

    fn declare_shape(&mut self, name: &str, kind: &str) -> KeymotionResult<()> {
        let kind: ShapeKind = kind.parse()?;
        self.model.add_shape(Shape::new(name, kind))
    }

    fn add_motion(&mut self, name: &str, start: RawPose, end: RawPose) -> KeymotionResult<()> {
        let segment = Segment::new(start.to_keyframe()?, end.to_keyframe()?)?;
        self.model.add_animation(name, segment)
    }

    fn add_keyframe(&mut self, name: &str, pose: RawPose) -> KeymotionResult<()> {
        let kf = pose.to_keyframe()?;
        self.model
            .add_keyframe(name, kf.tick(), KeyframePatch::from(kf))
    }

    fn build(self) -> KeymotionResult<Animation> {
        Ok(self.model)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/builder.rs"]
mod tests;
