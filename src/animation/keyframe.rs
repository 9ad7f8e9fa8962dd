use crate::foundation::{
    core::{Color, Dimensions, Position, Tick},
    error::{KeymotionError, KeymotionResult},
};

/// A complete pose pinned to one tick.
///
/// The tick is fixed for the lifetime of the keyframe; the pose may be patched in place by the
/// owning [`Shape`](crate::Shape).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    tick: Tick,
    position: Position,
    dimensions: Dimensions,
    color: Color,
}

impl Keyframe {
    pub fn new(tick: Tick, position: Position, dimensions: Dimensions, color: Color) -> Self {
        Self {
            tick,
            position,
            dimensions,
            color,
        }
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Overwrite the attributes present in `patch`, leaving the others untouched.
    pub(crate) fn apply(&mut self, patch: &KeyframePatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(dimensions) = patch.dimensions {
            self.dimensions = dimensions;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Partial pose used to create or update the keyframe at one tick.
///
/// Creating a new tick requires all three attributes; updating an existing tick accepts any
/// subset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyframePatch {
    pub position: Option<Position>,
    pub dimensions: Option<Dimensions>,
    pub color: Option<Color>,
}

impl KeyframePatch {
    /// Patch carrying every attribute.
    pub fn full(position: Position, dimensions: Dimensions, color: Color) -> Self {
        Self {
            position: Some(position),
            dimensions: Some(dimensions),
            color: Some(color),
        }
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.dimensions.is_none() && self.color.is_none()
    }

    /// Turn a complete patch into a keyframe at `tick`.
    pub fn into_keyframe(self, tick: Tick) -> KeymotionResult<Keyframe> {
        match (self.position, self.dimensions, self.color) {
            (Some(position), Some(dimensions), Some(color)) => {
                Ok(Keyframe::new(tick, position, dimensions, color))
            }
            _ => Err(KeymotionError::IncompleteKeyframe { tick }),
        }
    }
}

impl From<Keyframe> for KeyframePatch {
    fn from(kf: Keyframe) -> Self {
        Self::full(kf.position, kf.dimensions, kf.color)
    }
}

/// Two keyframes describing one continuous transition, supplied together by a caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    start: Keyframe,
    end: Keyframe,
}

impl Segment {
    /// Validate and pair two endpoints.
    ///
    /// Fails with [`KeymotionError::Ordering`] when `end` precedes `start` and with
    /// [`KeymotionError::DegenerateSegment`] when both endpoints are identical.
    pub fn new(start: Keyframe, end: Keyframe) -> KeymotionResult<Self> {
        if end.tick < start.tick {
            return Err(KeymotionError::Ordering {
                start: start.tick,
                end: end.tick,
            });
        }
        if start == end {
            return Err(KeymotionError::DegenerateSegment { tick: start.tick });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &Keyframe {
        &self.start
    }

    pub fn end(&self) -> &Keyframe {
        &self.end
    }

    pub fn duration(&self) -> u64 {
        self.start.tick.span_to(self.end.tick)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframe.rs"]
mod tests;
