use indexmap::IndexMap;

use crate::{
    animation::{
        keyframe::{Keyframe, KeyframePatch, Segment},
        shape::{Shape, ShapeAtTick},
    },
    foundation::{
        core::{Canvas, Tick},
        error::{KeymotionError, KeymotionResult},
    },
};

/// Registry of named shapes on a canvas.
///
/// This is the only mutation entry point for collaborators. Shapes keep their registration order
/// and names are unique. Queries hand out owned copies, so a caller may keep a result across later
/// mutations without observing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Animation {
    canvas: Canvas,
    shapes: IndexMap<String, Shape>,
}

impl Animation {
    /// Create an empty registry with a zero canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the canvas bounds.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_canvas(&mut self, left: i32, top: i32, width: i32, height: i32) {
        self.canvas = Canvas::new(left, top, width, height);
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Register `shape`.
    ///
    /// Names must be a single non-empty token without whitespace, so every registered shape can
    /// be written as one text statement ([`KeymotionError::Validation`] otherwise). Fails with
    /// [`KeymotionError::DuplicateName`] if the name is taken.
    #[tracing::instrument(level = "debug", skip(self, shape), fields(name = shape.name()))]
    pub fn add_shape(&mut self, shape: Shape) -> KeymotionResult<()> {
        validate_name(shape.name())?;
        if self.shapes.contains_key(shape.name()) {
            return Err(KeymotionError::DuplicateName(shape.name().to_string()));
        }
        self.shapes.insert(shape.name().to_string(), shape);
        tracing::debug!(count = self.shapes.len(), "shape added");
        Ok(())
    }

    /// Unregister and return the shape called `name`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_shape(&mut self, name: &str) -> KeymotionResult<Shape> {
        let shape = self
            .shapes
            .shift_remove(name)
            .ok_or_else(|| no_such_shape(name))?;
        tracing::debug!(count = self.shapes.len(), "shape removed");
        Ok(shape)
    }

    /// Append a segment to the named shape's timeline.
    #[tracing::instrument(level = "debug", skip(self, segment))]
    pub fn add_animation(&mut self, name: &str, segment: Segment) -> KeymotionResult<()> {
        self.shape_mut(name)?.add_segment(segment)?;
        tracing::debug!(
            start = %segment.start().tick(),
            end = %segment.end().tick(),
            "segment added"
        );
        Ok(())
    }

    /// Create or patch the keyframe at `tick` on the named shape.
    #[tracing::instrument(level = "debug", skip(self, patch))]
    pub fn add_keyframe(
        &mut self,
        name: &str,
        tick: Tick,
        patch: KeyframePatch,
    ) -> KeymotionResult<()> {
        self.shape_mut(name)?.upsert_keyframe(tick, patch)?;
        tracing::debug!("keyframe upserted");
        Ok(())
    }

    /// Delete the keyframe at exactly `tick` from the named shape.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_animation(&mut self, name: &str, tick: Tick) -> KeymotionResult<Keyframe> {
        let removed = self.shape_mut(name)?.remove_keyframe(tick)?;
        tracing::debug!("keyframe removed");
        Ok(removed)
    }

    /// Copies of every shape, in registration order.
    pub fn shapes(&self) -> Vec<Shape> {
        self.shapes.values().cloned().collect()
    }

    /// Copy of the shape called `name`, if registered.
    pub fn shape(&self, name: &str) -> Option<Shape> {
        self.shapes.get(name).cloned()
    }

    /// Borrowing iterator over shapes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// For every shape in registration order, the bracket around `tick` or `None` when the shape
    /// has no state there.
    pub fn shapes_at_tick(&self, tick: Tick) -> Vec<Option<ShapeAtTick>> {
        self.iter().map(|s| s.at_tick(tick)).collect()
    }

    /// Interpolated pose of the named shape at `tick`.
    pub fn state_at(&self, name: &str, tick: Tick) -> KeymotionResult<Option<Keyframe>> {
        self.shapes
            .get(name)
            .map(|s| s.state_at(tick))
            .ok_or_else(|| no_such_shape(name))
    }

    /// Interpolated pose of every shape at `tick`, in registration order.
    pub fn states_at(&self, tick: Tick) -> Vec<(String, Option<Keyframe>)> {
        self.iter()
            .map(|s| (s.name().to_string(), s.state_at(tick)))
            .collect()
    }

    /// Latest keyframe tick across all shapes, zero when nothing is animated.
    pub fn end_tick(&self) -> Tick {
        self.iter()
            .filter_map(Shape::last_tick)
            .max()
            .unwrap_or(Tick(0))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn shape_mut(&mut self, name: &str) -> KeymotionResult<&mut Shape> {
        self.shapes.get_mut(name).ok_or_else(|| no_such_shape(name))
    }
}

fn validate_name(name: &str) -> KeymotionResult<()> {
    if name.is_empty() {
        return Err(KeymotionError::validation("shape name must not be empty"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(KeymotionError::validation(format!(
            "shape name {name:?} must not contain whitespace"
        )));
    }
    Ok(())
}

fn no_such_shape(name: &str) -> KeymotionError {
    KeymotionError::not_found(format!("no shape named '{name}'"))
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
