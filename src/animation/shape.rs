use std::{fmt, str::FromStr};

use crate::{
    animation::{
        keyframe::{Keyframe, KeyframePatch, Segment},
        lerp::{Lerp, Weights},
    },
    foundation::{
        core::Tick,
        error::{KeymotionError, KeymotionResult},
    },
};

/// Closed set of drawable shape kinds. The kind only affects serialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    /// Name used by the text format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = KeymotionError;

    fn from_str(s: &str) -> KeymotionResult<Self> {
        match s {
            "rectangle" => Ok(Self::Rectangle),
            "ellipse" => Ok(Self::Ellipse),
            other => Err(KeymotionError::validation(format!(
                "unknown shape kind '{other}' (expected 'rectangle' or 'ellipse')"
            ))),
        }
    }
}

/// A named shape and its timeline.
///
/// Keyframes are kept sorted strictly ascending by tick. Every mutation validates first and only
/// then touches the sequence, so a failed call leaves the timeline exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Shape {
    name: String,
    kind: ShapeKind,
    keyframes: Vec<Keyframe>,
}

impl Shape {
    /// Create a shape with an empty timeline.
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            keyframes: Vec::new(),
        }
    }

    pub fn rectangle(name: impl Into<String>) -> Self {
        Self::new(name, ShapeKind::Rectangle)
    }

    pub fn ellipse(name: impl Into<String>) -> Self {
        Self::new(name, ShapeKind::Ellipse)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Keyframes in ascending tick order.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn first_tick(&self) -> Option<Tick> {
        self.keyframes.first().map(Keyframe::tick)
    }

    pub fn last_tick(&self) -> Option<Tick> {
        self.keyframes.last().map(Keyframe::tick)
    }

    /// Append a two-endpoint segment.
    ///
    /// On an empty timeline both endpoints are inserted. Otherwise the segment must start at the
    /// current last keyframe and only its end is appended. A zero-length segment replaces the pose
    /// at its tick instead of duplicating the tick.
    pub fn add_segment(&mut self, segment: Segment) -> KeymotionResult<()> {
        let start = *segment.start();
        let end = *segment.end();

        match self.keyframes.last_mut() {
            None => {
                if start.tick() < end.tick() {
                    self.keyframes.push(start);
                }
                self.keyframes.push(end);
            }
            Some(last) => {
                if *last != start {
                    return Err(KeymotionError::Continuity {
                        shape: self.name.clone(),
                        tick: last.tick(),
                    });
                }
                if end.tick() == last.tick() {
                    *last = end;
                } else {
                    self.keyframes.push(end);
                }
            }
        }

        tracing::trace!(shape = %self.name, start = %start.tick(), end = %end.tick(), "segment added");
        Ok(())
    }

    /// Create the keyframe at `tick`, or patch it if the tick already exists.
    ///
    /// A new tick needs a complete patch ([`KeymotionError::IncompleteKeyframe`] otherwise).
    pub fn upsert_keyframe(&mut self, tick: Tick, patch: KeyframePatch) -> KeymotionResult<()> {
        match self.search(tick) {
            Ok(idx) => self.keyframes[idx].apply(&patch),
            Err(idx) => {
                let kf = patch.into_keyframe(tick)?;
                self.keyframes.insert(idx, kf);
            }
        }
        Ok(())
    }

    /// Remove and return the keyframe at exactly `tick`.
    pub fn remove_keyframe(&mut self, tick: Tick) -> KeymotionResult<Keyframe> {
        match self.search(tick) {
            Ok(idx) => Ok(self.keyframes.remove(idx)),
            Err(_) => Err(KeymotionError::not_found(format!(
                "shape '{}' has no keyframe at tick {tick}",
                self.name
            ))),
        }
    }

    /// Floor and ceiling keyframes around `tick`, or `None` outside of `[first, last]`.
    pub fn bracket(&self, tick: Tick) -> Option<Bracket> {
        let first = self.first_tick()?;
        let last = self.last_tick()?;
        if tick < first || tick > last {
            return None;
        }

        match self.search(tick) {
            Ok(idx) => self.keyframes.get(idx).copied().map(Bracket::Exact),
            Err(idx) => {
                let floor = *self.keyframes.get(idx.checked_sub(1)?)?;
                let ceil = *self.keyframes.get(idx)?;
                Some(Bracket::Between { floor, ceil })
            }
        }
    }

    /// Interpolated pose at `tick`, or `None` outside of the timeline.
    pub fn state_at(&self, tick: Tick) -> Option<Keyframe> {
        self.bracket(tick)?.interpolate(tick)
    }

    /// Minimal view of this shape carrying only the bracket around `tick`.
    pub fn at_tick(&self, tick: Tick) -> Option<ShapeAtTick> {
        Some(ShapeAtTick {
            name: self.name.clone(),
            kind: self.kind,
            tick,
            bracket: self.bracket(tick)?,
        })
    }

    fn search(&self, tick: Tick) -> Result<usize, usize> {
        self.keyframes.binary_search_by_key(&tick, Keyframe::tick)
    }
}

/// The keyframes bounding a query tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bracket {
    /// The tick lands on this keyframe.
    Exact(Keyframe),
    /// The tick lies strictly between two consecutive keyframes.
    Between { floor: Keyframe, ceil: Keyframe },
}

impl Bracket {
    pub fn floor(&self) -> &Keyframe {
        match self {
            Self::Exact(kf) => kf,
            Self::Between { floor, .. } => floor,
        }
    }

    pub fn ceil(&self) -> &Keyframe {
        match self {
            Self::Exact(kf) => kf,
            Self::Between { ceil, .. } => ceil,
        }
    }

    /// One keyframe for an exact hit, two otherwise.
    pub fn keyframes(&self) -> Vec<Keyframe> {
        match *self {
            Self::Exact(kf) => vec![kf],
            Self::Between { floor, ceil } => vec![floor, ceil],
        }
    }

    /// Linearly interpolate every attribute at `tick`.
    ///
    /// An exact bracket returns its keyframe unchanged. `None` if `tick` lies outside of a
    /// two-keyframe bracket.
    pub fn interpolate(&self, tick: Tick) -> Option<Keyframe> {
        match self {
            Self::Exact(kf) => Some(*kf),
            Self::Between { floor, ceil } => {
                let w = Weights::new(floor.tick(), ceil.tick(), tick)?;
                Some(Keyframe::new(
                    tick,
                    Lerp::lerp(&floor.position(), &ceil.position(), w),
                    Lerp::lerp(&floor.dimensions(), &ceil.dimensions(), w),
                    Lerp::lerp(&floor.color(), &ceil.color(), w),
                ))
            }
        }
    }
}

/// A shape reduced to the bracket around one tick, as handed to rendering collaborators.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ShapeAtTick {
    pub name: String,
    pub kind: ShapeKind,
    pub tick: Tick,
    pub bracket: Bracket,
}

impl ShapeAtTick {
    /// Interpolated pose at [`ShapeAtTick::tick`].
    pub fn state(&self) -> Option<Keyframe> {
        self.bracket.interpolate(self.tick)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/shape.rs"]
mod tests;
