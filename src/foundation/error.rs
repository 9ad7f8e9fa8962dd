use crate::foundation::core::Tick;

/// Convenience result type used across keymotion.
pub type KeymotionResult<T> = Result<T, KeymotionError>;

/// Top-level error taxonomy used by model, timeline and encoder APIs.
///
/// Registry operations pass timeline failures through unchanged, so callers can tell
/// "no such shape" apart from "continuity violated".
#[derive(thiserror::Error, Debug)]
pub enum KeymotionError {
    /// A value type was constructed outside of its allowed range.
    #[error("range error: {0}")]
    Range(String),

    /// A segment ends before it starts.
    #[error("ordering error: end tick {end} is before start tick {start}")]
    Ordering {
        /// Segment start tick.
        start: Tick,
        /// Segment end tick.
        end: Tick,
    },

    /// A segment whose start and end keyframes are identical.
    #[error("degenerate segment: start and end at tick {tick} are identical")]
    DegenerateSegment {
        /// Tick shared by both endpoints.
        tick: Tick,
    },

    /// A segment does not start where the shape's timeline currently ends.
    #[error("continuity error: segment for '{shape}' does not start at its last keyframe (tick {tick})")]
    Continuity {
        /// Shape being animated.
        shape: String,
        /// Tick of the shape's current last keyframe.
        tick: Tick,
    },

    /// A brand-new keyframe was requested without position, dimensions and color.
    #[error("incomplete keyframe: new tick {tick} needs position, dimensions and color")]
    IncompleteKeyframe {
        /// Tick that does not exist yet.
        tick: Tick,
    },

    /// Unknown shape name or keyframe tick.
    #[error("not found: {0}")]
    NotFound(String),

    /// A shape with the same name is already registered.
    #[error("duplicate shape name '{0}'")]
    DuplicateName(String),

    /// Malformed statement in the text animation format.
    #[error("parse error on line {line}: {msg}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Human-readable description.
        msg: String,
    },

    /// Invalid options or identifiers supplied by a collaborator.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeymotionError {
    /// Build a [`KeymotionError::Range`] value.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Build a [`KeymotionError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`KeymotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeymotionError::Parse`] value.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            msg: msg.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
