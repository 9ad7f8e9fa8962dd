use std::fmt;

use crate::foundation::error::{KeymotionError, KeymotionResult};

/// Discrete position on the animation timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Tick(pub u64);

impl Tick {
    /// Convert a signed tick (as found in text input) into a [`Tick`].
    pub fn new(value: i64) -> KeymotionResult<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| KeymotionError::range(format!("tick must be >= 0, got {value}")))
    }

    /// Number of ticks from `self` up to `later`, zero if `later` is not after `self`.
    pub fn span_to(self, later: Tick) -> u64 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Viewport of the animation. The origin may be negative, so no field is constrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Canvas {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Opaque RGB color, every channel in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawColor")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(serde::Deserialize)]
struct RawColor {
    r: i32,
    g: i32,
    b: i32,
}

impl TryFrom<RawColor> for Color {
    type Error = KeymotionError;

    fn try_from(raw: RawColor) -> KeymotionResult<Self> {
        Self::new(raw.r, raw.g, raw.b)
    }
}

impl Color {
    pub fn new(r: i32, g: i32, b: i32) -> KeymotionResult<Self> {
        fn channel(name: &str, v: i32) -> KeymotionResult<u8> {
            u8::try_from(v).map_err(|_| {
                KeymotionError::range(format!("color channel {name} must be in [0, 255], got {v}"))
            })
        }

        Ok(Self {
            r: channel("r", r)?,
            g: channel("g", g)?,
            b: channel("b", b)?,
        })
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn r(self) -> u8 {
        self.r
    }

    pub fn g(self) -> u8 {
        self.g
    }

    pub fn b(self) -> u8 {
        self.b
    }
}

/// Formats as the CSS functional notation `rgb(r,g,b)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Width and height of a shape, both strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    width: u32,
    height: u32,
}

#[derive(serde::Deserialize)]
struct RawDimensions {
    width: i32,
    height: i32,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = KeymotionError;

    fn try_from(raw: RawDimensions) -> KeymotionResult<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl Dimensions {
    pub fn new(width: i32, height: i32) -> KeymotionResult<Self> {
        fn side(name: &str, v: i32) -> KeymotionResult<u32> {
            match u32::try_from(v) {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(KeymotionError::range(format!("{name} must be > 0, got {v}"))),
            }
        }

        Ok(Self {
            width: side("width", width)?,
            height: side("height", height)?,
        })
    }

    /// Round interpolated sides to the nearest integer, never below 1.
    pub(crate) fn from_interpolated(width: f64, height: f64) -> Self {
        fn side(v: f64) -> u32 {
            v.round().clamp(1.0, f64::from(u32::MAX)) as u32
        }

        Self {
            width: side(width),
            height: side(height),
        }
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }
}

/// Top-left (rectangle) or center (ellipse) coordinate of a shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
