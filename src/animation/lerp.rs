use crate::foundation::core::{Color, Dimensions, Position, Tick};

/// Tick distances used to weigh the floor and ceiling keyframes at a query tick.
///
/// `value = floor * before / total + ceil * after / total`, where `before = ceil - tick`,
/// `after = tick - floor` and `total = ceil - floor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    before: u64,
    after: u64,
    total: u64,
}

impl Weights {
    /// Weights for `tick` inside `[floor, ceil]`; `None` when the bracket is empty or the tick
    /// lies outside of it.
    pub fn new(floor: Tick, ceil: Tick, tick: Tick) -> Option<Self> {
        if floor >= ceil || tick < floor || tick > ceil {
            return None;
        }
        Some(Self {
            before: tick.span_to(ceil),
            after: floor.span_to(tick),
            total: floor.span_to(ceil),
        })
    }

    /// Blend two integer samples exactly, before any rounding.
    pub fn blend(self, a: i64, b: i64) -> f64 {
        let num = i128::from(a) * i128::from(self.before) + i128::from(b) * i128::from(self.after);
        num as f64 / self.total as f64
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, w: Weights) -> Self;
}

impl Lerp for Position {
    // Truncates toward zero.
    fn lerp(a: &Self, b: &Self, w: Weights) -> Self {
        fn coord(a: i32, b: i32, w: Weights) -> i32 {
            w.blend(i64::from(a), i64::from(b))
                .trunc()
                .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
        }

        Position::new(coord(a.x, b.x, w), coord(a.y, b.y, w))
    }
}

impl Lerp for Dimensions {
    fn lerp(a: &Self, b: &Self, w: Weights) -> Self {
        Dimensions::from_interpolated(
            w.blend(i64::from(a.width()), i64::from(b.width())),
            w.blend(i64::from(a.height()), i64::from(b.height())),
        )
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, w: Weights) -> Self {
        fn lerp_u8(a: u8, b: u8, w: Weights) -> u8 {
            w.blend(i64::from(a), i64::from(b)).round().clamp(0.0, 255.0) as u8
        }

        Color::rgb(
            lerp_u8(a.r(), b.r(), w),
            lerp_u8(a.g(), b.g(), w),
            lerp_u8(a.b(), b.b(), w),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
