//! Directed line segments and the clipper's result record.

use num_traits::Float;

use crate::math::Vec2;

/// A line segment directed from `start` to `end`.
///
/// Parametrically `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment<T> {
    pub start: Vec2<T>,
    pub end: Vec2<T>,
}

impl<T> Segment<T> {
    pub const fn new(start: Vec2<T>, end: Vec2<T>) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }
}

impl<T: Float> Segment<T> {
    /// The direction vector `end - start`.
    pub fn delta(&self) -> Vec2<T> {
        self.end - self.start
    }

    /// Evaluates the parametric form at `t`.
    pub fn point_at(&self, t: T) -> Vec2<T> {
        self.start.lerp(self.end, t)
    }

    /// The same segment traversed from `end` to `start`.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

/// Outcome of clipping a segment against a window.
///
/// When `inside` is false the coordinate fields are zero and carry no
/// meaning. When it is true, `(xn1, yn1)-(xn2, yn2)` is the visible part of
/// the input, in the input's direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipResult<T> {
    pub inside: bool,
    pub xn1: T,
    pub yn1: T,
    pub xn2: T,
    pub yn2: T,
}

impl<T: Float> ClipResult<T> {
    /// The "no visible portion" result.
    pub fn outside() -> Self {
        Self {
            inside: false,
            xn1: T::zero(),
            yn1: T::zero(),
            xn2: T::zero(),
            yn2: T::zero(),
        }
    }

    pub fn visible(start: Vec2<T>, end: Vec2<T>) -> Self {
        Self {
            inside: true,
            xn1: start.x,
            yn1: start.y,
            xn2: end.x,
            yn2: end.y,
        }
    }

    /// The clipped segment, or `None` when nothing is visible.
    pub fn segment(&self) -> Option<Segment<T>> {
        self.inside
            .then(|| Segment::from_coords(self.xn1, self.yn1, self.xn2, self.yn2))
    }
}

impl<T: Float> From<ClipResult<T>> for Option<Segment<T>> {
    fn from(result: ClipResult<T>) -> Self {
        result.segment()
    }
}
