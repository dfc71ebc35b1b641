//! Parametric (Liang-Barsky) clipping of a segment against a rectangle.
//!
//! Each of the four window edges gives an inequality `t * p <= q` on the
//! segment parameter:
//!
//! ```text
//! left:   -dx * t <= x1 - xmin
//! right:   dx * t <= xmax - x1
//! bottom: -dy * t <= y1 - ymin
//! top:     dy * t <= ymax - y1
//! ```
//!
//! The visible part is the range of `t` in `[0, 1]` that satisfies all four.

use num_traits::Float;

use super::segment::{ClipResult, Segment};
use super::window::ClipWindow;
use crate::math::Vec2;

/// One edge inequality `t * p <= q`.
#[derive(Clone, Copy)]
struct Boundary<T> {
    p: T,
    q: T,
}

impl<T: Float> Boundary<T> {
    /// Parallel to this edge and on its outer side.
    fn rejects(self) -> bool {
        self.p == T::zero() && self.q < T::zero()
    }
}

/// Clips `segment` against the closed rectangle `window`.
///
/// Touching an edge counts as inside, and a zero-length segment is inside
/// exactly when its point is. The window must satisfy `xmin <= xmax` and
/// `ymin <= ymax`; this is not checked.
///
/// # Example
/// ```
/// use liang_barsky::{clip, ClipWindow, Segment};
///
/// let window = ClipWindow::new(100.0_f32, 100.0, 500.0, 500.0);
/// let result = clip(window, Segment::from_coords(50.0, 50.0, 650.0, 650.0));
/// assert!(result.inside);
/// assert_eq!((result.xn1, result.yn1), (100.0, 100.0));
/// assert_eq!((result.xn2, result.yn2), (500.0, 500.0));
/// ```
pub fn clip<T: Float>(window: ClipWindow<T>, segment: Segment<T>) -> ClipResult<T> {
    let Segment { start, .. } = segment;
    let delta = segment.delta();

    let left = Boundary {
        p: -delta.x,
        q: start.x - window.xmin,
    };
    let right = Boundary {
        p: delta.x,
        q: window.xmax - start.x,
    };
    let bottom = Boundary {
        p: -delta.y,
        q: start.y - window.ymin,
    };
    let top = Boundary {
        p: delta.y,
        q: window.ymax - start.y,
    };

    if left.rejects() || right.rejects() || bottom.rejects() || top.rejects() {
        return ClipResult::outside();
    }

    let mut rn1 = T::zero();
    let mut rn2 = T::one();
    narrow(&mut rn1, &mut rn2, left, right);
    narrow(&mut rn1, &mut rn2, bottom, top);

    if rn1 > rn2 {
        return ClipResult::outside();
    }

    ClipResult::visible(
        Vec2::new(start.x + delta.x * rn1, start.y + delta.y * rn1),
        Vec2::new(start.x + delta.x * rn2, start.y + delta.y * rn2),
    )
}

/// Clips the segment `(x1, y1)-(x2, y2)` against `[xmin, xmax] x [ymin, ymax]`.
#[allow(clippy::too_many_arguments)]
pub fn clip_coords<T: Float>(
    xmin: T,
    ymin: T,
    xmax: T,
    ymax: T,
    x1: T,
    y1: T,
    x2: T,
    y2: T,
) -> ClipResult<T> {
    clip(
        ClipWindow::new(xmin, ymin, xmax, ymax),
        Segment::from_coords(x1, y1, x2, y2),
    )
}

/// Tightens `[rn1, rn2]` with the two opposite edges of one axis.
///
/// `near` and `far` have opposite `p`. With `near.p < 0` the segment enters
/// through `near` and leaves through `far`; otherwise the roles swap.
fn narrow<T: Float>(rn1: &mut T, rn2: &mut T, near: Boundary<T>, far: Boundary<T>) {
    if near.p == T::zero() {
        return;
    }

    let r1 = near.q / near.p;
    let r2 = far.q / far.p;
    let (enter, exit) = if near.p < T::zero() { (r1, r2) } else { (r2, r1) };

    if enter > *rn1 {
        *rn1 = enter;
    }
    if exit < *rn2 {
        *rn2 = exit;
    }
}
