//! The axis-aligned clip rectangle.

use num_traits::Float;

use crate::error::{Axis, ClipError};
use crate::math::Vec2;

/// An axis-aligned clip rectangle, closed on all four edges.
///
/// [`clip`](super::clip) assumes `xmin <= xmax` and `ymin <= ymax` and does
/// not check it. Results for an inverted window are unspecified; build the
/// window with [`ClipWindow::try_new`] or [`ClipWindow::from_corners`] when
/// the bounds come from untrusted input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipWindow<T> {
    pub xmin: T,
    pub ymin: T,
    pub xmax: T,
    pub ymax: T,
}

impl<T> ClipWindow<T> {
    /// Creates a window from its bounds without validating them.
    pub const fn new(xmin: T, ymin: T, xmax: T, ymax: T) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }
}

impl<T: Float> ClipWindow<T> {
    /// Creates a window, rejecting NaN bounds and inverted axes.
    pub fn try_new(xmin: T, ymin: T, xmax: T, ymax: T) -> Result<Self, ClipError> {
        if xmin.is_nan() || ymin.is_nan() || xmax.is_nan() || ymax.is_nan() {
            log::debug!("rejecting clip window with NaN bound");
            return Err(ClipError::NotANumber);
        }
        check_axis(Axis::X, xmin, xmax)?;
        check_axis(Axis::Y, ymin, ymax)?;
        Ok(Self::new(xmin, ymin, xmax, ymax))
    }

    /// Creates the window spanned by two opposite corners, in any order.
    pub fn from_corners(a: Vec2<T>, b: Vec2<T>) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    pub fn width(&self) -> T {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> T {
        self.ymax - self.ymin
    }

    /// True when `xmin <= xmax` and `ymin <= ymax`.
    pub fn is_well_formed(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }

    /// Closed containment test: points on an edge are inside.
    pub fn contains(&self, point: Vec2<T>) -> bool {
        point.x >= self.xmin && point.x <= self.xmax && point.y >= self.ymin && point.y <= self.ymax
    }
}

fn check_axis<T: Float>(axis: Axis, min: T, max: T) -> Result<(), ClipError> {
    if min > max {
        log::debug!("rejecting clip window inverted on the {} axis", axis);
        return Err(ClipError::InvertedBounds {
            axis,
            min: min.to_f64().unwrap_or(f64::NAN),
            max: max.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_degenerate_window() {
        let window = ClipWindow::try_new(5.0_f32, 5.0, 5.0, 5.0).unwrap();
        assert!(window.contains(Vec2::new(5.0, 5.0)));
        assert_eq!(window.width(), 0.0);
        assert_eq!(window.height(), 0.0);
    }

    #[test]
    fn test_try_new_rejects_inverted_x() {
        let err = ClipWindow::try_new(10.0_f64, 0.0, 0.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            ClipError::InvertedBounds {
                axis: Axis::X,
                min: 10.0,
                max: 0.0
            }
        );
    }

    #[test]
    fn test_try_new_rejects_inverted_y() {
        let err = ClipWindow::try_new(0.0_f32, 3.0, 1.0, 2.0).unwrap_err();
        assert!(matches!(err, ClipError::InvertedBounds { axis: Axis::Y, .. }));
        assert_eq!(
            err.to_string(),
            "inverted clip window on the y axis: min 3 > max 2"
        );
    }

    #[test]
    fn test_try_new_rejects_nan() {
        let err = ClipWindow::try_new(0.0_f32, f32::NAN, 1.0, 1.0).unwrap_err();
        assert_eq!(err, ClipError::NotANumber);
    }

    #[test]
    fn test_from_corners_normalizes() {
        let window = ClipWindow::from_corners(Vec2::new(500.0_f32, 100.0), Vec2::new(100.0, 500.0));
        assert_eq!(window, ClipWindow::new(100.0, 100.0, 500.0, 500.0));
        assert!(window.is_well_formed());
    }

    #[test]
    fn test_contains_is_closed() {
        let window = ClipWindow::new(100.0_f64, 100.0, 500.0, 500.0);
        assert!(window.contains(Vec2::new(100.0, 500.0)));
        assert!(window.contains(Vec2::new(300.0, 300.0)));
        assert!(!window.contains(Vec2::new(99.9, 300.0)));
        assert!(!window.contains(Vec2::new(300.0, 500.1)));
    }

    #[test]
    fn test_inverted_window_is_not_well_formed() {
        assert!(!ClipWindow::new(1.0_f32, 0.0, 0.0, 1.0).is_well_formed());
    }
}
