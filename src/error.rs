//! Errors reported when building a clip window with validation.
//!
//! Clipping itself cannot fail; the only fallible operation is
//! [`ClipWindow::try_new`](crate::clipper::ClipWindow::try_new).

use thiserror::Error;

/// The axis on which a window bound was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClipError {
    /// The minimum bound is greater than the maximum bound.
    #[error("inverted clip window on the {axis} axis: min {min} > max {max}")]
    InvertedBounds { axis: Axis, min: f64, max: f64 },

    #[error("clip window bound is NaN")]
    NotANumber,
}
