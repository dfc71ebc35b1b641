//! Liang-Barsky line clipping against an axis-aligned rectangle.
//!
//! The core is a single pure function, [`clip`], that trims a directed 2D
//! segment to the part lying inside a closed clip window. It is generic over
//! the float width, so `f32` and `f64` callers share one implementation.
//!
//! # Quick Start
//!
//! ```
//! use liang_barsky::prelude::*;
//!
//! let window = ClipWindow::new(100.0_f64, 100.0, 500.0, 500.0);
//! let result = clip(window, Segment::from_coords(100.0, 50.0, 100.0, 550.0));
//! assert!(result.inside);
//! assert_eq!(result.segment(), Some(Segment::from_coords(100.0, 100.0, 100.0, 500.0)));
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod error;
pub mod math;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{clip, clip_coords, ClipResult, ClipWindow, Scalar, Segment};
pub use error::{Axis, ClipError};
pub use math::Vec2;
pub use render::FrameBuffer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use liang_barsky::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{clip, clip_coords, ClipResult, ClipWindow, Scalar, Segment};

    // Errors
    pub use crate::error::ClipError;

    // Math
    pub use crate::math::vec2::Vec2;

    // Rendering
    pub use crate::render::FrameBuffer;
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::clipper::{clip, ClipWindow, Scalar, Segment};
    pub use crate::render::FrameBuffer;
}
