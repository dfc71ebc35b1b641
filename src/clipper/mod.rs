//! Line segment clipping against an axis-aligned window.
//!
//! [`clip`] trims a directed segment to the part inside a closed rectangle
//! using the parametric Liang-Barsky method. It is a pure function: no
//! allocation, no shared state, safe to call from any number of threads.
//!
//! The algorithm is generic over [`num_traits::Float`], so both precisions
//! come from one implementation. [`Scalar`] names the width picked for the
//! build (`f32`, or `f64` with the `f64` cargo feature).

mod liang_barsky;
mod segment;
mod window;

pub use liang_barsky::{clip, clip_coords};
pub use segment::{ClipResult, Segment};
pub use window::ClipWindow;

/// The scalar width selected at build time.
#[cfg(not(feature = "f64"))]
pub type Scalar = f32;

/// The scalar width selected at build time.
#[cfg(feature = "f64")]
pub type Scalar = f64;
