//! Pixel output for clipped segments.

mod framebuffer;

pub use framebuffer::FrameBuffer;
