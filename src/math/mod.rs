//! Small vector types shared by the clipper and the framebuffer.

pub mod vec2;

pub use vec2::Vec2;
