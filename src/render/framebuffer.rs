//! Frame buffer view with clipped line drawing.
//!
//! Lines are trimmed to the buffer with [`clip`] before rasterization, so
//! Bresenham only ever walks pixels that are on screen. Coordinates use the
//! build-time [`Scalar`] width.

use image::{Rgba, RgbaImage};

use crate::clipper::{clip, ClipWindow, Scalar, Segment};

/// A view into an ARGB8888 color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel
/// access. This is a borrowed view, not an owning type.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// The window covering every pixel square, `[-0.5, w-0.5] x [-0.5, h-0.5]`.
    ///
    /// Pixel (x, y) is centered on integer coordinates, so anything that
    /// rounds onto a pixel lies inside. Empty buffers have no window.
    pub fn clip_window(&self) -> Option<ClipWindow<Scalar>> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(ClipWindow::new(
            -0.5,
            -0.5,
            self.width as Scalar - 0.5,
            self.height as Scalar - 0.5,
        ))
    }

    /// Set a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Draw the visible part of the line (x0, y0)-(x1, y1).
    ///
    /// Returns false when the line misses the buffer entirely and nothing
    /// was drawn.
    pub fn draw_line(&mut self, x0: Scalar, y0: Scalar, x1: Scalar, y1: Scalar, color: u32) -> bool {
        let Some(window) = self.clip_window() else {
            return false;
        };

        let segment = Segment::from_coords(x0, y0, x1, y1);
        let Some(visible) = clip(window, segment).segment() else {
            log::trace!("culled line ({x0}, {y0})-({x1}, {y1})");
            return false;
        };
        if visible != segment {
            log::trace!(
                "trimmed line ({x0}, {y0})-({x1}, {y1}) to ({}, {})-({}, {})",
                visible.start.x,
                visible.start.y,
                visible.end.x,
                visible.end.y
            );
        }

        let (x0, y0) = self.to_pixel(visible.start.x, visible.start.y);
        let (x1, y1) = self.to_pixel(visible.end.x, visible.end.y);
        self.draw_line_bresenham(x0, y0, x1, y1, color);
        true
    }

    /// Round a point inside `clip_window` to its pixel.
    ///
    /// Points on the outer half-pixel edges round away from the buffer, so
    /// the result is clamped back onto the border row or column.
    fn to_pixel(&self, x: Scalar, y: Scalar) -> (i32, i32) {
        (
            (x.round() as i32).clamp(0, self.width as i32 - 1),
            (y.round() as i32).clamp(0, self.height as i32 - 1),
        )
    }

    /// Bresenham's line algorithm on integer endpoints.
    fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Copy the buffer into an RGBA image, e.g. for saving to disk.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[(y * self.width + x) as usize];
            let [a, r, g, b] = argb.to_be_bytes();
            Rgba([r, g, b, a])
        })
    }
}
