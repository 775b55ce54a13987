//! Paint model shared between the face renderer and hosts.
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;

/// Stroke applied along an outline or a line segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Width in logical pixels, centered on the path.
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
