use crate::paint::{Color, Stroke};

/// Ink used for the dial, labels and hands.
///
/// The face draws everything with a single stroke, the way a pen plotter would.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceStyle {
    /// Stroke width in the same units as the viewport.
    pub stroke_width: f32,
    pub ink: Color,
}

impl FaceStyle {
    #[inline]
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width, self.ink)
    }
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            stroke_width: 8.0,
            ink: Color::black(),
        }
    }
}
