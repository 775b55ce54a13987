use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Outlined circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub stroke: Stroke,
    /// Mirrors the text size set on the dial's paint. Each label carries its own
    /// size, so hosts can ignore this field.
    pub text_size: f32,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, stroke: Stroke, text_size: f32) -> Self {
        Self { center, radius, stroke, text_size }
    }
}

impl DrawList {
    /// Records a stroke-only circle.
    #[inline]
    pub fn push_stroked_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        stroke: Stroke,
        text_size: f32,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, stroke, text_size)));
    }
}
