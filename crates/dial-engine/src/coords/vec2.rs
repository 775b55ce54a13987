use core::ops::Sub;

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `distance` from `self` in direction `angle` (radians, +X = 0).
    ///
    /// Trigonometry runs in `f64`; only the final position is narrowed.
    #[inline]
    pub fn polar_offset(self, angle: f64, distance: f32) -> Self {
        let d = f64::from(distance);
        Vec2::new(
            (f64::from(self.x) + angle.cos() * d) as f32,
            (f64::from(self.y) + angle.sin() * d) as f32,
        )
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
