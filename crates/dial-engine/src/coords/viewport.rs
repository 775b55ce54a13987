use super::Vec2;

/// Fraction of the half-side the dial occupies, leaving a margin for the stroke.
const DIAL_FILL: f32 = 0.9;

/// Derived geometry of the square viewport the face is drawn into.
///
/// Invariants:
/// - `radius >= 0.0`; it is `0.0` exactly when the viewport is degenerate
/// - only rebuilt on size changes, never per frame
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ViewportGeometry {
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

impl ViewportGeometry {
    /// Computes center and dial radius for a `width` × `height` viewport.
    ///
    /// Zero, negative, or non-finite sizes produce a zero radius so the renderer
    /// records an empty frame instead of failing.
    pub fn from_size(width: f32, height: f32) -> Self {
        if !is_usable(width) || !is_usable(height) {
            return Self {
                width,
                height,
                center_x: 0.0,
                center_y: 0.0,
                radius: 0.0,
            };
        }

        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius: (width.min(height) / 2.0) * DIAL_FILL,
        }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.center_x, self.center_y)
    }

    /// `true` when there is nothing to draw.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.radius <= 0.0
    }
}

/// Side length of the square a host should allocate for `width` × `height`.
///
/// Hosts that negotiate layout call this before reporting a size change so the
/// face always gets a square viewport.
#[inline]
pub fn square_side(width: f32, height: f32) -> f32 {
    width.min(height).max(0.0)
}

#[inline]
fn is_usable(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_300_has_center_150_radius_135() {
        let g = ViewportGeometry::from_size(300.0, 300.0);
        assert_eq!(g.center_x, 150.0);
        assert_eq!(g.center_y, 150.0);
        assert_eq!(g.radius, 135.0);
    }

    #[test]
    fn radius_follows_shorter_side() {
        let g = ViewportGeometry::from_size(400.0, 200.0);
        assert_eq!(g.center(), Vec2::new(200.0, 100.0));
        assert_eq!(g.radius, 90.0);
    }

    #[test]
    fn zero_size_is_degenerate() {
        assert!(ViewportGeometry::from_size(0.0, 300.0).is_degenerate());
        assert!(ViewportGeometry::from_size(300.0, 0.0).is_degenerate());
    }

    #[test]
    fn negative_and_nan_sizes_are_degenerate() {
        assert!(ViewportGeometry::from_size(-10.0, 50.0).is_degenerate());
        assert!(ViewportGeometry::from_size(f32::NAN, 50.0).is_degenerate());
        assert!(ViewportGeometry::from_size(f32::INFINITY, 50.0).is_degenerate());
    }

    #[test]
    fn default_geometry_is_degenerate() {
        assert!(ViewportGeometry::default().is_degenerate());
    }

    #[test]
    fn square_side_picks_min_and_clamps() {
        assert_eq!(square_side(640.0, 480.0), 480.0);
        assert_eq!(square_side(-5.0, 480.0), 0.0);
    }
}
