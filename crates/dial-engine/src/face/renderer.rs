use std::f64::consts::{FRAC_PI_2, PI};

use crate::coords::ViewportGeometry;
use crate::scene::{DrawList, ZIndex};
use crate::time::HandAngles;

use super::FaceStyle;

/// Labels sit inside the dial, three quarters of the way out.
const LABEL_RADIUS: f32 = 0.75;

/// Label text size as a fraction of the dial radius.
const TEXT_SIZE: f32 = 0.25;

/// The three hands, in the order they are painted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    /// Hand length as a fraction of the dial radius.
    #[inline]
    pub const fn length(self) -> f32 {
        match self {
            Hand::Hour => 0.5,
            Hand::Minute => 0.8,
            Hand::Second => 0.9,
        }
    }

    #[inline]
    pub fn angle(self, angles: &HandAngles) -> f64 {
        match self {
            Hand::Hour => angles.hour_angle,
            Hand::Minute => angles.minute_angle,
            Hand::Second => angles.second_angle,
        }
    }
}

/// Text shown at hour mark `i` (1..=12).
pub fn hour_label(i: u32) -> String {
    if i == 12 { "12".to_string() } else { (i % 12).to_string() }
}

/// Records the dial for one frame.
#[derive(Debug, Clone, Default)]
pub struct FaceRenderer {
    style: FaceStyle,
}

impl FaceRenderer {
    pub fn new(style: FaceStyle) -> Self {
        Self { style }
    }

    /// Recomputes viewport geometry after the host reports a new size.
    pub fn on_geometry_changed(&self, width: f32, height: f32) -> ViewportGeometry {
        let geometry = ViewportGeometry::from_size(width, height);
        if geometry.is_degenerate() {
            log::debug!("degenerate viewport {width}x{height}; frames will be empty");
        } else {
            log::debug!(
                "viewport {width}x{height}: center ({}, {}), radius {}",
                geometry.center_x,
                geometry.center_y,
                geometry.radius
            );
        }
        geometry
    }

    /// Appends the dial, hour labels and hands to `list`, back to front.
    ///
    /// Returns the number of commands recorded; a degenerate geometry records
    /// none.
    pub fn render_frame(
        &self,
        geometry: ViewportGeometry,
        angles: HandAngles,
        list: &mut DrawList,
    ) -> usize {
        if geometry.is_degenerate() {
            return 0;
        }

        let before = list.len();
        self.record_face(geometry, list);
        self.record_hands(geometry, &angles, list);
        list.len() - before
    }

    fn record_face(&self, geometry: ViewportGeometry, list: &mut DrawList) {
        let center = geometry.center();
        let text_size = geometry.radius * TEXT_SIZE;

        list.push_stroked_circle(
            ZIndex::FACE,
            center,
            geometry.radius,
            self.style.stroke(),
            text_size,
        );

        let label_radius = geometry.radius * LABEL_RADIUS;
        for i in 1..=12u32 {
            // Offset by three marks so "12" lands at the top instead of the +X axis.
            let angle = PI / 6.0 * (f64::from(i) - 3.0);
            let origin = center.polar_offset(angle, label_radius);
            list.push_text(ZIndex::FACE, hour_label(i), text_size, self.style.ink, origin);
        }
    }

    fn record_hands(&self, geometry: ViewportGeometry, angles: &HandAngles, list: &mut DrawList) {
        let center = geometry.center();
        for hand in Hand::ALL {
            // Hand angles are 12-o'clock based; screen angles are +X based.
            let tip = center.polar_offset(hand.angle(angles) - FRAC_PI_2, geometry.radius * hand.length());
            list.push_line(ZIndex::HANDS, center, tip, self.style.stroke());
        }
    }
}
