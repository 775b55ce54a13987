use std::time::Duration;

use crate::coords::ViewportGeometry;
use crate::face::{FaceRenderer, FaceStyle};
use crate::scene::DrawList;
use crate::time::{TimeSample, TimeSampler, Ticker, hand_angles};

use super::RenderState;

/// Request for the host to call [`ClockFace::render_frame`] again.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RedrawRequest {
    /// Delay measured from the end of the frame that issued the request.
    pub after: Duration,
}

impl RedrawRequest {
    #[inline]
    pub const fn next_second() -> Self {
        Self { after: Ticker::DEFAULT_INTERVAL }
    }
}

/// An analog clock face driven by a host.
///
/// Single-threaded: exactly one host calls in, one frame at a time.
#[derive(Debug)]
pub struct ClockFace {
    sampler: TimeSampler,
    renderer: FaceRenderer,
    geometry: ViewportGeometry,
    last_sample: Option<TimeSample>,
}

impl ClockFace {
    pub fn new(sampler: TimeSampler, style: FaceStyle) -> Self {
        Self {
            sampler,
            renderer: FaceRenderer::new(style),
            geometry: ViewportGeometry::default(),
            last_sample: None,
        }
    }

    /// Host reports a new viewport size.
    pub fn on_geometry_changed(&mut self, width: f32, height: f32) -> ViewportGeometry {
        self.geometry = self.renderer.on_geometry_changed(width, height);
        self.geometry
    }

    /// Sample taken by the most recent frame.
    #[inline]
    pub fn last_sample(&self) -> Option<TimeSample> {
        self.last_sample
    }

    /// Replaces the contents of `list` with the current frame.
    ///
    /// Always asks for the next frame one second out, including when the
    /// viewport is degenerate and nothing was recorded.
    pub fn render_frame(&mut self, list: &mut DrawList) -> RedrawRequest {
        list.clear();

        let sample = self.sampler.sample_now();
        self.last_sample = Some(sample);

        let recorded = self.renderer.render_frame(self.geometry, hand_angles(sample), list);
        log::trace!(
            "frame {:02}:{:02}:{:02}, {recorded} commands",
            sample.hour,
            sample.minute,
            sample.second
        );

        RedrawRequest::next_second()
    }

    /// Checkpoint for host teardown.
    #[inline]
    pub fn save(&self) -> RenderState {
        RenderState::new(self.sampler.save())
    }

    /// Resumes from a checkpoint; the next frame shows the saved instant.
    pub fn restore(&mut self, state: RenderState) {
        log::debug!("restoring render state at {}", state.time);
        self.sampler.restore(state.time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;
    use crate::time::{FixedClock, Zone};
    use std::rc::Rc;

    // 2024-03-09T03:00:00Z
    const THREE_AM: i64 = 1_709_953_200_000;

    fn face_at(clock: &Rc<FixedClock>) -> ClockFace {
        ClockFace::new(TimeSampler::new(Rc::clone(clock), Zone::utc()), FaceStyle::default())
    }

    #[test]
    fn render_before_geometry_is_empty_but_still_reschedules() {
        let clock = Rc::new(FixedClock::new(THREE_AM));
        let mut face = face_at(&clock);
        let mut list = DrawList::new();

        assert_eq!(face.render_frame(&mut list), RedrawRequest::next_second());
        assert!(list.is_empty());
        assert_eq!(face.last_sample(), Some(TimeSample::new(3, 0, 0)));
    }

    #[test]
    fn redraw_request_is_one_second() {
        assert_eq!(RedrawRequest::next_second().after, Duration::from_millis(1000));
    }

    #[test]
    fn render_replaces_previous_frame() {
        let clock = Rc::new(FixedClock::new(THREE_AM));
        let mut face = face_at(&clock);
        let mut list = DrawList::new();

        let geometry = face.on_geometry_changed(300.0, 300.0);
        assert_eq!(geometry.radius, 135.0);

        face.render_frame(&mut list);
        face.render_frame(&mut list);
        assert_eq!(list.len(), 16);

        face.on_geometry_changed(0.0, 0.0);
        face.render_frame(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn each_frame_resamples_the_clock() {
        let clock = Rc::new(FixedClock::new(THREE_AM));
        let mut face = face_at(&clock);
        let mut list = DrawList::new();
        face.on_geometry_changed(300.0, 300.0);

        face.render_frame(&mut list);
        let DrawCmd::Line(first) = list.items()[15].cmd.clone() else {
            panic!("second hand missing");
        };

        clock.advance(15_000);
        face.render_frame(&mut list);
        let DrawCmd::Line(later) = list.items()[15].cmd.clone() else {
            panic!("second hand missing");
        };

        assert_eq!(face.last_sample(), Some(TimeSample::new(3, 0, 15)));
        assert_ne!(first.to, later.to);
    }

    #[test]
    fn save_and_restore_across_instances() {
        let clock = Rc::new(FixedClock::new(THREE_AM));
        let mut face = face_at(&clock);
        let mut list = DrawList::new();
        face.on_geometry_changed(300.0, 300.0);
        face.render_frame(&mut list);
        let state = face.save();
        assert_eq!(state, RenderState::new(THREE_AM));

        // Time moves on while the host is torn down.
        clock.advance(90_000);

        let mut revived = face_at(&clock);
        revived.on_geometry_changed(300.0, 300.0);
        revived.restore(state);

        let mut revived_list = DrawList::new();
        revived.render_frame(&mut revived_list);
        assert_eq!(revived.last_sample(), Some(TimeSample::new(3, 0, 0)));
        assert_eq!(revived_list.items(), list.items());

        revived.render_frame(&mut revived_list);
        assert_eq!(revived.last_sample(), Some(TimeSample::new(3, 1, 30)));
    }
}
