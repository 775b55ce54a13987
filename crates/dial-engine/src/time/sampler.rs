use std::f64::consts::PI;

use chrono::{DateTime, FixedOffset, Local, Offset, Timelike, Utc};

use super::ClockSource;

/// Wall-clock reading decomposed for the dial.
///
/// Ranges: `hour` 0–23, `minute` 0–59, `second` 0–59.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TimeSample {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeSample {
    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }

    fn from_time<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

/// Hand angles in radians, measured clockwise from 12 o'clock.
///
/// A full turn is `2π`. Renderers subtract `π/2` to convert to the +X-based
/// screen convention.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HandAngles {
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
}

impl From<TimeSample> for HandAngles {
    fn from(sample: TimeSample) -> Self {
        hand_angles(sample)
    }
}

/// Maps a time sample onto hand angles.
///
/// Minute and hour hands carry the next-finer unit so they sweep instead of
/// jumping. `hour` stays on the 24-hour scale; hours `h` and `h + 12` differ by
/// exactly one turn and point the same way on the face.
pub fn hand_angles(sample: TimeSample) -> HandAngles {
    let hour = f64::from(sample.hour);
    let minute = f64::from(sample.minute);
    let second = f64::from(sample.second);

    HandAngles {
        hour_angle: PI * (hour + minute / 60.0) / 6.0,
        minute_angle: PI * (minute + second / 60.0) / 30.0,
        second_angle: PI * second / 30.0,
    }
}

/// Time zone used to decompose instants.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Zone {
    /// The process's local time zone.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// Fixed offset east of UTC. `None` when the offset is a day or more.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Zone::Fixed)
    }

    fn decompose(self, millis: i64) -> TimeSample {
        // Instants chrono cannot represent fall back to the epoch.
        let utc: DateTime<Utc> = DateTime::from_timestamp_millis(millis).unwrap_or_default();

        match self {
            Zone::Local => TimeSample::from_time(&utc.with_timezone(&Local)),
            Zone::Fixed(offset) => TimeSample::from_time(&utc.with_timezone(&offset)),
        }
    }
}

/// Reads the clock once per frame and remembers the instant it used.
///
/// The remembered instant is what [`save`](Self::save) hands to the host before
/// teardown. After [`restore`](Self::restore) the next sample reuses that
/// instant once; every later sample goes back to the clock source.
#[derive(Debug)]
pub struct TimeSampler {
    source: Box<dyn ClockSource>,
    zone: Zone,
    current_millis: i64,
    restored: Option<i64>,
}

impl TimeSampler {
    pub fn new(source: impl ClockSource + 'static, zone: Zone) -> Self {
        let current_millis = source.now_millis();
        Self {
            source: Box::new(source),
            zone,
            current_millis,
            restored: None,
        }
    }

    /// Takes a fresh sample.
    pub fn sample_now(&mut self) -> TimeSample {
        let millis = match self.restored.take() {
            Some(saved) => {
                log::debug!("sampling restored instant {saved}");
                saved
            }
            None => self.source.now_millis(),
        };

        self.current_millis = millis;
        self.zone.decompose(millis)
    }

    /// Instant of the most recent sample, in epoch milliseconds.
    #[inline]
    pub fn save(&self) -> i64 {
        self.current_millis
    }

    /// Pins the next sample to `millis`.
    pub fn restore(&mut self, millis: i64) {
        self.current_millis = millis;
        self.restored = Some(millis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use std::f64::consts::{FRAC_PI_2, TAU};
    use std::rc::Rc;

    const EPS: f64 = 1e-12;

    // 2024-03-09T15:42:07Z
    const T0: i64 = 1_709_998_927_000;

    fn utc_sampler(clock: &Rc<FixedClock>) -> TimeSampler {
        TimeSampler::new(Rc::clone(clock), Zone::utc())
    }

    // ── hand_angles ───────────────────────────────────────────────────────

    #[test]
    fn second_angle_is_pi_times_second_over_30() {
        for s in 0..60 {
            let a = hand_angles(TimeSample::new(0, 0, s));
            assert!((a.second_angle - PI * f64::from(s) / 30.0).abs() < EPS);
        }
    }

    #[test]
    fn second_angle_increases_then_wraps() {
        let mut prev = -1.0;
        for s in 0..60 {
            let a = hand_angles(TimeSample::new(0, 0, s)).second_angle;
            assert!(a > prev);
            prev = a;
        }
        assert!(prev < TAU);
        assert_eq!(hand_angles(TimeSample::new(0, 0, 0)).second_angle, 0.0);
    }

    #[test]
    fn minute_angle_sweeps_within_a_minute() {
        for m in 0..60 {
            let mut prev = hand_angles(TimeSample::new(0, m, 0)).minute_angle;
            for s in 1..60 {
                let a = hand_angles(TimeSample::new(0, m, s)).minute_angle;
                assert!(a >= prev);
                prev = a;
            }
            // Never reaches the next minute mark before rollover.
            let next_mark = PI * f64::from(m + 1) / 30.0;
            assert!(prev < next_mark);
        }
    }

    #[test]
    fn hour_angle_has_twelve_hour_symmetry() {
        for h in 0..12 {
            for m in [0, 15, 30, 59] {
                let am = hand_angles(TimeSample::new(h, m, 0)).hour_angle;
                let pm = hand_angles(TimeSample::new(h + 12, m, 0)).hour_angle;
                // Same direction on the face, even where one angle sits just under a full turn.
                assert!((am.cos() - pm.cos()).abs() < 1e-9);
                assert!((am.sin() - pm.sin()).abs() < 1e-9);
                assert!((pm - am - TAU).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn three_oclock_hour_hand_is_a_quarter_turn() {
        let a = hand_angles(TimeSample::new(3, 0, 0));
        assert!((a.hour_angle - FRAC_PI_2).abs() < EPS);
        assert_eq!(a.minute_angle, 0.0);
    }

    #[test]
    fn half_minute_second_hand_is_half_turn() {
        let a = hand_angles(TimeSample::new(0, 0, 30));
        assert!((a.second_angle - PI).abs() < EPS);
        assert!((a.minute_angle - PI / 60.0).abs() < EPS);
    }

    #[test]
    fn hour_hand_advances_with_minutes() {
        let a = hand_angles(TimeSample::new(1, 30, 0));
        assert!((a.hour_angle - PI * 1.5 / 6.0).abs() < EPS);
    }

    // ── zones ─────────────────────────────────────────────────────────────

    #[test]
    fn utc_decomposition() {
        assert_eq!(Zone::utc().decompose(T0), TimeSample::new(15, 42, 7));
    }

    #[test]
    fn fixed_offset_decomposition_wraps_day() {
        let zone = Zone::from_offset_minutes(9 * 60).unwrap();
        assert_eq!(zone.decompose(T0), TimeSample::new(0, 42, 7));

        let zone = Zone::from_offset_minutes(-330).unwrap();
        assert_eq!(zone.decompose(T0), TimeSample::new(10, 12, 7));
    }

    #[test]
    fn offset_of_a_day_is_rejected() {
        assert!(Zone::from_offset_minutes(24 * 60).is_none());
        assert!(Zone::from_offset_minutes(i32::MAX).is_none());
    }

    #[test]
    fn unrepresentable_instant_falls_back_to_epoch() {
        assert_eq!(Zone::utc().decompose(i64::MAX), TimeSample::new(0, 0, 0));
    }

    // ── sampler ───────────────────────────────────────────────────────────

    #[test]
    fn sample_now_follows_the_clock() {
        let clock = Rc::new(FixedClock::new(T0));
        let mut sampler = utc_sampler(&clock);

        assert_eq!(sampler.sample_now(), TimeSample::new(15, 42, 7));
        clock.advance(1_000);
        assert_eq!(sampler.sample_now(), TimeSample::new(15, 42, 8));
        assert_eq!(sampler.save(), T0 + 1_000);
    }

    #[test]
    fn save_before_first_sample_is_construction_instant() {
        let clock = Rc::new(FixedClock::new(T0));
        let sampler = utc_sampler(&clock);
        assert_eq!(sampler.save(), T0);
    }

    #[test]
    fn restore_of_save_reproduces_the_sample() {
        let clock = Rc::new(FixedClock::new(T0));
        let mut sampler = utc_sampler(&clock);

        let before = sampler.sample_now();
        let saved = sampler.save();

        let mut revived = utc_sampler(&clock);
        revived.restore(saved);
        assert_eq!(revived.sample_now(), before);
    }

    #[test]
    fn restore_only_pins_the_next_sample() {
        let clock = Rc::new(FixedClock::new(T0));
        let mut sampler = utc_sampler(&clock);

        // Saved instant is one hour before "now".
        sampler.restore(T0 - 3_600_000);
        assert_eq!(sampler.save(), T0 - 3_600_000);
        assert_eq!(sampler.sample_now(), TimeSample::new(14, 42, 7));
        assert_eq!(sampler.sample_now(), TimeSample::new(15, 42, 7));
        assert_eq!(sampler.save(), T0);
    }
}
