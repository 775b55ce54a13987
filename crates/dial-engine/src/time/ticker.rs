use std::time::{Duration, Instant};

/// One fired tick.
#[derive(Debug, Copy, Clone)]
pub struct Tick {
    /// Monotonic tick counter.
    pub index: u64,

    /// Deadline the tick was armed for.
    pub due: Instant,

    /// How far past `due` the host got around to polling.
    pub late_by: Duration,
}

/// One-shot redraw timer owned by the host.
///
/// The face asks for the next frame after every frame it renders; the host
/// answers by re-arming the ticker. Each arm is relative to the moment the
/// previous frame finished, so drift of one render duration per tick is
/// expected. The face resynchronizes from the wall clock every frame, so
/// drift never accumulates into the displayed time.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    deadline: Option<Instant>,
    tick_index: u64,
}

impl Ticker {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

    /// Creates a disarmed ticker with the one-second interval.
    pub fn new() -> Self {
        Self::with_interval(Self::DEFAULT_INTERVAL)
    }

    /// Creates a disarmed ticker with a custom interval.
    pub fn with_interval(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            deadline: None,
            tick_index: 0,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arms the next tick one interval after `now`, replacing any pending tick.
    pub fn arm(&mut self, now: Instant) -> Instant {
        self.arm_after(now, self.interval)
    }

    /// Arms the next tick `delay` after `now`, replacing any pending tick.
    pub fn arm_after(&mut self, now: Instant, delay: Duration) -> Instant {
        let due = now + delay;
        self.deadline = Some(due);
        due
    }

    /// Drops any pending tick.
    ///
    /// Hosts call this on teardown so nothing is delivered to a dead face.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Time left until the pending tick, `None` when disarmed.
    pub fn until_deadline(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|due| due.saturating_duration_since(now))
    }

    /// Fires the pending tick if its deadline has passed.
    ///
    /// A fired tick disarms the ticker; nothing fires again until the host
    /// re-arms it.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        let due = self.deadline?;
        if now < due {
            return None;
        }

        self.deadline = None;

        let tick = Tick {
            index: self.tick_index,
            due,
            late_by: now.saturating_duration_since(due),
        };

        self.tick_index = self.tick_index.wrapping_add(1);

        Some(tick)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn new_ticker_is_disarmed() {
        let mut t = Ticker::new();
        let now = Instant::now();
        assert!(!t.is_armed());
        assert!(t.until_deadline(now).is_none());
        assert!(t.poll(now + ms(5_000)).is_none());
    }

    #[test]
    fn default_interval_is_one_second() {
        assert_eq!(Ticker::default().interval(), ms(1_000));
    }

    #[test]
    fn does_not_fire_before_deadline() {
        let mut t = Ticker::new();
        let t0 = Instant::now();
        t.arm(t0);

        assert!(t.poll(t0 + ms(999)).is_none());
        assert_eq!(t.until_deadline(t0 + ms(400)), Some(ms(600)));
        assert!(t.is_armed());
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut t = Ticker::new();
        let t0 = Instant::now();
        let due = t.arm(t0);

        let tick = t.poll(t0 + ms(1_000)).expect("tick at deadline");
        assert_eq!(tick.index, 0);
        assert_eq!(tick.due, due);
        assert_eq!(tick.late_by, Duration::ZERO);

        assert!(t.poll(t0 + ms(1_500)).is_none());
        assert!(!t.is_armed());
    }

    #[test]
    fn late_poll_reports_lateness_and_index_advances() {
        let mut t = Ticker::with_interval(ms(100));
        let t0 = Instant::now();

        t.arm(t0);
        let first = t.poll(t0 + ms(130)).unwrap();
        assert_eq!(first.late_by, ms(30));

        // Re-armed relative to when the frame finished, not the old deadline.
        t.arm(t0 + ms(140));
        assert!(t.poll(t0 + ms(230)).is_none());
        let second = t.poll(t0 + ms(240)).unwrap();
        assert_eq!(second.index, 1);
    }

    #[test]
    fn disarm_suppresses_pending_tick() {
        let mut t = Ticker::new();
        let t0 = Instant::now();
        t.arm(t0);
        t.disarm();
        assert!(t.poll(t0 + ms(10_000)).is_none());
    }

    #[test]
    fn arm_after_uses_requested_delay() {
        let mut t = Ticker::new();
        let t0 = Instant::now();
        t.arm_after(t0, ms(250));
        assert!(t.poll(t0 + ms(249)).is_none());
        assert!(t.poll(t0 + ms(250)).is_some());
    }
}
