use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Source of wall-clock instants, in milliseconds since the Unix epoch.
pub trait ClockSource: fmt::Debug {
    fn now_millis(&self) -> i64;
}

/// The process-wide system wall clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A manually driven clock.
///
/// Used by tests and by hosts that replay a fixed instant. Share it through an
/// `Rc` to keep a handle after handing it to a sampler.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: Cell<i64>,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis: Cell::new(millis) }
    }

    pub fn advance(&self, millis: i64) {
        self.millis.set(self.millis.get().saturating_add(millis));
    }
}

impl ClockSource for FixedClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}

impl<T: ClockSource + ?Sized> ClockSource for Rc<T> {
    #[inline]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
