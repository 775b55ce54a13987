//! Time subsystem.
//!
//! Provides the wall-clock side of the face without coupling to any host:
//! - `ClockSource` abstracts "now" so tests and hosts can inject an instant
//! - `TimeSampler` turns an instant into a `TimeSample` and `HandAngles`
//! - `Ticker` is the host-owned once-per-second schedule that drives frames

mod sampler;
mod source;
mod ticker;

pub use sampler::{HandAngles, TimeSample, TimeSampler, Zone, hand_angles};
pub use source::{ClockSource, FixedClock, SystemClock};
pub use ticker::{Tick, Ticker};
