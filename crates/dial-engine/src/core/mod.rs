//! Host-facing contract.
//!
//! `ClockFace` is the single object a platform adapter talks to: it reports
//! size changes in, pulls frames out, and checkpoints `RenderState` across
//! teardown. It never schedules anything itself; each frame returns a
//! `RedrawRequest` that the adapter's ticker honors.

mod clock_face;
mod state;

pub use clock_face::{ClockFace, RedrawRequest};
pub use state::{RenderState, StateError};
