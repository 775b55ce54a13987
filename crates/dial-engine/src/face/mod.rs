//! Clock face recording.
//!
//! Turns viewport geometry plus hand angles into draw commands. Everything in
//! here is pure over its inputs; time sampling lives in `time` and scheduling
//! belongs to the host.

mod renderer;
mod style;

pub use renderer::{FaceRenderer, Hand, hour_label};
pub use style::FaceStyle;
