//! Coordinate and geometry types shared between the face renderer and hosts.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! With +Y down, angle 0 points along +X and angles grow clockwise.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::{ViewportGeometry, square_side};
