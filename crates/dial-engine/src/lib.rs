//! Dial engine crate.
//!
//! This crate owns the clock-face core: time sampling, hand geometry and the
//! renderer-agnostic draw stream a host adapter turns into pixels.

pub mod core;
pub mod face;
pub mod time;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
