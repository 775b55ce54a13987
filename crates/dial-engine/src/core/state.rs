use std::fmt;

use serde::{Deserialize, Serialize};

/// A persisted record that does not decode as a [`RenderState`].
#[derive(Debug, Clone)]
pub struct StateError(pub String);

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render state error: {}", self.0)
    }
}

impl std::error::Error for StateError {}

/// The only state that survives host teardown.
///
/// Hosts embed this record in whatever persistence envelope they own; the
/// face does not look at anything outside it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    /// Instant of the last frame, in milliseconds since the Unix epoch.
    pub time: i64,
}

impl RenderState {
    #[inline]
    pub const fn new(time: i64) -> Self {
        Self { time }
    }

    /// Decodes the record a host pulled out of its persistence envelope.
    pub fn from_value(value: serde_json::Value) -> Result<Self, StateError> {
        serde_json::from_value(value).map_err(|e| StateError(e.to_string()))
    }
}
