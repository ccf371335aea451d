//! Error type for caller contract violations in the gesture core.
//!
//! Missing landmarks are ordinary input and never produce an error; these
//! variants cover frames or configs that would corrupt the screen mapping.

use thiserror::Error;

pub type GestureResult<T> = Result<T, GestureError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GestureError {
    /// Camera or screen extent that is not finite and positive.
    #[error("invalid extent {width}x{height}: both sides must be finite and positive")]
    InvalidExtent { width: f64, height: f64 },

    #[error("invalid timestamp {0}: must be finite")]
    InvalidTimestamp(f64),

    /// Tick older than the last accepted one.
    #[error("timestamp {now_s:.3}s precedes previous tick at {prev_s:.3}s")]
    TimeWentBackwards { prev_s: f64, now_s: f64 },

    #[error("non-finite coordinate for {landmark}")]
    InvalidCoordinate { landmark: &'static str },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
