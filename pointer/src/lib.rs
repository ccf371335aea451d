//! handpointer - hand keypoints to pointer motion, clicks, drags and scroll.
//!
//! The core is `gesture::GestureEngine`: feed it one `KeypointFrame` per
//! camera tick and it returns the events for that tick.  Camera capture,
//! keypoint detection and OS input injection stay with the caller; the
//! `output` sinks and the `ipc` codec are the seams for them, and
//! `replay` drives the engine from recorded frame files.

pub mod gesture;
pub mod ipc;
pub mod output;
pub mod replay;

pub use gesture::{EngineConfig, GestureEngine, GestureEvent, KeypointFrame};
pub use output::{PointerCommand, PointerSink};
pub use replay::{replay, replay_sexp, ReplayOptions, ReplaySummary};
