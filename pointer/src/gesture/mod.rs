//! Gesture interpretation: keypoint frames in, pointer events out.
//!
//! - `keypoints`: per-tick landmark snapshot and geometry types
//! - `pinch`: separation metric shared by all detectors
//! - `smoother`: camera-to-screen mapping with exponential smoothing
//! - `click_drag`: click, double-click and drag from the index–thumb pinch
//! - `momentary`: edge-triggered right and middle clicks
//! - `scroll`: vertical scroll from the index–middle pinch
//! - `engine`: owns one of each and runs them once per tick

pub mod click_drag;
pub mod engine;
pub mod error;
pub mod event;
pub mod keypoints;
pub mod momentary;
pub mod pinch;
pub mod scroll;
pub mod smoother;

pub use click_drag::{ClickDragConfig, ClickDragDetector, ClickDragPhase};
pub use engine::{EngineConfig, EngineStats, GestureEngine};
pub use error::{GestureError, GestureResult};
pub use event::GestureEvent;
pub use keypoints::{Extent, KeypointFrame, Landmark, Point2};
pub use momentary::{MomentaryButton, MomentaryClickDetector, MomentaryConfig};
pub use scroll::{ScrollConfig, ScrollDetector};
pub use smoother::{PointSmoother, SmootherConfig};
