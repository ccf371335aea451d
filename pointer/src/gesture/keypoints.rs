//! Per-tick hand keypoint snapshots.
//!
//! A `KeypointFrame` carries the handful of fingertip landmarks the gesture
//! detectors read, the camera extent they are measured against, and the
//! caller's timestamp.  Landmarks are optional: an absent landmark is a
//! normal input (the tracker reported no hand), not an error.

use super::error::{GestureError, GestureResult};

// ── Landmark definitions ───────────────────────────────────

/// Landmarks consumed by the gesture engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    IndexTip,
    ThumbTip,
    MiddleTip,
    RingTip,
    /// Carried through for callers; no detector requires it.
    Wrist,
}

/// Number of landmarks stored per frame.
pub const LANDMARK_COUNT: usize = 5;

/// Landmarks per hand in the MediaPipe hand model.
pub const MEDIAPIPE_LANDMARK_COUNT: usize = 21;

impl Landmark {
    /// All landmarks in storage order.
    pub const ALL: [Landmark; LANDMARK_COUNT] = [
        Self::IndexTip,
        Self::ThumbTip,
        Self::MiddleTip,
        Self::RingTip,
        Self::Wrist,
    ];

    /// Convert landmark enum to array index (0-4).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Position of this landmark in a MediaPipe 21-point hand list.
    pub fn mediapipe_index(&self) -> usize {
        match self {
            Self::Wrist => 0,
            Self::ThumbTip => 4,
            Self::IndexTip => 8,
            Self::MiddleTip => 12,
            Self::RingTip => 16,
        }
    }

    /// String representation for IPC.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndexTip => "index",
            Self::ThumbTip => "thumb",
            Self::MiddleTip => "middle",
            Self::RingTip => "ring",
            Self::Wrist => "wrist",
        }
    }
}

// ── Geometry ───────────────────────────────────────────────

/// A 2D position in pixels (camera or screen space, depending on context).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build from integer pixel coordinates as reported by the tracker.
    pub fn from_pixels(x: i32, y: i32) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height of a camera frame or screen, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    width: f64,
    height: f64,
}

impl Extent {
    /// Both sides must be finite and strictly positive.
    pub fn new(width: f64, height: f64) -> GestureResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GestureError::InvalidExtent { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

// ── Frame ──────────────────────────────────────────────────

/// Immutable snapshot of one tick of tracker output.
#[derive(Debug, Clone, PartialEq)]
pub struct KeypointFrame {
    landmarks: [Option<Point2>; LANDMARK_COUNT],
    camera: Extent,
    timestamp_s: f64,
}

impl KeypointFrame {
    /// A frame in which the tracker saw no hand.
    pub fn no_hand(camera: Extent, timestamp_s: f64) -> GestureResult<Self> {
        if !timestamp_s.is_finite() {
            return Err(GestureError::InvalidTimestamp(timestamp_s));
        }
        Ok(Self {
            landmarks: [None; LANDMARK_COUNT],
            camera,
            timestamp_s,
        })
    }

    /// Set one landmark position, rejecting non-finite coordinates.
    pub fn with_landmark(mut self, landmark: Landmark, point: Point2) -> GestureResult<Self> {
        if !point.is_finite() {
            return Err(GestureError::InvalidCoordinate {
                landmark: landmark.as_str(),
            });
        }
        self.landmarks[landmark.index()] = Some(point);
        Ok(self)
    }

    /// Build a frame from a normalized (0.0-1.0) MediaPipe landmark list.
    ///
    /// Coordinates are scaled by the camera extent and truncated to whole
    /// pixels.  An empty list is a no-hand frame; a short list leaves the
    /// landmarks it does not reach absent.
    pub fn from_normalized(
        landmarks: &[[f64; 2]],
        camera: Extent,
        timestamp_s: f64,
    ) -> GestureResult<Self> {
        let mut frame = Self::no_hand(camera, timestamp_s)?;
        for landmark in Landmark::ALL {
            if let Some([nx, ny]) = landmarks.get(landmark.mediapipe_index()) {
                let point = Point2::new(
                    (nx * camera.width()).trunc(),
                    (ny * camera.height()).trunc(),
                );
                frame = frame.with_landmark(landmark, point)?;
            }
        }
        Ok(frame)
    }

    /// Position of a landmark, if the tracker reported it this tick.
    pub fn landmark(&self, landmark: Landmark) -> Option<Point2> {
        self.landmarks[landmark.index()]
    }

    /// Whether any landmark is present.
    pub fn hand_present(&self) -> bool {
        self.landmarks.iter().any(Option::is_some)
    }

    pub fn camera(&self) -> Extent {
        self.camera
    }

    pub fn timestamp_s(&self) -> f64 {
        self.timestamp_s
    }

    /// Same frame with x flipped about the camera width (selfie view).
    pub fn mirrored(&self) -> Self {
        let width = self.camera.width();
        let mut landmarks = self.landmarks;
        for point in landmarks.iter_mut().flatten() {
            point.x = width - point.x;
        }
        Self {
            landmarks,
            camera: self.camera,
            timestamp_s: self.timestamp_s,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────
