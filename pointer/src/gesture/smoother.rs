//! Camera-to-screen cursor mapping with exponential smoothing.
//!
//! The raw index-tip position is rescaled linearly from camera pixels to
//! screen pixels and then eased toward from the previous output:
//! `output = prev + (target - prev) / smooth_factor`.  Larger factors give
//! a steadier but laggier cursor.

use tracing::debug;

use super::error::{GestureError, GestureResult};
use super::keypoints::{Extent, Point2};

// ── Config ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SmootherConfig {
    /// Divisor applied to the remaining distance each tick (>= 1.0).
    pub smooth_factor: f64,
    /// Jump straight to the first mapped observation instead of easing
    /// in from the origin.
    pub seed_on_first: bool,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            smooth_factor: 5.0,
            seed_on_first: false,
        }
    }
}

impl SmootherConfig {
    pub fn validate(&self) -> GestureResult<()> {
        if !self.smooth_factor.is_finite() || self.smooth_factor < 1.0 {
            return Err(GestureError::InvalidConfig(format!(
                "smooth factor must be >= 1, got {}",
                self.smooth_factor
            )));
        }
        Ok(())
    }

    /// Ticks of constant input needed to bring `initial_error` pixels of
    /// lag down to at most `tolerance` pixels.
    pub fn settle_ticks(&self, initial_error: f64, tolerance: f64) -> u32 {
        if initial_error <= tolerance {
            return 0;
        }
        let retained = 1.0 - 1.0 / self.smooth_factor;
        if retained <= 0.0 {
            return 1;
        }
        ((tolerance / initial_error).ln() / retained.ln()).ceil() as u32
    }
}

// ── Smoother ───────────────────────────────────────────────

/// Owns the smoothed cursor position.
#[derive(Debug, Clone)]
pub struct PointSmoother {
    config: SmootherConfig,
    cursor: Point2,
    seeded: bool,
}

impl PointSmoother {
    pub fn new(config: SmootherConfig) -> Self {
        Self {
            config,
            cursor: Point2::default(),
            seeded: false,
        }
    }

    /// Map `raw` into screen space, ease toward it, and return the new
    /// cursor position.  Points outside the camera frame extrapolate.
    pub fn update(&mut self, raw: Point2, camera: Extent, screen: Extent) -> Point2 {
        let target = map_to_screen(raw, camera, screen);

        if !self.seeded && self.config.seed_on_first {
            debug!("Cursor seeded at ({:.1}, {:.1})", target.x, target.y);
            self.cursor = target;
        } else {
            let f = self.config.smooth_factor;
            self.cursor = Point2::new(
                self.cursor.x + (target.x - self.cursor.x) / f,
                self.cursor.y + (target.y - self.cursor.y) / f,
            );
        }
        self.seeded = true;
        self.cursor
    }

    /// Current smoothed position.
    pub fn cursor(&self) -> Point2 {
        self.cursor
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.config
    }
}

/// Linear per-axis rescale from camera pixels to screen pixels.
pub fn map_to_screen(raw: Point2, camera: Extent, screen: Extent) -> Point2 {
    Point2::new(
        raw.x / camera.width() * screen.width(),
        raw.y / camera.height() * screen.height(),
    )
}

// ── Tests ──────────────────────────────────────────────────
