//! Vertical scroll from the index–middle pinch.
//!
//! While the two fingertips are held together, vertical travel of their
//! midpoint turns into wheel steps.  The baseline moves to the current
//! midpoint whenever a step is emitted, so deltas never accumulate.

use tracing::debug;

use super::error::{GestureError, GestureResult};
use super::event::GestureEvent;
use super::keypoints::Point2;
use super::pinch;

#[derive(Debug, Clone)]
pub struct ScrollConfig {
    /// Index–middle separation (pixels) that engages scrolling.
    pub threshold_px: f64,
    /// Pixels of vertical travel per wheel step.
    pub divisor_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: 40.0,
            divisor_px: 10.0,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> GestureResult<()> {
        if !(self.threshold_px > 0.0 && self.threshold_px.is_finite()) {
            return Err(GestureError::InvalidConfig(format!(
                "scroll threshold must be positive, got {}",
                self.threshold_px
            )));
        }
        if !(self.divisor_px > 0.0 && self.divisor_px.is_finite()) {
            return Err(GestureError::InvalidConfig(format!(
                "scroll divisor must be positive, got {}",
                self.divisor_px
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ScrollDetector {
    config: ScrollConfig,
    /// Reference midpoint height while engaged; `None` when inactive.
    baseline_y: Option<f64>,
}

impl ScrollDetector {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            baseline_y: None,
        }
    }

    /// Advance one tick with the index and middle fingertips.
    pub fn update(&mut self, index: Option<Point2>, middle: Option<Point2>) -> Option<GestureEvent> {
        let engaged = pinch::separation(index, middle) < self.config.threshold_px;
        let current = match pinch::midpoint(index, middle) {
            Some(mid) if engaged => mid.y,
            _ => {
                self.baseline_y = None;
                return None;
            }
        };

        let Some(baseline) = self.baseline_y else {
            debug!("Scroll engaged at y={:.1}", current);
            self.baseline_y = Some(current);
            return None;
        };

        let delta = ((baseline - current) / self.config.divisor_px).floor() as i32;
        if delta == 0 {
            return None;
        }
        self.baseline_y = Some(current);
        debug!("Scroll {:+}", delta);
        Some(GestureEvent::Scroll { delta })
    }

    pub fn is_active(&self) -> bool {
        self.baseline_y.is_some()
    }

    pub fn baseline_y(&self) -> Option<f64> {
        self.baseline_y
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        self.baseline_y = None;
    }
}
