//! Primary-button gestures from the index–thumb pinch.
//!
//! A pinch onset is a click, or a double-click when it lands within the
//! double-click window of the previous click.  A pinch held past the drag
//! delay presses the button (drag begin) until the pinch opens or the
//! hand is lost.

use tracing::debug;

use super::error::{GestureError, GestureResult};
use super::event::GestureEvent;
use super::keypoints::Point2;
use super::pinch;

// ── Config ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ClickDragConfig {
    /// Index–thumb separation (pixels) below which the hand is pinching.
    pub threshold_px: f64,
    /// Maximum gap between two pinch onsets to count as a double-click.
    pub double_click_window_s: f64,
    /// Hold duration after which a pinch becomes a drag.
    pub drag_delay_s: f64,
}

impl Default for ClickDragConfig {
    fn default() -> Self {
        Self {
            threshold_px: 40.0,
            double_click_window_s: 0.3,
            drag_delay_s: 0.1,
        }
    }
}

impl ClickDragConfig {
    pub fn validate(&self) -> GestureResult<()> {
        if !(self.threshold_px > 0.0 && self.threshold_px.is_finite()) {
            return Err(GestureError::InvalidConfig(format!(
                "click threshold must be positive, got {}",
                self.threshold_px
            )));
        }
        if !(self.double_click_window_s > 0.0 && self.double_click_window_s.is_finite()) {
            return Err(GestureError::InvalidConfig(format!(
                "double-click window must be positive, got {}",
                self.double_click_window_s
            )));
        }
        if !(self.drag_delay_s >= 0.0 && self.drag_delay_s.is_finite()) {
            return Err(GestureError::InvalidConfig(format!(
                "drag delay must be non-negative, got {}",
                self.drag_delay_s
            )));
        }
        Ok(())
    }
}

// ── State ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickDragPhase {
    Idle,
    /// Pinch held since `since_s`, not yet dragging.
    Pinching { since_s: f64 },
    Dragging,
}

impl ClickDragPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pinching { .. } => "pinching",
            Self::Dragging => "dragging",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClickDragDetector {
    config: ClickDragConfig,
    phase: ClickDragPhase,
    /// Onset time of the last single click; cleared after a double-click
    /// so a third quick pinch starts a fresh pair.
    last_click_s: Option<f64>,
}

impl ClickDragDetector {
    pub fn new(config: ClickDragConfig) -> Self {
        Self {
            config,
            phase: ClickDragPhase::Idle,
            last_click_s: None,
        }
    }

    /// Advance one tick.  Emits at most one event.
    pub fn update(
        &mut self,
        index: Option<Point2>,
        thumb: Option<Point2>,
        now_s: f64,
    ) -> Option<GestureEvent> {
        let pinched = pinch::separation(index, thumb) < self.config.threshold_px;

        match (self.phase, pinched) {
            (ClickDragPhase::Idle, true) => {
                self.phase = ClickDragPhase::Pinching { since_s: now_s };
                match self.last_click_s {
                    Some(last) if now_s - last < self.config.double_click_window_s => {
                        self.last_click_s = None;
                        debug!("Double click at {:.3}s", now_s);
                        Some(GestureEvent::DoubleClick)
                    }
                    _ => {
                        self.last_click_s = Some(now_s);
                        debug!("Click at {:.3}s", now_s);
                        Some(GestureEvent::Click)
                    }
                }
            }
            (ClickDragPhase::Pinching { since_s }, true) => {
                if now_s - since_s > self.config.drag_delay_s {
                    self.phase = ClickDragPhase::Dragging;
                    debug!("Drag begin after {:.0}ms", (now_s - since_s) * 1000.0);
                    Some(GestureEvent::DragBegin)
                } else {
                    None
                }
            }
            (ClickDragPhase::Dragging, true) => None,
            (ClickDragPhase::Dragging, false) => {
                self.phase = ClickDragPhase::Idle;
                debug!("Drag end at {:.3}s", now_s);
                Some(GestureEvent::DragEnd)
            }
            (_, false) => {
                self.phase = ClickDragPhase::Idle;
                None
            }
        }
    }

    pub fn phase(&self) -> ClickDragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == ClickDragPhase::Dragging
    }

    pub fn last_click_s(&self) -> Option<f64> {
        self.last_click_s
    }

    pub fn config(&self) -> &ClickDragConfig {
        &self.config
    }

    /// Return to Idle and forget the last click.  Emits nothing: a caller
    /// resetting mid-drag is responsible for releasing the button.
    pub fn reset(&mut self) {
        self.phase = ClickDragPhase::Idle;
        self.last_click_s = None;
    }
}

// ── Test helpers ───────────────────────────────────────────

#[cfg(test)]
const OPEN: (Option<Point2>, Option<Point2>) =
    (Some(Point2::new(100.0, 100.0)), Some(Point2::new(200.0, 100.0)));

#[cfg(test)]
const PINCHED: (Option<Point2>, Option<Point2>) =
    (Some(Point2::new(100.0, 100.0)), Some(Point2::new(110.0, 100.0)));

// ── Tests ──────────────────────────────────────────────────
