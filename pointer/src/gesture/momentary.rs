//! Edge-triggered click detectors for secondary buttons.
//!
//! Thumb–middle pinch is a right click, thumb–ring pinch a middle click.
//! Each fires once when the separation drops below the threshold and
//! re-arms only after it rises above it again.  A separation exactly equal
//! to the threshold changes nothing.

use tracing::debug;

use super::error::{GestureError, GestureResult};
use super::event::GestureEvent;
use super::keypoints::{Landmark, Point2};
use super::pinch;

/// Which secondary button a detector drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MomentaryButton {
    Right,
    Middle,
}

impl MomentaryButton {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Middle => "middle",
        }
    }

    /// The finger pinched against the thumb for this button.
    pub fn finger(&self) -> Landmark {
        match self {
            Self::Right => Landmark::MiddleTip,
            Self::Middle => Landmark::RingTip,
        }
    }

    fn event(&self) -> GestureEvent {
        match self {
            Self::Right => GestureEvent::RightClick,
            Self::Middle => GestureEvent::MiddleClick,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MomentaryConfig {
    /// Thumb–finger separation (pixels) that triggers the click.
    pub threshold_px: f64,
}

impl Default for MomentaryConfig {
    fn default() -> Self {
        Self { threshold_px: 40.0 }
    }
}

impl MomentaryConfig {
    pub fn validate(&self) -> GestureResult<()> {
        if !(self.threshold_px > 0.0 && self.threshold_px.is_finite()) {
            return Err(GestureError::InvalidConfig(format!(
                "momentary click threshold must be positive, got {}",
                self.threshold_px
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MomentaryClickDetector {
    button: MomentaryButton,
    config: MomentaryConfig,
    active: bool,
}

impl MomentaryClickDetector {
    pub fn new(button: MomentaryButton, config: MomentaryConfig) -> Self {
        Self {
            button,
            config,
            active: false,
        }
    }

    /// Advance one tick with the thumb and this button's finger.
    pub fn update(&mut self, thumb: Option<Point2>, finger: Option<Point2>) -> Option<GestureEvent> {
        let distance = pinch::separation(thumb, finger);
        let threshold = self.config.threshold_px;

        if distance < threshold && !self.active {
            self.active = true;
            debug!("{} click", self.button.as_str());
            return Some(self.button.event());
        }
        if distance > threshold {
            self.active = false;
        }
        None
    }

    pub fn button(&self) -> MomentaryButton {
        self.button
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> &MomentaryConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        self.active = false;
    }
}
