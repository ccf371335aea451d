//! Gesture engine: one tick in, pointer events out.
//!
//! Owns the cursor smoother and one instance of each gesture detector.
//! Every tick runs the smoother first and then the four detectors, each on
//! its own landmark pair and its own state.  A frame without a hand reads
//! as every landmark absent, which releases any drag and disarms every
//! detector within that single tick.

use anyhow::Context;
use tracing::{debug, info, warn};

use super::click_drag::{ClickDragConfig, ClickDragDetector, ClickDragPhase};
use super::error::{GestureError, GestureResult};
use super::event::GestureEvent;
use super::keypoints::{Extent, KeypointFrame, Landmark, Point2};
use super::momentary::{MomentaryButton, MomentaryClickDetector, MomentaryConfig};
use super::scroll::{ScrollConfig, ScrollDetector};
use super::smoother::{PointSmoother, SmootherConfig};
use crate::output::{PointerCommand, PointerSink};

// ── Config ─────────────────────────────────────────────────

/// All engine constants, fixed at construction.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Screen width in pixels.
    pub screen_width: f64,
    /// Screen height in pixels.
    pub screen_height: f64,
    pub smoother: SmootherConfig,
    pub click_drag: ClickDragConfig,
    /// Thumb–middle pinch.
    pub right_click: MomentaryConfig,
    /// Thumb–ring pinch.
    pub middle_click: MomentaryConfig,
    pub scroll: ScrollConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: 1920.0,
            screen_height: 1080.0,
            smoother: SmootherConfig::default(),
            click_drag: ClickDragConfig::default(),
            right_click: MomentaryConfig::default(),
            middle_click: MomentaryConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Check every constant; returns the validated screen extent.
    pub fn validate(&self) -> GestureResult<Extent> {
        let screen = Extent::new(self.screen_width, self.screen_height)?;
        self.smoother.validate()?;
        self.click_drag.validate()?;
        self.right_click.validate()?;
        self.middle_click.validate()?;
        self.scroll.validate()?;
        Ok(screen)
    }

    /// Generate s-expression for IPC config.
    pub fn config_sexp(&self) -> String {
        format!(
            "(:screen ({:.0} {:.0}) :smooth-factor {:.1} :seed-on-first {} :click-threshold {:.1} :double-click-window-s {:.3} :drag-delay-s {:.3} :right-threshold {:.1} :middle-threshold {:.1} :scroll-threshold {:.1} :scroll-divisor {:.1})",
            self.screen_width,
            self.screen_height,
            self.smoother.smooth_factor,
            if self.smoother.seed_on_first { "t" } else { "nil" },
            self.click_drag.threshold_px,
            self.click_drag.double_click_window_s,
            self.click_drag.drag_delay_s,
            self.right_click.threshold_px,
            self.middle_click.threshold_px,
            self.scroll.threshold_px,
            self.scroll.divisor_px,
        )
    }
}

// ── Stats ──────────────────────────────────────────────────

/// Running counters since construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub ticks: u64,
    /// Ticks whose frame carried no landmarks at all.
    pub ticks_without_hand: u64,
    pub events_emitted: u64,
}

// ── Engine ─────────────────────────────────────────────────

pub struct GestureEngine {
    config: EngineConfig,
    screen: Extent,
    smoother: PointSmoother,
    click_drag: ClickDragDetector,
    right: MomentaryClickDetector,
    middle: MomentaryClickDetector,
    scroll: ScrollDetector,
    /// Timestamp of the last accepted tick.
    last_tick_s: Option<f64>,
    hand_visible: bool,
    stats: EngineStats,
}

impl GestureEngine {
    /// Validate `config` and build an engine at rest.
    pub fn new(config: EngineConfig) -> GestureResult<Self> {
        let screen = config.validate()?;
        info!(
            "Gesture engine ready: screen {:.0}x{:.0}, smooth factor {:.1}",
            screen.width(),
            screen.height(),
            config.smoother.smooth_factor,
        );
        Ok(Self {
            screen,
            smoother: PointSmoother::new(config.smoother.clone()),
            click_drag: ClickDragDetector::new(config.click_drag.clone()),
            right: MomentaryClickDetector::new(
                MomentaryButton::Right,
                config.right_click.clone(),
            ),
            middle: MomentaryClickDetector::new(
                MomentaryButton::Middle,
                config.middle_click.clone(),
            ),
            scroll: ScrollDetector::new(config.scroll.clone()),
            config,
            last_tick_s: None,
            hand_visible: false,
            stats: EngineStats::default(),
        })
    }

    /// Process one frame and return its events in order: cursor move (when
    /// the index tip is visible), then primary, right, middle and scroll.
    ///
    /// Rejects a frame older than the previous accepted one without
    /// touching any state.
    pub fn tick(&mut self, frame: &KeypointFrame) -> GestureResult<Vec<GestureEvent>> {
        let now_s = frame.timestamp_s();
        if let Some(prev_s) = self.last_tick_s {
            if now_s < prev_s {
                warn!("Rejecting frame at {:.3}s (previous {:.3}s)", now_s, prev_s);
                return Err(GestureError::TimeWentBackwards { prev_s, now_s });
            }
        }
        self.last_tick_s = Some(now_s);

        let hand = frame.hand_present();
        if hand != self.hand_visible {
            debug!("Hand {} at {:.3}s", if hand { "acquired" } else { "lost" }, now_s);
            self.hand_visible = hand;
        }
        self.stats.ticks += 1;
        if !hand {
            self.stats.ticks_without_hand += 1;
        }

        let index = frame.landmark(Landmark::IndexTip);
        let thumb = frame.landmark(Landmark::ThumbTip);
        let middle = frame.landmark(Landmark::MiddleTip);
        let right_finger = frame.landmark(self.right.button().finger());
        let middle_finger = frame.landmark(self.middle.button().finger());

        let mut events = Vec::new();

        if let Some(raw) = index {
            let p = self.smoother.update(raw, frame.camera(), self.screen);
            events.push(GestureEvent::CursorMove { x: p.x, y: p.y });
        }

        events.extend(self.click_drag.update(index, thumb, now_s));
        events.extend(self.right.update(thumb, right_finger));
        events.extend(self.middle.update(thumb, middle_finger));
        events.extend(self.scroll.update(index, middle));

        self.stats.events_emitted += events.len() as u64;
        Ok(events)
    }

    /// Run `tick` and forward each event to `sink` as a pointer command.
    /// Returns the number of commands sent.
    ///
    /// The tick is committed before the first send.  If the sink fails
    /// partway the engine does not roll back and the remaining commands
    /// for this tick are dropped; the error says how many.  A caller that
    /// gives up on the sink after a drag began should `reset()` and
    /// deliver the returned `DragEnd` elsewhere.
    pub fn dispatch<S: PointerSink + ?Sized>(
        &mut self,
        frame: &KeypointFrame,
        sink: &mut S,
    ) -> anyhow::Result<usize> {
        let events = self.tick(frame)?;
        for (sent, event) in events.iter().enumerate() {
            let command = PointerCommand::from(*event);
            sink.send(command).with_context(|| {
                format!(
                    "sink rejected {} at {:.3}s, {} of {} commands unsent",
                    command.as_str(),
                    frame.timestamp_s(),
                    events.len() - sent,
                    events.len()
                )
            })?;
        }
        Ok(events.len())
    }

    /// Clear every detector and the tick clock.  The cursor position is
    /// kept.  Returns a `DragEnd` if a drag was in progress so the caller
    /// can release the button.
    pub fn reset(&mut self) -> Vec<GestureEvent> {
        let mut released = Vec::new();
        if self.click_drag.is_dragging() {
            released.push(GestureEvent::DragEnd);
        }
        self.click_drag.reset();
        self.right.reset();
        self.middle.reset();
        self.scroll.reset();
        self.last_tick_s = None;
        self.hand_visible = false;
        info!("Gesture engine reset");
        released
    }

    pub fn cursor(&self) -> Point2 {
        self.smoother.cursor()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    pub fn click_drag(&self) -> &ClickDragDetector {
        &self.click_drag
    }

    pub fn right_click(&self) -> &MomentaryClickDetector {
        &self.right
    }

    pub fn middle_click(&self) -> &MomentaryClickDetector {
        &self.middle
    }

    pub fn scroll(&self) -> &ScrollDetector {
        &self.scroll
    }

    /// Whether every detector is disengaged.
    pub fn is_at_rest(&self) -> bool {
        self.click_drag.phase() == ClickDragPhase::Idle
            && !self.right.is_active()
            && !self.middle.is_active()
            && !self.scroll.is_active()
    }

    /// Generate s-expression for IPC status.
    pub fn status_sexp(&self) -> String {
        let cursor = self.cursor();
        let flag = |b: bool| if b { "t" } else { "nil" };
        format!(
            "(:cursor ({:.1} {:.1}) :hand {} :click-drag :{} :right {} :middle {} :scroll {} :ticks {} :no-hand-ticks {} :events {})",
            cursor.x,
            cursor.y,
            flag(self.hand_visible),
            self.click_drag.phase().as_str(),
            flag(self.right.is_active()),
            flag(self.middle.is_active()),
            flag(self.scroll.is_active()),
            self.stats.ticks,
            self.stats.ticks_without_hand,
            self.stats.events_emitted,
        )
    }
}

// ── Test helpers ───────────────────────────────────────────

#[cfg(test)]
fn make_frame(t: f64, points: &[(Landmark, f64, f64)]) -> KeypointFrame {
    let camera = Extent::new(640.0, 480.0).unwrap();
    points
        .iter()
        .fold(KeypointFrame::no_hand(camera, t).unwrap(), |frame, &(l, x, y)| {
            frame.with_landmark(l, Point2::new(x, y)).unwrap()
        })
}

/// Hand with every pinch open: fingertips spread 100px apart.
#[cfg(test)]
fn open_hand(t: f64) -> KeypointFrame {
    make_frame(
        t,
        &[
            (Landmark::ThumbTip, 100.0, 300.0),
            (Landmark::IndexTip, 200.0, 100.0),
            (Landmark::MiddleTip, 300.0, 100.0),
            (Landmark::RingTip, 400.0, 100.0),
        ],
    )
}

// ── Tests ──────────────────────────────────────────────────
