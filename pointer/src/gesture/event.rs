//! Events synthesized by the gesture detectors.

/// One discrete result of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Smoothed cursor target in screen pixels.
    CursorMove { x: f64, y: f64 },
    Click,
    DoubleClick,
    /// Primary button held down for a drag.
    DragBegin,
    /// Primary button released at the end of a drag.
    DragEnd,
    RightClick,
    MiddleClick,
    /// Vertical scroll in wheel units, positive = up.
    Scroll { delta: i32 },
}

impl GestureEvent {
    /// String representation for IPC.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CursorMove { .. } => "cursor-move",
            Self::Click => "click",
            Self::DoubleClick => "double-click",
            Self::DragBegin => "drag-begin",
            Self::DragEnd => "drag-end",
            Self::RightClick => "right-click",
            Self::MiddleClick => "middle-click",
            Self::Scroll { .. } => "scroll",
        }
    }

    /// Whether this is a discrete (non-motion) event.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Self::CursorMove { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(GestureEvent::CursorMove { x: 0.0, y: 0.0 }.as_str(), "cursor-move");
        assert_eq!(GestureEvent::DoubleClick.as_str(), "double-click");
        assert_eq!(GestureEvent::DragBegin.as_str(), "drag-begin");
        assert_eq!(GestureEvent::Scroll { delta: -1 }.as_str(), "scroll");
    }

    #[test]
    fn test_is_discrete() {
        assert!(!GestureEvent::CursorMove { x: 1.0, y: 2.0 }.is_discrete());
        assert!(GestureEvent::Click.is_discrete());
        assert!(GestureEvent::Scroll { delta: 3 }.is_discrete());
    }
}
