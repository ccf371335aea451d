//! Pointer commands handed to the input-injection collaborator.
//!
//! The gesture engine never touches the OS.  It produces `PointerCommand`s
//! in tick order and hands them to a `PointerSink`, which may inject them,
//! serialize them, or record them for tests.

use std::io::Write;

use crate::gesture::GestureEvent;

/// One command for the host pointer device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerCommand {
    MoveCursorTo { x: f64, y: f64 },
    Click,
    DoubleClick,
    MouseDown,
    MouseUp,
    RightClick,
    MiddleClick,
    /// Wheel steps, positive = up.
    ScrollBy { delta: i32 },
}

impl From<GestureEvent> for PointerCommand {
    fn from(event: GestureEvent) -> Self {
        match event {
            GestureEvent::CursorMove { x, y } => Self::MoveCursorTo { x, y },
            GestureEvent::Click => Self::Click,
            GestureEvent::DoubleClick => Self::DoubleClick,
            GestureEvent::DragBegin => Self::MouseDown,
            GestureEvent::DragEnd => Self::MouseUp,
            GestureEvent::RightClick => Self::RightClick,
            GestureEvent::MiddleClick => Self::MiddleClick,
            GestureEvent::Scroll { delta } => Self::ScrollBy { delta },
        }
    }
}

impl PointerCommand {
    /// String representation for IPC.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MoveCursorTo { .. } => "move",
            Self::Click => "click",
            Self::DoubleClick => "double-click",
            Self::MouseDown => "mouse-down",
            Self::MouseUp => "mouse-up",
            Self::RightClick => "right-click",
            Self::MiddleClick => "middle-click",
            Self::ScrollBy { .. } => "scroll",
        }
    }

    /// Serialize the command as an IPC event s-expression.
    pub fn to_sexp(&self) -> String {
        match self {
            Self::MoveCursorTo { x, y } => format!(
                "(:type :event :event :{} :x {:.1} :y {:.1})",
                self.as_str(),
                x,
                y
            ),
            Self::ScrollBy { delta } => format!(
                "(:type :event :event :{} :delta {})",
                self.as_str(),
                delta
            ),
            _ => format!("(:type :event :event :{})", self.as_str()),
        }
    }
}

// ── Sinks ──────────────────────────────────────────────────

/// Receiver for the engine's output, in order.
pub trait PointerSink {
    fn send(&mut self, command: PointerCommand) -> anyhow::Result<()>;
}

/// Keeps every command in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<PointerCommand>,
}

impl PointerSink for RecordingSink {
    fn send(&mut self, command: PointerCommand) -> anyhow::Result<()> {
        self.commands.push(command);
        Ok(())
    }
}

/// Writes one s-expression per command, newline-terminated.
pub struct SexpSink<W: Write> {
    writer: W,
}

impl<W: Write> SexpSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PointerSink for SexpSink<W> {
    fn send(&mut self, command: PointerCommand) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", command.to_sexp())?;
        Ok(())
    }
}
