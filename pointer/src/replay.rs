//! Line-by-line replay of recorded frames through a `GestureEngine`.
//!
//! Input is one frame s-expression per line.  Blank lines and lines
//! starting with `;` are skipped.  A line that fails to parse or is
//! rejected by the engine aborts the run with its line number.  When the
//! input ends mid-drag the engine is reset so the sink always sees the
//! closing `MouseUp`.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};

use crate::gesture::GestureEngine;
use crate::ipc;
use crate::output::{PointerCommand, PointerSink, SexpSink};

#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    /// Flip landmark x coordinates about the camera width.
    pub mirror: bool,
    /// Write the final engine status after the last command.
    pub status: bool,
}

/// Counters for one replay run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: u64,
    pub commands: usize,
}

/// Feed every frame in `reader` to `engine`, sending commands to `sink`.
pub fn replay<R: BufRead, S: PointerSink + ?Sized>(
    reader: R,
    engine: &mut GestureEngine,
    sink: &mut S,
    mirror: bool,
) -> anyhow::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (n, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let lineno = n + 1;
        let mut frame = ipc::parse_frame(line).with_context(|| format!("line {lineno}"))?;
        if mirror {
            frame = frame.mirrored();
        }
        summary.commands += engine
            .dispatch(&frame, &mut *sink)
            .with_context(|| format!("line {lineno}"))?;
        summary.frames += 1;
    }

    if engine.click_drag().is_dragging() {
        warn!("input ended mid-drag, releasing");
        for event in engine.reset() {
            sink.send(PointerCommand::from(event))?;
            summary.commands += 1;
        }
    }

    info!(
        "replayed {} frames, {} commands",
        summary.frames, summary.commands
    );
    Ok(summary)
}

/// Replay into `writer` as command s-expressions, one per line, followed
/// by the engine status when `options.status` is set.
pub fn replay_sexp<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    engine: &mut GestureEngine,
    options: &ReplayOptions,
) -> anyhow::Result<ReplaySummary> {
    let mut sink = SexpSink::new(writer);
    let summary = replay(reader, engine, &mut sink, options.mirror)?;

    let mut out = sink.into_inner();
    if options.status {
        writeln!(out, "{}", engine.status_sexp())?;
    }
    out.flush()?;
    Ok(summary)
}
