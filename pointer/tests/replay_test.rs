//! End-to-end replays: s-expression frames through the engine into a sink.

use std::io::Cursor;

use handpointer::gesture::{EngineConfig, GestureEngine};
use handpointer::ipc::parse_frame;
use handpointer::output::{PointerCommand, RecordingSink, SexpSink};
use handpointer::replay::{replay, replay_sexp, ReplayOptions, ReplaySummary};

const CAMERA: &str = ":camera-width 640 :camera-height 480";

fn line(t: f64, landmarks: &str) -> String {
    format!("(:timestamp {} {} {})", t, CAMERA, landmarks)
}

fn replay_lines(lines: &[String]) -> Vec<PointerCommand> {
    let mut engine = GestureEngine::new(EngineConfig::default()).unwrap();
    let mut sink = RecordingSink::default();
    for l in lines {
        let frame = parse_frame(l).unwrap();
        engine.dispatch(&frame, &mut sink).unwrap();
    }
    sink.commands
}

fn buttons(commands: Vec<PointerCommand>) -> Vec<PointerCommand> {
    commands
        .into_iter()
        .filter(|c| !matches!(c, PointerCommand::MoveCursorTo { .. }))
        .collect()
}

const PINCH: &str = ":index (200 200) :thumb (210 200) :middle (300 100) :ring (400 100)";
const OPEN: &str = ":index (200 200) :thumb (100 350) :middle (300 100) :ring (400 100)";

#[test]
fn test_click_drag_release_sequence() {
    let lines = vec![
        line(0.0, OPEN),
        line(0.033, PINCH),
        line(0.066, PINCH),
        line(0.2, PINCH),
        line(0.25, PINCH),
        line(0.3, OPEN),
    ];
    assert_eq!(
        buttons(replay_lines(&lines)),
        vec![PointerCommand::Click, PointerCommand::MouseDown, PointerCommand::MouseUp]
    );
}

#[test]
fn test_double_click_sequence() {
    let lines = vec![
        line(1.0, PINCH),
        line(1.05, OPEN),
        line(1.15, PINCH),
        line(1.2, OPEN),
    ];
    assert_eq!(
        buttons(replay_lines(&lines)),
        vec![PointerCommand::Click, PointerCommand::DoubleClick]
    );
}

#[test]
fn test_hand_loss_mid_drag() {
    let lines = vec![
        line(0.0, PINCH),
        line(0.5, PINCH),
        line(0.533, ""),
        line(0.566, ""),
    ];
    assert_eq!(
        buttons(replay_lines(&lines)),
        vec![PointerCommand::Click, PointerCommand::MouseDown, PointerCommand::MouseUp]
    );
}

#[test]
fn test_right_click_held_fires_once() {
    let held = ":index (200 200) :thumb (100 350) :middle (105 350) :ring (400 100)";
    let lines: Vec<String> = (0..10).map(|i| line(i as f64 * 0.033, held)).collect();
    assert_eq!(buttons(replay_lines(&lines)), vec![PointerCommand::RightClick]);
}

#[test]
fn test_middle_click_from_ring_pinch() {
    let held = ":index (200 200) :thumb (100 350) :middle (300 100) :ring (100 360)";
    let lines = vec![line(0.0, held), line(0.033, held), line(0.066, OPEN), line(0.1, held)];
    assert_eq!(
        buttons(replay_lines(&lines)),
        vec![PointerCommand::MiddleClick, PointerCommand::MiddleClick]
    );
}

#[test]
fn test_scroll_up_then_down() {
    let at = |y: f64| format!(":index (200 {}) :middle (210 {}) :thumb (100 450)", y, y);
    let lines = vec![
        line(0.0, &at(100.0)),
        line(0.033, &at(80.0)),
        line(0.066, &at(80.0)),
        line(0.1, &at(110.0)),
        // Half a step up is nothing, half a step down floors to -1
        line(0.133, &at(105.0)),
        line(0.166, &at(115.0)),
    ];
    assert_eq!(
        buttons(replay_lines(&lines)),
        vec![
            PointerCommand::ScrollBy { delta: 2 },
            PointerCommand::ScrollBy { delta: -3 },
            PointerCommand::ScrollBy { delta: -1 },
        ]
    );
}

#[test]
fn test_cursor_tracks_index_tip() {
    let lines: Vec<String> = (0..60).map(|i| line(i as f64 * 0.033, OPEN)).collect();
    let commands = replay_lines(&lines);
    let Some(PointerCommand::MoveCursorTo { x, y }) = commands.last().copied() else {
        panic!("expected a cursor move, got {:?}", commands.last());
    };
    // (200, 200) on 640x480 maps to (600, 450) on 1920x1080
    assert!((x - 600.0).abs() < 0.1, "x = {}", x);
    assert!((y - 450.0).abs() < 0.1, "y = {}", y);
}

#[test]
fn test_rejects_out_of_order_frames() {
    let mut engine = GestureEngine::new(EngineConfig::default()).unwrap();
    let mut sink = RecordingSink::default();
    engine
        .dispatch(&parse_frame(&line(1.0, OPEN)).unwrap(), &mut sink)
        .unwrap();
    let err = engine
        .dispatch(&parse_frame(&line(0.9, OPEN)).unwrap(), &mut sink)
        .unwrap_err();
    assert!(err.to_string().contains("precedes"), "{}", err);
}

#[test]
fn test_sexp_sink_output() {
    let mut engine = GestureEngine::new(EngineConfig::default()).unwrap();
    let mut sink = SexpSink::new(Vec::new());
    engine
        .dispatch(&parse_frame(&line(0.0, PINCH)).unwrap(), &mut sink)
        .unwrap();
    let out = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("(:type :event :event :move :x 120.0 :y 90.0"));
    assert_eq!(lines[1], "(:type :event :event :click)");
}

// ── Frame file replay ──────────────────────────────────────

fn engine() -> GestureEngine {
    GestureEngine::new(EngineConfig::default()).unwrap()
}

fn replay_text(text: &str, options: &ReplayOptions) -> anyhow::Result<(ReplaySummary, String)> {
    let mut e = engine();
    let mut out = Vec::new();
    let summary = replay_sexp(Cursor::new(text), &mut out, &mut e, options)?;
    Ok((summary, String::from_utf8(out).unwrap()))
}

#[test]
fn test_replay_skips_blank_and_comment_lines() {
    let text = format!(
        "; recorded session\n\n{}\n   \n;; mid-file note\n{}\n",
        line(0.0, OPEN),
        line(0.033, OPEN)
    );
    let (summary, out) = replay_text(&text, &ReplayOptions::default()).unwrap();
    assert_eq!(summary, ReplaySummary { frames: 2, commands: 2 });
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn test_replay_malformed_line_reports_line_number() {
    let text = format!("; header\n\n{}\n(:timestamp 0.1 :camera-width\n", line(0.0, OPEN));
    let err = replay_text(&text, &ReplayOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "line 4");
    assert!(format!("{:#}", err).contains("malformed"), "{:#}", err);
}

#[test]
fn test_replay_rejected_frame_reports_line_number() {
    let text = format!("{}\n{}\n", line(1.0, OPEN), line(0.5, OPEN));
    let err = replay_text(&text, &ReplayOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "line 2");
}

#[test]
fn test_replay_mirror_flips_x() {
    let text = format!("{}\n", line(0.0, ":index (100 240)"));

    let (_, plain) = replay_text(&text, &ReplayOptions::default()).unwrap();
    // 100 -> 300 screen px, eased by 1/5 from the origin
    assert_eq!(plain.trim(), "(:type :event :event :move :x 60.0 :y 108.0)");

    let mirrored = ReplayOptions {
        mirror: true,
        ..Default::default()
    };
    let (_, flipped) = replay_text(&text, &mirrored).unwrap();
    // 640 - 100 = 540 -> 1620 screen px
    assert_eq!(flipped.trim(), "(:type :event :event :move :x 324.0 :y 108.0)");
}

#[test]
fn test_replay_releases_drag_at_end_of_input() {
    let text = format!("{}\n{}\n", line(0.0, PINCH), line(0.5, PINCH));
    let mut e = engine();
    let mut sink = RecordingSink::default();
    let summary = replay(Cursor::new(text), &mut e, &mut sink, false).unwrap();

    assert_eq!(summary, ReplaySummary { frames: 2, commands: 5 });
    assert_eq!(sink.commands.last(), Some(&PointerCommand::MouseUp));
    assert_eq!(
        buttons(sink.commands),
        vec![PointerCommand::Click, PointerCommand::MouseDown, PointerCommand::MouseUp]
    );
    assert!(e.is_at_rest());
}

#[test]
fn test_replay_no_release_when_not_dragging() {
    let text = format!("{}\n{}\n", line(0.0, PINCH), line(0.05, PINCH));
    let mut e = engine();
    let mut sink = RecordingSink::default();
    replay(Cursor::new(text), &mut e, &mut sink, false).unwrap();
    assert_eq!(buttons(sink.commands), vec![PointerCommand::Click]);
}

#[test]
fn test_replay_status_line() {
    let text = format!("{}\n{}\n", line(0.0, OPEN), line(0.033, ""));

    let (_, out) = replay_text(&text, &ReplayOptions::default()).unwrap();
    assert!(!out.contains(":cursor"), "{}", out);

    let with_status = ReplayOptions {
        status: true,
        ..Default::default()
    };
    let (summary, out) = replay_text(&text, &with_status).unwrap();
    assert_eq!(summary.commands, 1);
    let last = out.lines().last().unwrap();
    assert!(last.starts_with("(:cursor ("), "{}", last);
    assert!(last.contains(":hand nil"), "{}", last);
    assert!(last.contains(":ticks 2 :no-hand-ticks 1 :events 1"), "{}", last);
}
