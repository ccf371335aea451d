//! S-expression frame codec.
//!
//! One keypoint frame per plist, for example
//! `(:timestamp 0.033 :camera-width 640 :camera-height 480 :index (320 240) :thumb (330 250))`.
//! Landmarks that are missing or `nil` are absent; a plist with no landmark
//! keys is a no-hand frame.

use anyhow::{anyhow, bail, Context};
use lexpr::Value;

use crate::gesture::{Extent, KeypointFrame, Landmark, Point2};

/// Parse one frame s-expression.
pub fn parse_frame(raw: &str) -> anyhow::Result<KeypointFrame> {
    let value = lexpr::from_str(raw).context("malformed s-expression")?;

    let timestamp_s =
        get_float(&value, "timestamp").ok_or_else(|| anyhow!("missing or non-numeric :timestamp"))?;
    let width = get_float(&value, "camera-width")
        .ok_or_else(|| anyhow!("missing or non-numeric :camera-width"))?;
    let height = get_float(&value, "camera-height")
        .ok_or_else(|| anyhow!("missing or non-numeric :camera-height"))?;

    let mut frame = KeypointFrame::no_hand(Extent::new(width, height)?, timestamp_s)?;
    for landmark in Landmark::ALL {
        let Some(raw_point) = get_value(&value, landmark.as_str()) else {
            continue;
        };
        if let Some(point) =
            parse_point(raw_point).with_context(|| format!("bad :{}", landmark.as_str()))?
        {
            frame = frame.with_landmark(landmark, point)?;
        }
    }
    Ok(frame)
}

/// Serialize a frame in the form `parse_frame` reads.
pub fn frame_to_sexp(frame: &KeypointFrame) -> String {
    let camera = frame.camera();
    let mut s = format!(
        "(:timestamp {} :camera-width {} :camera-height {}",
        frame.timestamp_s(),
        camera.width(),
        camera.height()
    );
    for landmark in Landmark::ALL {
        if let Some(p) = frame.landmark(landmark) {
            s.push_str(&format!(" :{} ({} {})", landmark.as_str(), p.x, p.y));
        }
    }
    s.push(')');
    s
}

/// `(x y)` → point, `nil` → absent.
fn parse_point(value: &Value) -> anyhow::Result<Option<Point2>> {
    match value {
        Value::Nil | Value::Null | Value::Bool(false) => Ok(None),
        Value::Symbol(s) if s.as_ref() == "nil" => Ok(None),
        Value::Cons(_) => match list_items(value).as_deref() {
            Some([x, y]) => match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => Ok(Some(Point2::new(x, y))),
                _ => bail!("coordinates must be numbers, got {}", value),
            },
            _ => bail!("expected (x y), got {}", value),
        },
        other => bail!("expected (x y) or nil, got {}", other),
    }
}

// ── Plist helpers ──────────────────────────────────────────

/// Find the value following `:key` in a plist.
/// Handles both `Value::Keyword("key")` (elisp parser) and
/// `Value::Symbol(":key")` (default parser) forms.
fn get_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let prefixed = format!(":{}", key);
    let mut current = value;
    while let Value::Cons(pair) = current {
        let is_key = match pair.car() {
            Value::Keyword(k) => k.as_ref() == key,
            Value::Symbol(s) => s.as_ref() == prefixed,
            _ => false,
        };
        if is_key {
            return match pair.cdr() {
                Value::Cons(next) => Some(next.car()),
                _ => None,
            };
        }
        current = pair.cdr();
    }
    None
}

/// Extract a numeric plist value.  Strings and symbols are not numbers.
fn get_float(value: &Value, key: &str) -> Option<f64> {
    match get_value(value, key)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Elements of a proper list, or `None` for an improper (dotted) list.
fn list_items(value: &Value) -> Option<Vec<&Value>> {
    let mut items = Vec::new();
    let mut current = value;
    loop {
        match current {
            Value::Cons(pair) => {
                items.push(pair.car());
                current = pair.cdr();
            }
            Value::Null | Value::Nil => return Some(items),
            _ => return None,
        }
    }
}
