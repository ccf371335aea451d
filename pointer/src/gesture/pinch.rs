//! Pinch metric shared by every gesture detector.

use super::keypoints::Point2;

/// Euclidean distance between two landmarks, in pixels.
///
/// Returns `f64::INFINITY` when either landmark is absent, so any
/// `distance < threshold` test reads as "not pinching".
pub fn separation(a: Option<Point2>, b: Option<Point2>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => {
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            (dx * dx + dy * dy).sqrt()
        }
        _ => f64::INFINITY,
    }
}

/// Midpoint of two landmarks, or `None` if either is absent.
pub fn midpoint(a: Option<Point2>, b: Option<Point2>) -> Option<Point2> {
    match (a, b) {
        (Some(a), Some(b)) => Some(Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_345() {
        let d = separation(Some(Point2::new(0.0, 0.0)), Some(Point2::new(3.0, 4.0)));
        assert!((d - 5.0).abs() < 1e-9, "Expected 5.0, got {}", d);
    }

    #[test]
    fn test_separation_symmetric() {
        let a = Some(Point2::new(10.0, -2.0));
        let b = Some(Point2::new(-7.0, 31.0));
        assert_eq!(separation(a, b), separation(b, a));
    }

    #[test]
    fn test_separation_missing_is_infinite() {
        let p = Some(Point2::new(1.0, 1.0));
        assert_eq!(separation(p, None), f64::INFINITY);
        assert_eq!(separation(None, p), f64::INFINITY);
        assert_eq!(separation(None, None), f64::INFINITY);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Some(Point2::new(0.0, 100.0)), Some(Point2::new(10.0, 80.0)));
        assert_eq!(m, Some(Point2::new(5.0, 90.0)));
        assert_eq!(midpoint(None, Some(Point2::new(1.0, 1.0))), None);
    }
}
