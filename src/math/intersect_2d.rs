use super::Point2;

/// Parametric 2D line-line intersection by Cramer's rule.
///
/// Given the lines through `a0 -> a1` and `b0 -> b1`, returns `(t, s)` such that
/// `a0 + t * (a1 - a0) == b0 + s * (b1 - b0)`. Returns `None` when the determinant
/// is exactly zero (parallel or collinear lines).
#[must_use]
pub fn line_line_params_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(f64, f64)> {
    let (x1, y1) = (a0.x, a0.y);
    let (x2, y2) = (a1.x, a1.y);
    let (x3, y3) = (b0.x, b0.y);
    let (x4, y4) = (b1.x, b1.y);

    let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if d == 0.0 {
        tracing::trace!(d, "determinant is zero, lines are parallel");
        return None;
    }
    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / d;
    let s = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / d;
    Some((t, s))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(t, s)` only when both parameters lie in `[0, 1]`, i.e. the crossing
/// falls inside both finite segments. No tolerance is applied at the endpoints.
#[must_use]
pub fn segment_segment_params_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(f64, f64)> {
    let (t, s) = line_line_params_2d(a0, a1, b0, b1)?;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&s) {
        Some((t, s))
    } else {
        tracing::trace!(t, s, "crossing lies outside the segments");
        None
    }
}

/// Linear interpolation between `a` and `b` with `t` clamped to `[0, 1]`.
#[must_use]
pub fn lerp_clamped(a: &Point2, b: &Point2, t: f64) -> Point2 {
    let k = t.clamp(0.0, 1.0);
    Point2::new(a.x + k * (b.x - a.x), a.y + k * (b.y - a.y))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn line_line_perpendicular() {
        let (t, s) =
            line_line_params_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.5, -1.0), &p(0.5, 0.0)).unwrap();
        assert_abs_diff_eq!(t, 0.5);
        assert_abs_diff_eq!(s, 1.0);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        assert!(
            line_line_params_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0)).is_none()
        );
    }

    #[test]
    fn line_line_collinear_returns_none() {
        assert!(
            line_line_params_2d(&p(0.0, 0.0), &p(1.0, 1.0), &p(0.5, 0.5), &p(3.0, 3.0)).is_none()
        );
    }

    #[test]
    fn line_line_reports_parameters_outside_segments() {
        let (t, s) =
            line_line_params_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(10.0, 10.0), &p(20.0, 30.0))
                .unwrap();
        assert_abs_diff_eq!(t, 5.0);
        assert_abs_diff_eq!(s, 0.0);
    }

    #[test]
    fn segment_segment_crossing() {
        let (t, s) =
            segment_segment_params_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0))
                .unwrap();
        assert_abs_diff_eq!(t, 0.5);
        assert_abs_diff_eq!(s, 0.5);
    }

    #[test]
    fn segment_segment_touching_endpoints_counts() {
        let (t, s) =
            segment_segment_params_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 0.0), &p(1.0, 5.0))
                .unwrap();
        assert_abs_diff_eq!(t, 1.0);
        assert_abs_diff_eq!(s, 0.0);
    }

    #[test]
    fn segment_segment_no_crossing() {
        assert!(
            segment_segment_params_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(10.0, 10.0), &p(20.0, 30.0))
                .is_none()
        );
    }

    #[test]
    fn lerp_clamps_parameter() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 4.0);
        assert_eq!(lerp_clamped(&a, &b, 0.5), p(1.0, 2.0));
        assert_eq!(lerp_clamped(&a, &b, -3.0), a);
        assert_eq!(lerp_clamped(&a, &b, 7.0), b);
    }
}
