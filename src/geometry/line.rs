use std::fmt;

use crate::algebra::Vector2;
use crate::math::format_number;
use crate::math::intersect_2d::{lerp_clamped, segment_segment_params_2d};

use super::{GeoObject, Point};

/// A line segment between two points.
///
/// Undefined quantities (the slope of a vertical line, the crossing of two
/// disjoint segments, ...) are reported as `None`, never as errors.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub name: String,
}

impl Line {
    /// Creates an unnamed segment.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            name: String::new(),
        }
    }

    /// Creates a segment with a label.
    #[must_use]
    pub fn named(start: Point, end: Point, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }

    /// Slope `dy / dx`, or `None` when the line is vertical.
    #[must_use]
    pub fn slope(&self) -> Option<f64> {
        if self.start.x == self.end.x {
            return None;
        }
        Some((self.end.y - self.start.y) / (self.end.x - self.start.x))
    }

    /// Where the supporting line crosses the y-axis, `None` when vertical.
    #[must_use]
    pub fn y_intercept(&self) -> Option<f64> {
        let k = self.slope()?;
        Some(self.start.y - k * self.start.x)
    }

    /// Where the supporting line crosses the x-axis.
    ///
    /// A vertical line yields its own x. A horizontal line yields `None`, even when
    /// it lies on the x-axis itself.
    #[must_use]
    pub fn x_intercept(&self) -> Option<f64> {
        let (Some(k), Some(b)) = (self.slope(), self.y_intercept()) else {
            return Some(self.start.x);
        };
        if k == 0.0 {
            return None;
        }
        Some(-b / k)
    }

    /// Returns the parametric evaluator `t -> start + t * (end - start)`.
    ///
    /// `t` is clamped to `[0, 1]`, so the evaluator never leaves the segment.
    pub fn equation_fn(&self) -> impl Fn(f64) -> Point {
        let (a, b) = (self.start.coords(), self.end.coords());
        move |t| Point::from(lerp_clamped(&a, &b, t))
    }

    /// Crossing point of the two finite segments.
    ///
    /// Returns `None` for parallel or collinear segments (no overlap handling) and
    /// when the supporting lines cross outside either segment.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let (t, _) = segment_segment_params_2d(
            &self.start.coords(),
            &self.end.coords(),
            &other.start.coords(),
            &other.end.coords(),
        )?;
        Some(self.equation_fn()(t))
    }

    /// New unnamed segment with the endpoints swapped.
    #[must_use]
    pub fn flip(&self) -> Line {
        Line::new(self.end.clone(), self.start.clone())
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        Vector2::from_points(&self.start, &self.end).magnitude()
    }

    /// Point halfway between the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.equation_fn()(0.5)
    }

    /// Renders the supporting line as an equation, e.g. `y = 2x - 1` or `x = 3`.
    #[must_use]
    pub fn to_equation(&self) -> String {
        let (Some(k), Some(b)) = (self.slope(), self.y_intercept()) else {
            return format!("x = {}", format_number(self.start.x));
        };
        if k == 0.0 {
            return format!("y = {}", format_number(self.start.y));
        }
        let k = format_number(k);
        if b == 0.0 {
            format!("y = {k}x")
        } else if b > 0.0 {
            format!("y = {k}x + {}", format_number(b))
        } else {
            format!("y = {k}x - {}", format_number(-b))
        }
    }
}

impl GeoObject for Line {
    fn name(&self) -> &str {
        &self.name
    }

    fn duplicate(&self) -> Self {
        Line::named(self.start.clone(), self.end.clone(), self.name.clone())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}->{}]", self.name, self.start, self.end)
    }
}
