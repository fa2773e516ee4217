use std::fmt;

use crate::algebra::Vector2;
use crate::math::{format_number, Point2};

use super::GeoObject;

/// A named 2D coordinate.
///
/// Equality compares `x` and `y` only; the name is a label.
#[derive(Debug, Clone, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub name: String,
}

impl Point {
    /// Creates an unnamed point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            name: String::new(),
        }
    }

    /// Creates a point with a label.
    #[must_use]
    pub fn named(x: f64, y: f64, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            name: name.into(),
        }
    }

    /// Position vector of this point.
    #[must_use]
    pub fn to_vector(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub(crate) fn coords(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl GeoObject for Point {
    fn name(&self) -> &str {
        &self.name
    }

    fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{})",
            self.name,
            format_number(self.x),
            format_number(self.y)
        )
    }
}
