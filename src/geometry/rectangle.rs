use std::fmt;

use super::{GeoObject, Line, Point};

/// An axis-aligned rectangle spanned by its top-left and bottom-right corners.
///
/// Corners are expected to satisfy `bottom_right >= top_left` on both axes. This is
/// not checked: a swapped rectangle reports negative width, height or area.
#[derive(Debug, Clone, Default)]
pub struct Rectangle {
    pub top_left: Point,
    pub bottom_right: Point,
    pub name: String,
}

impl Rectangle {
    /// Creates an unnamed rectangle.
    #[must_use]
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
            name: String::new(),
        }
    }

    /// Creates a rectangle with a label.
    #[must_use]
    pub fn named(top_left: Point, bottom_right: Point, name: impl Into<String>) -> Self {
        Self {
            top_left,
            bottom_right,
            name: name.into(),
        }
    }

    /// Signed horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    /// Signed vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    /// Inclusive containment: points on the boundary are inside.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let (l, t) = (self.top_left.x, self.top_left.y);
        let (r, b) = (self.bottom_right.x, self.bottom_right.y);
        [
            self.top_left.clone(),
            Point::new(r, t),
            self.bottom_right.clone(),
            Point::new(l, b),
        ]
    }

    /// Boundary segments, each running from one corner to the next in
    /// [`Rectangle::corners`] order.
    #[must_use]
    pub fn edges(&self) -> [Line; 4] {
        let [a, b, c, d] = self.corners();
        [
            Line::new(a.clone(), b.clone()),
            Line::new(b, c.clone()),
            Line::new(c, d.clone()),
            Line::new(d, a),
        ]
    }
}

impl GeoObject for Rectangle {
    fn name(&self) -> &str {
        &self.name
    }

    /// Copies both corners. The rectangle's own name is not carried over.
    fn duplicate(&self) -> Self {
        Rectangle::new(self.top_left.clone(), self.bottom_right.clone())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{}]", self.name, self.top_left, self.bottom_right)
    }
}
