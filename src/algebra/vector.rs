use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::{Complex, UnitComplex};

use crate::geometry::Point;
use crate::math::{format_number, TOLERANCE};

/// A free 2D vector.
///
/// Stored as a complex number (`x` is the real part, `y` the imaginary part) so
/// rotation is a multiplication by a unit complex number and magnitude is the modulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    data: Complex<f64>,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            data: Complex::new(x, y),
        }
    }

    /// Displacement from `from` to `to`.
    #[must_use]
    pub fn from_points(from: &Point, to: &Point) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.data.re
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.data.im
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.data.norm()
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self {
            data: self.data + other.data,
        }
    }

    /// Scales both components by `scalar`.
    #[must_use]
    pub fn multiply(self, scalar: f64) -> Self {
        Self {
            data: self.data * scalar,
        }
    }

    /// Rotates counter-clockwise by `angle` radians.
    #[must_use]
    pub fn rotate(self, angle: f64) -> Self {
        Self {
            data: self.data * UnitComplex::new(angle).into_inner(),
        }
    }

    /// Distance between the tips of the two vectors.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.data - other.data).norm()
    }

    /// Scalar (z-component) cross product `x1 * y2 - y1 * x2`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Returns true when the cross product is exactly zero.
    ///
    /// There is no tolerance: vectors produced by rotation chains rarely compare
    /// parallel. Use [`Vector2::cross`] with an explicit epsilon for that.
    #[must_use]
    pub fn parallel(self, other: Self) -> bool {
        self.cross(other).abs() <= 0.0
    }

    /// Smallest angle between the two vectors, in radians within `[0, PI]`.
    #[must_use]
    pub fn angle(self, other: Self) -> f64 {
        self.cross(other).atan2(self.dot(other)).abs()
    }

    /// Componentwise comparison within `eps`.
    #[must_use]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x() - other.x()).abs() <= eps && (self.y() - other.y()).abs() <= eps
    }

    /// [`Vector2::approx_eq`] within [`TOLERANCE`].
    #[must_use]
    pub fn is_close(self, other: Self) -> bool {
        self.approx_eq(other, TOLERANCE)
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            data: self.data - rhs.data,
        }
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self { data: -self.data }
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.multiply(rhs)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "⟨{},{}⟩",
            format_number(self.x()),
            format_number(self.y())
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn components() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.x(), 3.0);
        assert_eq!(v.y(), 4.0);
    }

    #[test]
    fn magnitude_is_modulus() {
        assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vector2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn add_and_multiply() {
        let sum = Vector2::new(1.0, 2.0).add(Vector2::new(3.0, 4.0));
        assert_eq!(sum, Vector2::new(4.0, 6.0));
        let scaled = Vector2::new(1.0, 2.0).multiply(3.0);
        assert_eq!(scaled, Vector2::new(3.0, 6.0));
    }

    #[test]
    fn operators_match_methods() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a * 2.5, a.multiply(2.5));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn rotate_quarter_turn_counter_clockwise() {
        let r = Vector2::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert_abs_diff_eq!(r.x(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_preserves_magnitude() {
        let v = Vector2::new(-2.5, 7.0);
        assert_relative_eq!(v.rotate(1.234).magnitude(), v.magnitude(), epsilon = 1e-12);
    }

    #[test]
    fn distance_between_tips() {
        assert_eq!(Vector2::new(1.0, 2.0).distance(Vector2::new(4.0, 6.0)), 5.0);
    }

    #[test]
    fn cross_and_dot() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a.cross(b), -2.0);
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn parallel_is_exact() {
        assert!(Vector2::new(1.0, 2.0).parallel(Vector2::new(2.0, 4.0)));
        assert!(Vector2::new(1.0, 2.0).parallel(Vector2::new(-1.0, -2.0)));
        assert!(!Vector2::new(1.0, 2.0).parallel(Vector2::new(1.0, 2.000_001)));
    }

    #[test]
    fn rotation_chain_needs_tolerance() {
        // A full turn in seven steps lands near, not necessarily on, the start.
        let v = Vector2::new(1.0, 1.0);
        let mut w = v;
        for _ in 0..7 {
            w = w.rotate(2.0 * PI / 7.0);
        }
        assert!(w.approx_eq(v, 1e-9));
        assert!(w.cross(v).abs() < 1e-9);
    }

    #[test]
    fn half_turn_is_not_exactly_parallel() {
        let x = Vector2::new(1.0, 0.0);
        let flipped = x.rotate(PI);
        // sin(PI) is 1.22e-16, not 0, so the exact test says no.
        assert!(flipped.cross(x) != 0.0);
        assert!(!x.parallel(flipped));
        assert!(flipped.is_close(Vector2::new(-1.0, 0.0)));
        assert!(x.parallel(Vector2::new(-1.0, 0.0)));
    }

    #[test]
    fn is_close_uses_global_tolerance() {
        let v = Vector2::new(1.0, 2.0);
        assert!(v.is_close(Vector2::new(1.0 + TOLERANCE / 2.0, 2.0)));
        assert!(!v.is_close(Vector2::new(1.0 + 10.0 * TOLERANCE, 2.0)));
    }

    #[test]
    fn angle_is_unsigned() {
        let x = Vector2::new(1.0, 0.0);
        assert_relative_eq!(x.angle(Vector2::new(0.0, 1.0)), FRAC_PI_2);
        assert_relative_eq!(x.angle(Vector2::new(0.0, -1.0)), FRAC_PI_2);
        assert_relative_eq!(x.angle(Vector2::new(-1.0, 0.0)), PI);
        assert_eq!(x.angle(x), 0.0);
    }

    #[test]
    fn from_points_is_displacement() {
        let v = Vector2::from_points(&Point::new(1.0, 1.0), &Point::new(4.0, -1.0));
        assert_eq!(v, Vector2::new(3.0, -2.0));
    }

    #[test]
    fn copy_is_independent() {
        let v = Vector2::new(1.0, 2.0);
        let w = v.multiply(2.0);
        assert_eq!(v, Vector2::new(1.0, 2.0));
        assert_eq!(w, Vector2::new(2.0, 4.0));
    }

    #[test]
    fn display_uses_angle_brackets() {
        assert_eq!(Vector2::new(1.0, 2.0).to_string(), "⟨1,2⟩");
        assert_eq!(Vector2::new(-0.5, 0.0).to_string(), "⟨-0.5,0⟩");
        assert_eq!(
            Vector2::new(1.0, 0.0).rotate(PI).to_string(),
            "⟨-1,1.2246467991473532e-16⟩"
        );
    }
}
