mod line;
mod point;
mod rectangle;

use std::fmt;

pub use line::Line;
pub use point::Point;
pub use rectangle::Rectangle;

/// Capability shared by the named geometric entities.
///
/// Each type decides for itself whether [`GeoObject::duplicate`] keeps the name.
pub trait GeoObject: fmt::Display {
    /// The entity's label, empty when unnamed.
    fn name(&self) -> &str;

    /// Deep copy of the entity's geometry.
    #[must_use]
    fn duplicate(&self) -> Self
    where
        Self: Sized;

    /// Human-readable description, the same text as `Display`.
    fn describe(&self) -> String {
        self.to_string()
    }
}
