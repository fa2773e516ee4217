pub mod algebra;
pub mod error;
pub mod geometry;
pub mod math;

pub use algebra::{Matrix, Vector2};
pub use error::{PlanekitError, Result};
pub use geometry::{GeoObject, Line, Point, Rectangle};
