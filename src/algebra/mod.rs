//! Free vectors and dense matrices.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector2;
