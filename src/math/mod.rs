pub mod polygon_2d;
pub mod vector;

pub use vector::Vector;

/// 2D point type used for distance computations.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type backing [`Vector`] arithmetic.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
