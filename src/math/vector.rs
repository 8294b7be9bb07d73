use std::ops::{Add, Div, Mul, Sub};

use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Immutable 2D value used for vertex positions and pointer coordinates.
///
/// Every operation returns a fresh value. Arithmetic comes in two flavours:
/// componentwise against another `Vector` (`*_vector`), or against scalars
/// (`*_scalars`) where the second scalar is optional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise sum.
    #[must_use]
    pub fn add_vector(self, other: Vector) -> Self {
        Self::from(Vector2::from(self) + Vector2::from(other))
    }

    /// Adds `x` to the x component and `y` (default 0) to the y component.
    #[must_use]
    pub fn add_scalars(self, x: f64, y: Option<f64>) -> Self {
        Self::new(self.x + x, self.y + y.unwrap_or(0.0))
    }

    /// Componentwise difference.
    #[must_use]
    pub fn subtract_vector(self, other: Vector) -> Self {
        Self::from(Vector2::from(self) - Vector2::from(other))
    }

    /// Subtracts `x` from the x component and `y` (default 0) from the y component.
    #[must_use]
    pub fn subtract_scalars(self, x: f64, y: Option<f64>) -> Self {
        Self::new(self.x - x, self.y - y.unwrap_or(0.0))
    }

    /// Componentwise product.
    #[must_use]
    pub fn multiply_vector(self, other: Vector) -> Self {
        Self::from(Vector2::from(self).component_mul(&Vector2::from(other)))
    }

    /// Scales by `x` and `y`; an omitted `y` reuses `x`, giving a uniform scale.
    #[must_use]
    pub fn multiply_scalars(self, x: f64, y: Option<f64>) -> Self {
        Self::new(self.x * x, self.y * y.unwrap_or(x))
    }

    /// Componentwise quotient.
    #[must_use]
    pub fn divide_vector(self, other: Vector) -> Self {
        Self::from(Vector2::from(self).component_div(&Vector2::from(other)))
    }

    /// Divides by `x` and `y`; an omitted `y` reuses `x`.
    #[must_use]
    pub fn divide_scalars(self, x: f64, y: Option<f64>) -> Self {
        Self::new(self.x / x, self.y / y.unwrap_or(x))
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(self) -> f64 {
        Vector2::from(self).norm()
    }

    /// Standard dot product.
    #[must_use]
    pub fn dot(self, other: Vector) -> f64 {
        Vector2::from(self).dot(&Vector2::from(other))
    }

    /// 2D cross product (z component of the 3D cross product).
    #[must_use]
    pub fn cross(self, other: Vector) -> f64 {
        Vector2::from(self).perp(&Vector2::from(other))
    }

    /// Distance between two positions.
    #[must_use]
    pub fn distance(self, other: Vector) -> f64 {
        nalgebra::distance(&Point2::from(self), &Point2::from(other))
    }

    /// Divides both components by the length.
    ///
    /// A zero-length vector yields NaN components; use
    /// [`Vector::try_normalize`] to get an error instead.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        self.divide_scalars(len, None)
    }

    /// Normalizes, rejecting zero-length vectors.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the length is below tolerance.
    pub fn try_normalize(self) -> Result<Self> {
        let len = self.length();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self.divide_scalars(len, None))
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector> for Vector2 {
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for Point2 {
    fn from(v: Vector) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        self.add_vector(other)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        self.subtract_vector(other)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        self.multiply_scalars(k, None)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, k: f64) -> Vector {
        self.divide_scalars(k, None)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn scalar_defaults() {
        let v = Vector::new(2.0, 3.0);
        assert_eq!(v.add_scalars(1.0, None), Vector::new(3.0, 3.0));
        assert_eq!(v.subtract_scalars(1.0, None), Vector::new(1.0, 3.0));
        assert_eq!(v.multiply_scalars(2.0, None), Vector::new(4.0, 6.0));
        assert_eq!(v.divide_scalars(2.0, None), Vector::new(1.0, 1.5));
        assert_eq!(v.multiply_scalars(2.0, Some(10.0)), Vector::new(4.0, 30.0));
    }

    #[test]
    fn componentwise_ops() {
        let a = Vector::new(6.0, 8.0);
        let b = Vector::new(2.0, 4.0);
        assert_eq!(a.add_vector(b), Vector::new(8.0, 12.0));
        assert_eq!(a.subtract_vector(b), Vector::new(4.0, 4.0));
        assert_eq!(a.multiply_vector(b), Vector::new(12.0, 32.0));
        assert_eq!(a.divide_vector(b), Vector::new(3.0, 2.0));
        assert_eq!(a + b, a.add_vector(b));
        assert_eq!(a * 0.5, Vector::new(3.0, 4.0));
    }

    #[test]
    fn length_dot_and_distance() {
        let v = Vector::new(3.0, 4.0);
        assert_relative_eq!(v.length(), 5.0);
        assert_relative_eq!(v.dot(Vector::new(1.0, 2.0)), 11.0);
        assert_relative_eq!(Vector::new(1.0, 1.0).distance(Vector::new(4.0, 5.0)), 5.0);
        assert_relative_eq!(Vector::new(1.0, 0.0).cross(Vector::new(0.0, 1.0)), 1.0);
    }

    #[test]
    fn normalize_basic() {
        let n = Vector::new(3.0, 4.0).normalize();
        assert_abs_diff_eq!(n.x, 0.6, epsilon = TOLERANCE);
        assert_abs_diff_eq!(n.y, 0.8, epsilon = TOLERANCE);
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vector::default().normalize();
        assert!(n.x.is_nan() && n.y.is_nan());
        assert!(!n.is_finite());
    }

    #[test]
    fn try_normalize_zero_fails() {
        assert!(Vector::default().try_normalize().is_err());
        let n = Vector::new(0.0, 2.0).try_normalize().unwrap();
        assert_eq!(n, Vector::new(0.0, 1.0));
    }

    proptest! {
        #[test]
        fn add_then_subtract_is_identity(
            ax in -1e6f64..1e6, ay in -1e6f64..1e6,
            bx in -1e6f64..1e6, by in -1e6f64..1e6,
        ) {
            let a = Vector::new(ax, ay);
            let b = Vector::new(bx, by);
            let r = a.add_vector(b).subtract_vector(b);
            prop_assert!((r.x - a.x).abs() <= 1e-6);
            prop_assert!((r.y - a.y).abs() <= 1e-6);
        }

        #[test]
        fn multiply_then_divide_is_identity(
            x in -1e6f64..1e6, y in -1e6f64..1e6,
            k in prop_oneof![-1e3f64..-1e-3, 1e-3f64..1e3],
        ) {
            let v = Vector::new(x, y);
            let r = v.multiply_scalars(k, None).divide_scalars(k, None);
            prop_assert!((r.x - v.x).abs() <= 1e-9 * v.x.abs().max(1.0));
            prop_assert!((r.y - v.y).abs() <= 1e-9 * v.y.abs().max(1.0));
        }
    }
}
