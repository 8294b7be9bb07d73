use super::{Vector, TOLERANCE};

/// Tolerance, in degrees, for the angle-sum convexity test.
pub const ANGLE_SUM_TOLERANCE_DEG: f64 = 1e-6;

/// Above this cosine magnitude `acos` loses precision, and the angle is taken
/// from the cross and dot products of the two edges instead.
const NEAR_STRAIGHT_COS: f64 = 0.9;

/// Interior angle at a polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteriorAngle {
    /// A well-defined angle in radians, in `[0, π]`.
    Radians(f64),
    /// The vertex coincides with one of its neighbours, so no angle exists.
    Degenerate,
}

impl InteriorAngle {
    /// Returns the angle in degrees, or `None` if degenerate.
    #[must_use]
    pub fn degrees(self) -> Option<f64> {
        match self {
            Self::Radians(r) => Some(r.to_degrees()),
            Self::Degenerate => None,
        }
    }

    /// Returns the angle in degrees, with NaN standing in for a degenerate angle.
    #[must_use]
    pub fn degrees_or_nan(self) -> f64 {
        self.degrees().unwrap_or(f64::NAN)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        matches!(self, Self::Degenerate)
    }
}

/// Returns the indices of the previous and next vertex, wrapping around.
///
/// `len` must be non-zero.
#[must_use]
pub fn neighbour_indices(index: usize, len: usize) -> (usize, usize) {
    let prev = if index == 0 { len - 1 } else { index - 1 };
    let next = if index + 1 >= len { 0 } else { index + 1 };
    (prev, next)
}

/// Computes the angle at `cur` between `prev` and `next` by the law of cosines.
///
/// With `a = |cur next|`, `b = |cur prev|` and `c = |prev next|` the angle is
/// `acos((a² + b² − c²) / 2ab)`. The cosine is clamped to `[-1, 1]` to absorb
/// rounding on collinear triples.
///
/// Near 0° and 180° the same angle is computed as `atan2(|u × v|, u · v)` of
/// the edges `u = prev − cur` and `v = next − cur`, so a straight vertex comes
/// out as exactly 180° whatever the edge direction.
#[must_use]
pub fn interior_angle(prev: Vector, cur: Vector, next: Vector) -> InteriorAngle {
    let a = cur.distance(next);
    let b = cur.distance(prev);
    let c = prev.distance(next);
    if a < TOLERANCE || b < TOLERANCE {
        return InteriorAngle::Degenerate;
    }
    let cos = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    if cos.abs() < NEAR_STRAIGHT_COS {
        return InteriorAngle::Radians(cos.acos());
    }
    let u = prev - cur;
    let v = next - cur;
    InteriorAngle::Radians(u.cross(v).abs().atan2(u.dot(v)))
}

/// Computes the interior angle at every vertex of a closed polygon.
#[must_use]
pub fn interior_angles(points: &[Vector]) -> Vec<InteriorAngle> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (prev, next) = neighbour_indices(i, n);
            interior_angle(points[prev], points[i], points[next])
        })
        .collect()
}

/// Sums angles in degrees. Any degenerate angle makes the total NaN.
#[must_use]
pub fn total_degrees(angles: &[InteriorAngle]) -> f64 {
    angles.iter().fold(0.0, |acc, a| acc + a.degrees_or_nan())
}

/// How a polygon's convexity verdict is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvexityRule {
    /// Convex iff there are at least three vertices, no angle is degenerate,
    /// and the angle total equals `(n − 2) · 180°`.
    ///
    /// The law of cosines never reports a reflex angle, so a concave polygon
    /// always comes up short of the expected total.
    #[default]
    AngleSum,
    /// The angle total rounded to one decimal is a multiple of 60.
    ///
    /// Kept for compatibility with the behaviour of earlier releases; it is not
    /// a correct test for general polygons.
    LegacyDivisibleBy60,
    /// Every turn along the boundary has the same orientation.
    CrossProductSign,
}

impl ConvexityRule {
    /// Applies the rule to a polygon and its precomputed interior angles.
    #[must_use]
    pub fn is_convex(self, points: &[Vector], angles: &[InteriorAngle]) -> bool {
        match self {
            Self::AngleSum => {
                let n = points.len();
                if n < 3 || angles.iter().any(|a| a.is_degenerate()) {
                    return false;
                }
                #[allow(clippy::cast_precision_loss)]
                let expected = (n - 2) as f64 * 180.0;
                (total_degrees(angles) - expected).abs() < ANGLE_SUM_TOLERANCE_DEG
            }
            Self::LegacyDivisibleBy60 => {
                let tenths = (total_degrees(angles) * 10.0).round();
                tenths.is_finite() && tenths % 600.0 == 0.0
            }
            Self::CrossProductSign => turns_consistently(points),
        }
    }
}

/// Returns `true` if all non-collinear turns share one orientation.
fn turns_consistently(points: &[Vector]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0_f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let e1 = b - a;
        let e2 = c - b;
        if e1.length() < TOLERANCE || e2.length() < TOLERANCE {
            return false;
        }
        let turn = e1.cross(e2);
        if turn.abs() < TOLERANCE {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    sign != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pts(raw: &[(f64, f64)]) -> Vec<Vector> {
        raw.iter().copied().map(Vector::from).collect()
    }

    fn square() -> Vec<Vector> {
        pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn neighbours_wrap() {
        assert_eq!(neighbour_indices(0, 4), (3, 1));
        assert_eq!(neighbour_indices(3, 4), (2, 0));
        assert_eq!(neighbour_indices(0, 1), (0, 0));
    }

    #[test]
    fn square_angles() {
        let angles = interior_angles(&square());
        assert_eq!(angles.len(), 4);
        for a in &angles {
            assert_abs_diff_eq!(a.degrees_or_nan(), 90.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(total_degrees(&angles), 360.0, epsilon = 1e-9);
    }

    #[test]
    fn triangle_sums_to_180() {
        let angles = interior_angles(&pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]));
        assert_abs_diff_eq!(total_degrees(&angles), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn coincident_vertices_are_degenerate() {
        let a = interior_angle(
            Vector::new(1.0, 1.0),
            Vector::new(1.0, 1.0),
            Vector::new(5.0, 0.0),
        );
        assert!(a.is_degenerate());
        assert!(a.degrees_or_nan().is_nan());
        assert!(total_degrees(&[a, InteriorAngle::Radians(1.0)]).is_nan());
    }

    #[test]
    fn collinear_is_straight_angle() {
        let a = interior_angle(
            Vector::new(0.0, 0.0),
            Vector::new(1.0, 0.0),
            Vector::new(2.0, 0.0),
        );
        assert_abs_diff_eq!(a.degrees_or_nan(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_sum_rule() {
        let sq = square();
        assert!(ConvexityRule::AngleSum.is_convex(&sq, &interior_angles(&sq)));

        // Dart: the reflex vertex is reported as its acute complement.
        let dart = pts(&[(0.0, 0.0), (10.0, 5.0), (0.0, 10.0), (3.0, 5.0)]);
        assert!(!ConvexityRule::AngleSum.is_convex(&dart, &interior_angles(&dart)));

        let two = pts(&[(0.0, 0.0), (10.0, 0.0)]);
        assert!(!ConvexityRule::AngleSum.is_convex(&two, &interior_angles(&two)));
    }

    #[test]
    fn straight_vertex_on_diagonal_edge_stays_convex() {
        for shape in [
            pts(&[(0.0, 0.0), (1.0, 1.0), (3.0, 3.0), (0.0, 3.0)]),
            pts(&[(100.0, 100.0), (137.0, 151.0), (211.0, 253.0), (90.0, 300.0)]),
            pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (20.0, 10.0)]),
        ] {
            let angles = interior_angles(&shape);
            assert_abs_diff_eq!(angles[1].degrees_or_nan(), 180.0, epsilon = 1e-12);
            assert_abs_diff_eq!(total_degrees(&angles), 360.0, epsilon = 1e-9);
            assert!(ConvexityRule::AngleSum.is_convex(&shape, &angles));
            assert!(ConvexityRule::CrossProductSign.is_convex(&shape, &angles));
        }
    }

    #[test]
    fn sharp_angle_matches_law_of_cosines() {
        let a = interior_angle(
            Vector::new(10.0, 1.0),
            Vector::new(0.0, 0.0),
            Vector::new(10.0, 0.0),
        );
        assert_abs_diff_eq!(a.degrees_or_nan(), 0.1_f64.atan().to_degrees(), epsilon = 1e-9);
    }

    #[test]
    fn legacy_rule_accepts_multiples_of_60() {
        let sq = square();
        assert!(ConvexityRule::LegacyDivisibleBy60.is_convex(&sq, &interior_angles(&sq)));
        assert!(ConvexityRule::LegacyDivisibleBy60.is_convex(&[], &[]));

        let pentagon = pts(&[(0.0, 0.0), (10.0, 0.0), (13.0, 8.0), (5.0, 14.0), (-3.0, 8.0)]);
        let angles = interior_angles(&pentagon);
        assert!(ConvexityRule::LegacyDivisibleBy60.is_convex(&pentagon, &angles));
        assert!(ConvexityRule::AngleSum.is_convex(&pentagon, &angles));

        // Dart totals roughly 236.1 degrees.
        let dart = pts(&[(0.0, 0.0), (10.0, 5.0), (0.0, 10.0), (3.0, 5.0)]);
        assert!(!ConvexityRule::LegacyDivisibleBy60.is_convex(&dart, &interior_angles(&dart)));
    }

    #[test]
    fn cross_product_rule() {
        let sq = square();
        assert!(ConvexityRule::CrossProductSign.is_convex(&sq, &interior_angles(&sq)));
        let dart = pts(&[(0.0, 0.0), (10.0, 5.0), (0.0, 10.0), (3.0, 5.0)]);
        assert!(!ConvexityRule::CrossProductSign.is_convex(&dart, &interior_angles(&dart)));
        let dup = pts(&[(0.0, 0.0), (0.0, 0.0), (5.0, 5.0)]);
        assert!(!ConvexityRule::CrossProductSign.is_convex(&dup, &interior_angles(&dup)));
    }
}
