use std::fmt::Write as _;

use crate::math::polygon_2d::{self, ConvexityRule, InteriorAngle};
use crate::math::Vector;

/// Interior angle reported for one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleEntry {
    pub index: usize,
    pub angle: InteriorAngle,
}

/// Per-frame angle and convexity report for a polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsReport {
    pub entries: Vec<AngleEntry>,
    /// Sum of all angles in degrees; NaN if any angle is degenerate.
    pub total_degrees: f64,
    pub convex: bool,
}

impl DiagnosticsReport {
    /// Builds the report for a closed polygon through `points`.
    #[must_use]
    pub fn compute(points: &[Vector], rule: ConvexityRule) -> Self {
        let angles = polygon_2d::interior_angles(points);
        let convex = rule.is_convex(points, &angles);
        Self {
            total_degrees: polygon_2d::total_degrees(&angles),
            entries: angles
                .into_iter()
                .enumerate()
                .map(|(index, angle)| AngleEntry { index, angle })
                .collect(),
            convex,
        }
    }

    /// Left text column: vertex labels, then the captions for the summary rows.
    #[must_use]
    pub fn left_column(&self) -> String {
        let mut out = String::from("Diagnostics:\n");
        for entry in &self.entries {
            let _ = writeln!(out, "Point: {}", entry.index);
        }
        out.push_str("\nTotal:\nIs convex?:");
        out
    }

    /// Right text column: angles in degrees, the total, and the verdict.
    #[must_use]
    pub fn right_column(&self) -> String {
        let mut out = String::from("\n");
        for entry in &self.entries {
            let _ = writeln!(out, "{:.1}deg", entry.angle.degrees_or_nan());
        }
        let _ = write!(out, "\n{:.1}\n{}", self.total_degrees, self.convex);
        out
    }
}
