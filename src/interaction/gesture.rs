use crate::math::Vector;

/// Returns `true` if a press at `down` released at `up` counts as a click:
/// the pointer travelled at most `tolerance` along each axis.
#[must_use]
pub fn is_click(down: Vector, up: Vector, tolerance: f64) -> bool {
    (down.x - up.x).abs() <= tolerance && (down.y - up.y).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_travel_is_click() {
        assert!(is_click(Vector::new(100.0, 100.0), Vector::new(102.0, 103.0), 5.0));
        assert!(is_click(Vector::new(100.0, 100.0), Vector::new(105.0, 95.0), 5.0));
    }

    #[test]
    fn large_travel_is_drag() {
        assert!(!is_click(Vector::new(100.0, 100.0), Vector::new(200.0, 200.0), 5.0));
        assert!(!is_click(Vector::new(100.0, 100.0), Vector::new(100.0, 105.5), 5.0));
    }
}
