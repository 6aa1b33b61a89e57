use crate::core::Point;

/// Returns the point at `radius` from `center` along `angle_degrees`.
///
/// Angles are in degrees, measured clockwise from the positive x-axis in
/// screen coordinates (y grows downward), so 90° points at 6 o'clock.
#[must_use]
pub fn arc_point(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = angle_degrees.to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Radius-domain addition: non-finite results collapse to 0.0.
#[must_use]
pub fn saturating_add(a: f64, b: f64) -> f64 {
    sanitize(a + b)
}

/// Radius-domain subtraction, clamped so the result never goes negative.
#[must_use]
pub fn saturating_sub(a: f64, b: f64) -> f64 {
    sanitize((a - b).max(0.0))
}

/// Radius-domain division that fails closed: a zero or non-finite
/// denominator yields 0.0 instead of NaN/infinity.
#[must_use]
pub fn saturating_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    sanitize(numerator / denominator)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_point_at_cardinal_angles() {
        let center = Point::new(100.0, 100.0);
        let east = arc_point(center, 50.0, 0.0);
        assert!((east.x - 150.0).abs() < 1e-9);
        assert!((east.y - 100.0).abs() < 1e-9);

        let south = arc_point(center, 50.0, 90.0);
        assert!((south.x - 100.0).abs() < 1e-9);
        assert!((south.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn division_by_zero_fails_closed() {
        assert_eq!(saturating_div(10.0, 0.0), 0.0);
        assert_eq!(saturating_div(f64::NAN, 2.0), 0.0);
    }

    #[test]
    fn subtraction_never_goes_negative() {
        assert_eq!(saturating_sub(10.0, 25.0), 0.0);
        assert_eq!(saturating_sub(25.0, 10.0), 15.0);
    }
}
