//! Small pieces of plane geometry and vector math used by the conversions. Lines are always in
//! slope-intercept form, and rays always start at the origin.

/// A line `y = slope * x + intercept` in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// The slope of the line.
    pub slope: f64,
    /// The y-coordinate where the line crosses the vertical axis.
    pub intercept: f64,
}

/// Sum of the pairwise products of two 3-vectors.
pub fn dot_product(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// The x-coordinate where two lines cross. Parallel lines have no crossing and give an infinite or
/// NaN result, so callers must make sure the slopes differ.
pub fn intersect_line(line1: &Line, line2: &Line) -> f64 {
    (line1.intercept - line2.intercept) / (line2.slope - line1.slope)
}

/// Distance of the point `(x, y)` from the origin.
pub fn distance_from_pole(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// Length of the ray leaving the origin at angle `theta` (in radians) until it reaches `line`, or
/// `None` if the ray points away from the line or never meets it.
///
/// Solving `b + m * (len * cos θ) = len * sin θ` for `len` gives `b / (sin θ - m * cos θ)`.
pub fn length_of_ray_until_intersect(theta: f64, line: &Line) -> Option<f64> {
    let length = line.intercept / (theta.sin() - line.slope * theta.cos());
    if length < 0. || !length.is_finite() {
        None
    } else {
        Some(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_dot_product() {
        assert_eq!(dot_product(&[1., 2., 3.], &[4., -5., 6.]), 12.);
        assert_eq!(dot_product(&[0., 0., 0.], &[4., -5., 6.]), 0.);
    }

    #[test]
    fn test_intersect_line() {
        let l1 = Line { slope: 1., intercept: 0. };
        let l2 = Line { slope: -1., intercept: 4. };
        assert_eq!(intersect_line(&l1, &l2), 2.);
        assert_eq!(intersect_line(&l2, &l1), 2.);
    }

    #[test]
    fn test_parallel_lines_do_not_meet() {
        let l1 = Line { slope: 2., intercept: 0. };
        let l2 = Line { slope: 2., intercept: 1. };
        assert!(!intersect_line(&l1, &l2).is_finite());
    }

    #[test]
    fn test_distance_from_pole() {
        assert_eq!(distance_from_pole(3., 4.), 5.);
        assert_eq!(distance_from_pole(0., 0.), 0.);
    }

    #[test]
    fn test_ray_hits_horizontal_line() {
        // straight up into y = 2
        let line = Line { slope: 0., intercept: 2. };
        let len = length_of_ray_until_intersect(PI / 2., &line).unwrap();
        assert!((len - 2.).abs() <= 1e-12);
        // diagonal into the same line
        let len = length_of_ray_until_intersect(PI / 4., &line).unwrap();
        assert!((len - 2. * 2f64.sqrt()).abs() <= 1e-12);
    }

    #[test]
    fn test_ray_pointing_away() {
        let line = Line { slope: 0., intercept: 2. };
        assert_eq!(length_of_ray_until_intersect(-PI / 2., &line), None);
        // running parallel to the line never reaches it
        assert_eq!(length_of_ray_until_intersect(0., &line), None);
    }
}
