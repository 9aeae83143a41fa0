use super::{Point2, TOLERANCE};

/// Total length of a polyline.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Returns the point at `distance` along the polyline from its first vertex.
///
/// Distances are clamped: negative values return the first vertex, values
/// past the total length return the last. Zero-length segments are skipped.
///
/// # Panics
///
/// Panics if `points` is empty.
#[must_use]
pub fn point_along(points: &[Point2], distance: f64) -> Point2 {
    let mut remaining = distance.max(0.0);
    for w in points.windows(2) {
        let seg = w[1] - w[0];
        let len = seg.norm();
        if len < TOLERANCE {
            continue;
        }
        if remaining <= len {
            return w[0] + seg * (remaining / len);
        }
        remaining -= len;
    }
    points[points.len() - 1]
}

/// Evenly spaced values from `start` to `end` inclusive.
///
/// `num = 0` yields nothing and `num = 1` yields only `start`; otherwise the
/// last value is exactly `end`.
#[must_use]
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (num - 1) as f64;
            #[allow(clippy::cast_precision_loss)]
            let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            values[num - 1] = end;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn l_shape() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 3.0),
        ]
    }

    #[test]
    fn length_sums_segments() {
        assert!((polyline_length(&l_shape()) - 7.0).abs() < TOL);
        assert!(polyline_length(&l_shape()[..1]).abs() < TOL);
    }

    #[test]
    fn point_along_interpolates_across_vertices() {
        let pts = l_shape();

        let mid = point_along(&pts, 2.0);
        assert!((mid - Point2::new(2.0, 0.0)).norm() < TOL);

        let past_corner = point_along(&pts, 5.5);
        assert!((past_corner - Point2::new(4.0, 1.5)).norm() < TOL);
    }

    #[test]
    fn point_along_clamps_to_the_ends() {
        let pts = l_shape();
        assert!((point_along(&pts, -3.0) - pts[0]).norm() < TOL);
        assert!((point_along(&pts, 99.0) - pts[2]).norm() < TOL);
        assert!((point_along(&pts, 7.0) - pts[2]).norm() < TOL);
    }

    #[test]
    fn point_along_skips_zero_length_segments() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let p = point_along(&pts, 1.0);
        assert!((p - Point2::new(1.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn linspace_counts_and_endpoints() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.5, 9.0, 1), vec![2.5]);

        let vals = linspace(1.0, 3.0, 5);
        assert_eq!(vals.len(), 5);
        assert!((vals[0] - 1.0).abs() < TOL);
        assert!((vals[4] - 3.0).abs() < TOL);
        for w in vals.windows(2) {
            assert!((w[1] - w[0] - 0.5).abs() < TOL);
        }
    }
}
