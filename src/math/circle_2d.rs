use super::{Point2, Vector2, TOLERANCE};

/// Returns the center and radius of the circle through three points.
///
/// Coordinates are shifted to the first point before solving so the
/// determinant stays well-conditioned for survey-scale inputs. Returns
/// `None` when the points are collinear within tolerance.
#[must_use]
pub fn circumcircle(a: &Point2, b: &Point2, c: &Point2) -> Option<(Point2, f64)> {
    let bx = b.x - a.x;
    let by = b.y - a.y;
    let cx = c.x - a.x;
    let cy = c.y - a.y;

    let d = 2.0 * (bx * cy - by * cx);
    if d.abs() < TOLERANCE {
        return None;
    }

    let b_sq = bx * bx + by * by;
    let c_sq = cx * cx + cy * cy;
    let ux = (cy * b_sq - by * c_sq) / d;
    let uy = (bx * c_sq - cx * b_sq) / d;

    let radius = (ux * ux + uy * uy).sqrt();
    if !radius.is_finite() {
        return None;
    }
    Some((Point2::new(a.x + ux, a.y + uy), radius))
}

/// Algebraic least-squares circle fit (Kåsa method).
///
/// Samples are centered on their centroid before the normal equations are
/// solved, which keeps the system well-conditioned for UTM-scale inputs.
/// Returns `None` for fewer than 3 samples or a singular (collinear) system.
#[must_use]
pub fn fit_circle_least_squares(points: &[Point2]) -> Option<(Point2, f64)> {
    if points.len() < 3 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let centroid_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let centroid_y = points.iter().map(|p| p.y).sum::<f64>() / n;

    let (mut suu, mut suv, mut svv) = (0.0, 0.0, 0.0);
    let (mut suz, mut svz, mut sz) = (0.0, 0.0, 0.0);
    for p in points {
        let u = p.x - centroid_x;
        let v = p.y - centroid_y;
        let z = u * u + v * v;
        suu += u * u;
        suv += u * v;
        svv += v * v;
        suz += u * z;
        svz += v * z;
        sz += z;
    }

    // Normal equations of u² + v² + D·u + E·v + F = 0; with Σu = Σv = 0 the
    // F row decouples and D, E come from a 2x2 solve.
    let m = nalgebra::Matrix2::new(suu, suv, suv, svv);
    let de = m.lu().solve(&Vector2::new(-suz, -svz))?;
    let f = -sz / n;

    let ux = -de.x / 2.0;
    let vy = -de.y / 2.0;
    let r_sq = ux * ux + vy * vy - f;
    if !r_sq.is_finite() || r_sq <= 0.0 {
        return None;
    }
    Some((
        Point2::new(centroid_x + ux, centroid_y + vy),
        r_sq.sqrt(),
    ))
}

/// Radial distance from a point to a circle, `| |p - center| - radius |`.
#[must_use]
pub fn circle_residual(point: &Point2, center: &Point2, radius: f64) -> f64 {
    ((point - center).norm() - radius).abs()
}
