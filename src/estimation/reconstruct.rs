use log::debug;

use crate::error::{FitError, Result};
use crate::geometry::Alignment;
use crate::math::angle_2d::signed_angle;
use crate::math::{Point2, TOLERANCE};

use super::ransac::CircleFit;

/// Stretch factor applied to reconstructed tangent legs so the
/// alignment clears the arc it has to carry.
pub const TANGENT_MARGIN_SCALE: f64 = 1.05;

/// Reconstructs a three-point tangent alignment around a fitted circle.
///
/// The first and last inliers are projected radially onto the circle to
/// fix the curve ends. The apex sits on the ray from the center through
/// the chord midpoint at `radius + external`, which makes the projected
/// ends exactly the tangency points of the alignment. The legs are then
/// stretched by `margin_scale` about the apex so a curve of the fitted
/// radius sits inside them with room to spare.
///
/// `samples` must be the point slice the fit was produced from.
///
/// # Errors
///
/// Returns [`FitError::InvalidMarginScale`] for a margin below 1,
/// [`FitError::TooFewSamples`] if the fit carries fewer than two
/// inliers, and [`FitError::ApexUnbounded`] if the arc subtends a half
/// circle, which sends the apex to infinity. Alignment validation
/// errors propagate unchanged.
///
/// # Panics
///
/// Panics if the fit's inlier indices do not index into `samples`.
pub fn reconstruct_alignment(
    fit: &CircleFit,
    samples: &[Point2],
    margin_scale: f64,
) -> Result<Alignment> {
    if !margin_scale.is_finite() || margin_scale < 1.0 {
        return Err(FitError::InvalidMarginScale {
            scale: margin_scale,
        }
        .into());
    }
    if fit.inliers.len() < 2 {
        return Err(FitError::TooFewSamples {
            count: fit.inliers.len(),
        }
        .into());
    }

    let first = samples[fit.inliers[0]];
    let last = samples[fit.inliers[fit.inliers.len() - 1]];
    let pc = project_to_circle(&first, &fit.center, fit.radius);
    let pt = project_to_circle(&last, &fit.center, fit.radius);

    let delta = signed_angle(&(pc - fit.center), &(pt - fit.center));

    // The apex of a half-circle arc lies at infinity.
    let half_secant = (delta / 2.0).cos();
    if half_secant < TOLERANCE {
        return Err(FitError::ApexUnbounded { deflection: delta }.into());
    }
    let external = fit.radius / half_secant - fit.radius;

    let chord_mid = pc + (pt - pc) * 0.5;
    let outward = chord_mid - fit.center;
    if outward.norm() < TOLERANCE {
        return Err(FitError::ApexUnbounded { deflection: delta }.into());
    }
    let pi = fit.center + outward.normalize() * (fit.radius + external);

    debug!(
        "reconstructed apex at ({:.3}, {:.3}) subtending {delta:.4} rad",
        pi.x, pi.y
    );

    Alignment::new(pc, pi, pt)?.scaled_about_pi(margin_scale)
}

/// Radial projection onto the fitted circle. A sample that coincides
/// with the center projects to a non-finite point, which alignment
/// validation rejects downstream.
fn project_to_circle(sample: &Point2, center: &Point2, radius: f64) -> Point2 {
    center + (sample - center).normalize() * radius
}
