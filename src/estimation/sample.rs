use log::debug;

use crate::error::{FitError, Result};
use crate::math::polyline_2d::{linspace, point_along, polyline_length};
use crate::math::{Point2, TOLERANCE};

/// A point taken along a surveyed centerline at a known travel distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadSample {
    /// Distance travelled along the polyline from its first vertex.
    pub distance: f64,
    /// Interpolated position at that distance.
    pub position: Point2,
}

/// Resamples a centerline polyline at an even interval.
///
/// Survey vertices arrive unevenly spaced, so the polyline is measured
/// and re-walked at a fixed `step`. The sample count is
/// `floor(length / step)` and the samples span the whole polyline,
/// endpoints included, which stretches the effective spacing to
/// `length / (count - 1)`.
///
/// # Errors
///
/// Returns [`FitError::InvalidStep`] if `step` is not a positive finite
/// length, and [`FitError::DegeneratePolyline`] if the centerline has
/// fewer than two vertices or is too short to yield three samples.
pub fn sample_centerline(centerline: &[Point2], step: f64) -> Result<Vec<RoadSample>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(FitError::InvalidStep { step }.into());
    }
    if centerline.len() < 2 {
        return Err(FitError::DegeneratePolyline.into());
    }

    let length = polyline_length(centerline);
    if length < TOLERANCE {
        return Err(FitError::DegeneratePolyline.into());
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (length / step).floor() as usize;
    if count < 3 {
        return Err(FitError::DegeneratePolyline.into());
    }

    let samples: Vec<RoadSample> = linspace(0.0, length, count)
        .into_iter()
        .map(|distance| RoadSample {
            distance,
            position: point_along(centerline, distance),
        })
        .collect();

    debug!(
        "resampled {} vertices ({length:.3} m) into {} samples",
        centerline.len(),
        samples.len()
    );

    Ok(samples)
}
