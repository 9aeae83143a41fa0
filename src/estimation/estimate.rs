use log::debug;

use crate::error::Result;
use crate::geometry::{Alignment, CurveLayout, HorizontalCurve};
use crate::math::Point2;

use super::ransac::{fit_circle_ransac, CircleFit, RansacCircleConfig};
use super::reconstruct::{reconstruct_alignment, TANGENT_MARGIN_SCALE};
use super::sample::{sample_centerline, RoadSample};

/// Configuration for the full estimation pipeline.
#[derive(Clone, Debug)]
pub struct EstimateConfig {
    /// Resampling interval along the centerline. Default: 0.5
    pub sample_step: f64,

    /// RANSAC settings for the circle fit.
    pub ransac: RansacCircleConfig,

    /// Stretch factor applied to the reconstructed tangent legs.
    /// Default: [`TANGENT_MARGIN_SCALE`]
    pub margin_scale: f64,

    /// Even station spacing of the verification layout. Default: 2.0
    pub division: f64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            sample_step: 0.5,
            ransac: RansacCircleConfig::default(),
            margin_scale: TANGENT_MARGIN_SCALE,
            division: 2.0,
        }
    }
}

impl EstimateConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the resampling interval.
    #[must_use]
    pub fn with_sample_step(mut self, step: f64) -> Self {
        self.sample_step = step;
        self
    }

    /// Builder-style setter for the RANSAC settings.
    #[must_use]
    pub fn with_ransac(mut self, ransac: RansacCircleConfig) -> Self {
        self.ransac = ransac;
        self
    }

    /// Builder-style setter for the tangent margin.
    #[must_use]
    pub fn with_margin_scale(mut self, scale: f64) -> Self {
        self.margin_scale = scale;
        self
    }

    /// Builder-style setter for the verification station spacing.
    #[must_use]
    pub fn with_division(mut self, division: f64) -> Self {
        self.division = division;
        self
    }
}

/// A curve estimated from a surveyed centerline, with every
/// intermediate product kept for inspection.
#[derive(Clone, Debug)]
pub struct EstimatedCurve {
    /// Evenly spaced samples taken along the input polyline.
    pub samples: Vec<RoadSample>,
    /// Fitted circle and its consensus set.
    pub fit: CircleFit,
    /// Tangent alignment reconstructed around the fitted arc.
    pub alignment: Alignment,
    /// Curve derived from the reconstructed alignment.
    pub curve: HorizontalCurve,
    /// Verification layout generated along the estimated curve.
    pub layout: CurveLayout,
}

/// Estimates the designed curve behind a surveyed centerline.
///
/// The centerline is resampled at an even interval, a circle is fitted
/// to the samples with RANSAC, a tangent alignment is reconstructed
/// around the fitted arc, and a verification layout is generated along
/// the resulting curve for comparison against the survey.
///
/// # Errors
///
/// Propagates sampling, fitting, reconstruction, and generation errors
/// from the pipeline stages unchanged.
pub fn estimate_curve(centerline: &[Point2], config: &EstimateConfig) -> Result<EstimatedCurve> {
    let samples = sample_centerline(centerline, config.sample_step)?;
    let positions: Vec<Point2> = samples.iter().map(|sample| sample.position).collect();

    let fit = fit_circle_ransac(&positions, &config.ransac)?;
    let alignment = reconstruct_alignment(&fit, &positions, config.margin_scale)?;

    let curve = HorizontalCurve::derive(&alignment, fit.radius, false)?;
    let layout = curve.generate(config.division)?;

    debug!(
        "estimated curve: radius {:.3}, deflection {}, {} stations",
        curve.radius(),
        curve.deflection_dms(),
        layout.points.len()
    );

    Ok(EstimatedCurve {
        samples,
        fit,
        alignment,
        curve,
        layout,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::{CurvelisError, FitError};
    use crate::geometry::CurveDirection;
    use crate::math::polyline_2d::linspace;
    use crate::math::Vector2;

    use super::*;

    /// A 1.2 rad bend of radius 300 between two 100 m straights,
    /// surveyed as a polyline with 2.5 to 3 m vertex spacing.
    fn surveyed_bend() -> Vec<Point2> {
        let center = Point2::new(500.0, 200.0);
        let radius = 300.0;
        let mut vertices = Vec::new();

        let touch_in = center + Vector2::new((-0.6_f64).cos(), (-0.6_f64).sin()) * radius;
        let dir_in = Vector2::new(-(-0.6_f64).sin(), (-0.6_f64).cos());
        for k in (1..=40).rev() {
            vertices.push(touch_in - dir_in * (2.5 * f64::from(k)));
        }

        for phi in linspace(-0.6, 0.6, 121) {
            vertices.push(center + Vector2::new(phi.cos(), phi.sin()) * radius);
        }

        let touch_out = center + Vector2::new(0.6_f64.cos(), 0.6_f64.sin()) * radius;
        let dir_out = Vector2::new(-0.6_f64.sin(), 0.6_f64.cos());
        for k in 1..=40 {
            vertices.push(touch_out + dir_out * (2.5 * f64::from(k)));
        }

        vertices
    }

    #[test]
    fn recovers_the_design_curve_from_a_surveyed_bend() {
        let config = EstimateConfig::new().with_ransac(
            RansacCircleConfig::new()
                .with_inlier_threshold(0.1)
                .with_max_iterations(500)
                .with_seed(42),
        );

        let estimated = estimate_curve(&surveyed_bend(), &config).unwrap();

        assert!(estimated.samples.len() > 1000);

        // Tangent samples inside the inlier band bias the refit outward,
        // so the ground-truth windows scale with the 0.1 m threshold.
        assert_relative_eq!(estimated.fit.radius, 300.0, epsilon = 0.5);
        assert_relative_eq!(estimated.fit.center.x, 500.0, epsilon = 0.5);
        assert_relative_eq!(estimated.fit.center.y, 200.0, epsilon = 0.5);

        // The reconstructed deflection covers the 1.2 rad bend, widened
        // a little where inliers spill onto the tangent runs.
        let deflection = estimated.alignment.signed_deflection();
        assert!(deflection > 1.19 && deflection < 1.29, "deflection={deflection}");
        assert_eq!(estimated.curve.direction(), CurveDirection::CounterClockwise);

        // Tangency points sit at 100 m and 460 m along the centerline;
        // straight-run samples may enter the consensus only inside the
        // short window where the runs stay within the inlier band.
        for &i in &estimated.fit.inliers {
            let distance = estimated.samples[i].distance;
            assert!(
                distance > 85.0 && distance < 475.0,
                "inlier {distance:.1} m along the centerline"
            );
        }

        // Margin plumbing: legs carry exactly the configured stretch.
        assert_relative_eq!(
            estimated.alignment.entry_leg(),
            1.05 * estimated.curve.tangent_length(),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            estimated.alignment.exit_leg(),
            1.05 * estimated.curve.tangent_length(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn the_verification_layout_tracks_the_fitted_circle() {
        let config = EstimateConfig::new().with_ransac(
            RansacCircleConfig::new()
                .with_inlier_threshold(0.1)
                .with_max_iterations(500)
                .with_seed(42),
        );

        let estimated = estimate_curve(&surveyed_bend(), &config).unwrap();
        let layout = &estimated.layout;

        assert_relative_eq!(
            (layout.pc - estimated.fit.center).norm(),
            estimated.fit.radius,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            (layout.pt - estimated.fit.center).norm(),
            estimated.fit.radius,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            (layout.pc - Point2::new(500.0, 200.0)).norm(),
            300.0,
            epsilon = 0.5
        );

        // Interior stations run at the default 2 m division.
        let stations: Vec<f64> = layout.points.iter().map(|p| p.station).collect();
        assert_relative_eq!(*stations.first().unwrap(), 0.0);
        assert_relative_eq!(
            *stations.last().unwrap(),
            estimated.curve.arc_length(),
            epsilon = 1e-9
        );
        for pair in stations[1..stations.len() - 1].windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn a_straight_road_has_no_curve_to_estimate() {
        let road: Vec<Point2> = (0..=20)
            .map(|k| Point2::new(f64::from(k) * 5.0, 3.0))
            .collect();
        let config = EstimateConfig::new().with_ransac(RansacCircleConfig::new().with_seed(1));

        let err = estimate_curve(&road, &config).unwrap_err();
        assert!(matches!(
            err,
            CurvelisError::Fit(FitError::DegenerateCircleFit)
        ));
    }

    #[test]
    fn degenerate_centerlines_fail_up_front() {
        let err = estimate_curve(&[Point2::new(0.0, 0.0)], &EstimateConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            CurvelisError::Fit(FitError::DegeneratePolyline)
        ));
    }

    #[test]
    fn defaults_follow_the_survey_conventions() {
        let config = EstimateConfig::default();

        assert_relative_eq!(config.sample_step, 0.5);
        assert_relative_eq!(config.ransac.inlier_threshold, 0.2);
        assert_eq!(config.ransac.max_iterations, 1000);
        assert_relative_eq!(config.margin_scale, TANGENT_MARGIN_SCALE);
        assert_relative_eq!(config.division, 2.0);
    }

    #[test]
    fn config_builders_set_every_field() {
        let config = EstimateConfig::new()
            .with_sample_step(1.0)
            .with_ransac(RansacCircleConfig::new().with_min_inliers(25))
            .with_margin_scale(1.1)
            .with_division(5.0);

        assert_relative_eq!(config.sample_step, 1.0);
        assert_eq!(config.ransac.min_inliers, 25);
        assert_relative_eq!(config.margin_scale, 1.1);
        assert_relative_eq!(config.division, 5.0);
    }
}
