use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{FitError, Result};
use crate::math::circle_2d::{circle_residual, circumcircle, fit_circle_least_squares};
use crate::math::Point2;

/// Configuration for RANSAC circle fitting.
#[derive(Clone, Debug)]
pub struct RansacCircleConfig {
    /// Maximum radial deviation for a sample to count as an inlier,
    /// in the same length unit as the samples. Default: 0.2
    pub inlier_threshold: f64,

    /// Number of candidate circles to evaluate. Default: 1000
    pub max_iterations: usize,

    /// Minimum inlier count required to accept the best candidate.
    /// Default: 3
    pub min_inliers: usize,

    /// Seed for the sampling RNG. `None` seeds from the OS; a fixed
    /// value makes the fit reproducible. Default: `None`
    pub seed: Option<u64>,
}

impl Default for RansacCircleConfig {
    fn default() -> Self {
        Self {
            inlier_threshold: 0.2,
            max_iterations: 1000,
            min_inliers: 3,
            seed: None,
        }
    }
}

impl RansacCircleConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the inlier threshold.
    #[must_use]
    pub fn with_inlier_threshold(mut self, threshold: f64) -> Self {
        self.inlier_threshold = threshold;
        self
    }

    /// Builder-style setter for the candidate budget.
    #[must_use]
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Builder-style setter for the minimum inlier count.
    #[must_use]
    pub fn with_min_inliers(mut self, count: usize) -> Self {
        self.min_inliers = count;
        self
    }

    /// Builder-style setter for the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A circle fitted to centerline samples.
#[derive(Clone, Debug)]
pub struct CircleFit {
    /// Fitted center.
    pub center: Point2,
    /// Fitted radius.
    pub radius: f64,
    /// Indices of the samples within the inlier threshold, in input order.
    pub inliers: Vec<usize>,
}

/// Fits a circle to `points` with RANSAC and refines the winner with a
/// least-squares pass over its inliers.
///
/// Each candidate is the circumcircle of three distinct random samples.
/// The candidate with the most inliers wins; ties fall to the smaller
/// summed radial residual. Collinear triples carry no circle and are
/// redrawn without consuming the candidate budget, up to a hard cap of
/// four times `max_iterations` draws.
///
/// # Errors
///
/// Returns [`FitError::TooFewSamples`] for fewer than three samples,
/// [`FitError::DegenerateCircleFit`] if no draw ever produced a circle,
/// and [`FitError::NoConsensusFound`] if the best candidate fell short
/// of `min_inliers`.
pub fn fit_circle_ransac(points: &[Point2], config: &RansacCircleConfig) -> Result<CircleFit> {
    let n = points.len();
    if n < 3 {
        return Err(FitError::TooFewSamples { count: n }.into());
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut best_center = Point2::origin();
    let mut best_radius = 0.0;
    let mut best_inliers: Vec<usize> = Vec::new();
    let mut best_residual = f64::INFINITY;

    let draw_cap = config.max_iterations.saturating_mul(4);
    let mut draws = 0;
    let mut evaluated = 0;

    while evaluated < config.max_iterations && draws < draw_cap {
        draws += 1;

        let ia = rng.random_range(0..n);
        let mut ib = rng.random_range(0..n);
        while ib == ia {
            ib = rng.random_range(0..n);
        }
        let mut ic = rng.random_range(0..n);
        while ic == ia || ic == ib {
            ic = rng.random_range(0..n);
        }

        let Some((center, radius)) = circumcircle(&points[ia], &points[ib], &points[ic]) else {
            continue;
        };
        evaluated += 1;

        let mut inliers = Vec::new();
        let mut residual = 0.0;
        for (i, point) in points.iter().enumerate() {
            let deviation = circle_residual(point, &center, radius);
            if deviation <= config.inlier_threshold {
                inliers.push(i);
                residual += deviation;
            }
        }

        if inliers.len() > best_inliers.len()
            || (inliers.len() == best_inliers.len() && residual < best_residual)
        {
            best_center = center;
            best_radius = radius;
            best_inliers = inliers;
            best_residual = residual;
        }
    }

    if evaluated == 0 {
        return Err(FitError::DegenerateCircleFit.into());
    }
    if best_inliers.len() < config.min_inliers {
        return Err(FitError::NoConsensusFound {
            best: best_inliers.len(),
            required: config.min_inliers,
        }
        .into());
    }

    debug!(
        "circle consensus: {}/{n} inliers after {evaluated} candidates ({draws} draws)",
        best_inliers.len()
    );

    // A failed refit keeps the raw candidate.
    let inlier_points: Vec<Point2> = best_inliers.iter().map(|&i| points[i]).collect();
    if let Some((center, radius)) = fit_circle_least_squares(&inlier_points) {
        debug!("least-squares refit: radius {best_radius:.4} -> {radius:.4}");
        best_center = center;
        best_radius = radius;
    }

    Ok(CircleFit {
        center: best_center,
        radius: best_radius,
        inliers: best_inliers,
    })
}
