use thiserror::Error;

/// Top-level error type for the curvelis kernel.
#[derive(Debug, Error)]
pub enum CurvelisError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Fit(#[from] FitError),
}

/// Errors raised while deriving or generating a designed curve.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("malformed alignment: {0}")]
    MalformedAlignment(String),

    #[error("radius {radius} is not a positive finite length")]
    InvalidRadius { radius: f64 },

    #[error(
        "{leg} leg is {available:.3} m but the tangent length requires {required:.3} m"
    )]
    InsufficientTangentRun {
        leg: &'static str,
        required: f64,
        available: f64,
    },

    #[error("division {division} is not in (0, {arc_length}]")]
    InvalidDivision { division: f64, arc_length: f64 },
}

/// Errors raised while estimating a curve from a sampled centerline.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("sampling step {step} is not a positive finite length")]
    InvalidStep { step: f64 },

    #[error("polyline is too short to sample a curve from")]
    DegeneratePolyline,

    #[error("{count} samples are too few to fit a circle (need at least 3)")]
    TooFewSamples { count: usize },

    #[error("all sampled subsets were collinear; no circle candidate exists")]
    DegenerateCircleFit,

    #[error("no consensus: best candidate had {best} inliers, {required} required")]
    NoConsensusFound { best: usize, required: usize },

    #[error("margin scale {scale} must be at least 1")]
    InvalidMarginScale { scale: f64 },

    #[error("arc subtends {deflection:.4} rad; tangent apex is unbounded")]
    ApexUnbounded { deflection: f64 },
}

/// Convenience type alias for results using [`CurvelisError`].
pub type Result<T> = std::result::Result<T, CurvelisError>;
