pub mod estimate;
pub mod ransac;
pub mod reconstruct;
pub mod sample;

pub use estimate::{estimate_curve, EstimateConfig, EstimatedCurve};
pub use ransac::{fit_circle_ransac, CircleFit, RansacCircleConfig};
pub use reconstruct::{reconstruct_alignment, TANGENT_MARGIN_SCALE};
pub use sample::{sample_centerline, RoadSample};
