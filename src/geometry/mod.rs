pub mod alignment;
pub mod horizontal_curve;

pub use alignment::{Alignment, CurveDirection};
pub use horizontal_curve::{CurveLayout, CurvePoint, HorizontalCurve};
