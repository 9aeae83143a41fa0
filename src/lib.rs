pub mod error;
pub mod estimation;
pub mod geometry;
pub mod math;

pub use error::{CurvelisError, Result};
