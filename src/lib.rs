pub mod curve;
pub mod error;
pub mod math;
pub mod sampling;

pub use error::{ParacurveError, Result};
