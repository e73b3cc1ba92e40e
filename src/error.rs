use thiserror::Error;

/// Top-level error type for the paracurve library.
#[derive(Debug, Error)]
pub enum ParacurveError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Errors raised while constructing or evaluating curves.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("parameter {parameter} = {value} must be non-negative")]
    NegativeParameter {
        parameter: &'static str,
        value: f64,
    },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while generating random curve batches.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid shape weights: {0}")]
    InvalidWeights(#[from] rand::distributions::WeightedError),
}

/// Convenience type alias for results using [`ParacurveError`].
pub type Result<T> = std::result::Result<T, ParacurveError>;
