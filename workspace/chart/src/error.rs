use thiserror::Error;

/// Error types for chart specification building
#[derive(Error, Debug)]
pub enum ChartError {
    /// Error from the compute pipeline feeding the charts
    #[error("Compute error: {0}")]
    Compute(#[from] compute::ComputeError),

    /// A column the encoding references is missing or mistyped
    #[error("Column error: {0}")]
    Column(String),
}

impl From<polars::error::PolarsError> for ChartError {
    fn from(err: polars::error::PolarsError) -> Self {
        ChartError::Column(err.to_string())
    }
}

/// Type alias for Result with ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
