use std::path::PathBuf;

use thiserror::Error;
use tracing::error;

/// Error types for the compute pipeline
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The dataset file does not exist
    #[error("Dataset not found: {0}")]
    DatasetNotFound(PathBuf),

    /// A required dataset column is missing
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A date column could not be parsed
    #[error("Date parse error in column {column}: {message}")]
    DateParse { column: String, message: String },

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(err: polars::error::PolarsError) -> Self {
        use polars::error::PolarsError;
        let compute_error = match &err {
            PolarsError::NoData(_)
            | PolarsError::ShapeMismatch(_)
            | PolarsError::SchemaMismatch(_)
            | PolarsError::ColumnNotFound(_)
            | PolarsError::ComputeError(_)
            | PolarsError::OutOfBounds(_) => ComputeError::DataFrame(err.to_string()),
            _ => ComputeError::Series(err.to_string()),
        };
        error!(?compute_error, "polars operation failed");
        compute_error
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
