//! Dataset loader: reads the wildfire CSV into a DataFrame with parsed
//! date columns and memoizes the result for the process lifetime.

use std::path::{Path, PathBuf};

use cached::proc_macro::cached;
use polars::prelude::*;
use tracing::{debug, info};

use model::fire;

use crate::error::{ComputeError, Result};

/// Loads the wildfire dataset from `path`.
///
/// The two date columns are parsed to `Date`; all other columns keep
/// their inferred types. The parsed table is cached by path, so
/// repeated calls return the cached value without touching storage.
///
/// Fails if the file is missing, a required column is absent, or a
/// date value cannot be parsed. A load failure is fatal to the
/// dashboard; there is no partial fallback.
#[cached(result = true, key = "PathBuf", convert = r#"{ path.to_path_buf() }"#)]
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(ComputeError::DatasetNotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "reading wildfire dataset");
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(10_000))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    for required in fire::REQUIRED_COLUMNS {
        if df.column(required).is_err() {
            return Err(ComputeError::MissingColumn(required.to_string()));
        }
    }

    let df = parse_date_column(df, fire::DISCOVERY_DATE)?;
    let df = parse_date_column(df, fire::CONTAINMENT_DATE)?;

    info!(
        rows = df.height(),
        path = %path.display(),
        "wildfire dataset loaded"
    );
    Ok(df)
}

/// Parses one string column to `Date` in place. Nulls pass through;
/// unparseable values are an error, not a silent drop.
fn parse_date_column(df: DataFrame, column: &str) -> Result<DataFrame> {
    df.lazy()
        .with_column(col(column).str().to_date(StrptimeOptions::default()))
        .collect()
        .map_err(|err| ComputeError::DateParse {
            column: column.to_string(),
            message: err.to_string(),
        })
}
