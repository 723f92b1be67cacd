//! Region mapper: annotates each record with its census sub-region.

use polars::prelude::*;
use tracing::debug;

use model::{Region, fire};

use crate::error::Result;

/// Appends a `REGION` column derived from the static state lookup.
///
/// Pure with respect to its input: returns a new frame and leaves the
/// argument untouched. State codes outside the nine-region table map
/// to null, which downstream group-bys treat as a missing category;
/// they never abort the pipeline.
pub fn with_region(df: &DataFrame) -> Result<DataFrame> {
    let states = df.column(fire::STATE)?.str()?;
    let regions: StringChunked = states
        .into_iter()
        .map(|code| code.and_then(Region::for_code).map(Region::name))
        .collect();

    let unmapped = regions.null_count() - states.null_count();
    if unmapped > 0 {
        // The UI contract keeps unmapped states silent; leave a trace
        // for operators only.
        debug!(unmapped, "state codes without a census region");
    }

    let mut out = df.clone();
    out.with_column(regions.into_series().with_name(fire::REGION.into()))?;
    Ok(out)
}
