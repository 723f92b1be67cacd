//! Aggregation engine: the derived views behind each chart.
//!
//! Three order-independent reductions over the annotated table, plus
//! the dropdown gate for the duration/size views. All of them are
//! deterministic; empty inputs yield empty outputs.

use std::collections::BTreeSet;

use polars::prelude::*;

use common::{StateCount, StateFilter, YearStateCount};
use model::fire;

use crate::error::Result;

const FIRE_COUNT: &str = "FIRE_COUNT";

/// Total fire count per state, ascending by state code.
///
/// Rows with a null state code are excluded, so the counts always sum
/// to the number of rows carrying a state.
pub fn state_counts(df: &DataFrame) -> Result<Vec<StateCount>> {
    let counts = df
        .clone()
        .lazy()
        .drop_nulls(Some(vec![col(fire::STATE)]))
        .group_by([col(fire::STATE)])
        .agg([len().alias(FIRE_COUNT)])
        .sort([fire::STATE], SortMultipleOptions::default())
        .collect()?;

    let states = counts.column(fire::STATE)?.str()?;
    let totals = counts.column(FIRE_COUNT)?.u32()?;
    Ok(states
        .into_iter()
        .zip(totals)
        .filter_map(|(state, count)| {
            Some(StateCount {
                state: state?.to_string(),
                count: u64::from(count?),
            })
        })
        .collect())
}

/// Fire count per (year, state) combination, sorted by year then state.
pub fn year_state_counts(df: &DataFrame) -> Result<Vec<YearStateCount>> {
    let counts = df
        .clone()
        .lazy()
        .drop_nulls(Some(vec![col(fire::FIRE_YEAR), col(fire::STATE)]))
        .with_column(col(fire::FIRE_YEAR).cast(DataType::Int32))
        .group_by([col(fire::FIRE_YEAR), col(fire::STATE)])
        .agg([len().alias(FIRE_COUNT)])
        .sort([fire::FIRE_YEAR, fire::STATE], SortMultipleOptions::default())
        .collect()?;

    let years = counts.column(fire::FIRE_YEAR)?.i32()?;
    let states = counts.column(fire::STATE)?.str()?;
    let totals = counts.column(FIRE_COUNT)?.u32()?;
    Ok(years
        .into_iter()
        .zip(states)
        .zip(totals)
        .filter_map(|((year, state), count)| {
            Some(YearStateCount {
                year: year?,
                state: state?.to_string(),
                count: u64::from(count?),
            })
        })
        .collect())
}

/// Adds `DURATION_DAYS` (containment minus discovery, whole days) and
/// applies the data-quality filters for the duration/size views: rows
/// with a missing duration, size, or cause are dropped, as are rows
/// with a negative duration. Negative durations are invalid records,
/// not signed durations to preserve.
pub fn with_duration(df: &DataFrame) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .with_column(
            (col(fire::CONTAINMENT_DATE) - col(fire::DISCOVERY_DATE))
                .dt()
                .total_days()
                .alias(fire::DURATION_DAYS),
        )
        .drop_nulls(Some(vec![
            col(fire::DURATION_DAYS),
            col(fire::FIRE_SIZE),
            col(fire::CAUSE),
        ]))
        .filter(col(fire::DURATION_DAYS).gt_eq(lit(0)))
        .collect()?;
    Ok(out)
}

/// Applies the dropdown filter; `All` is the identity.
pub fn filter_state(df: &DataFrame, filter: &StateFilter) -> Result<DataFrame> {
    match filter {
        StateFilter::All => Ok(df.clone()),
        StateFilter::Only(code) => Ok(df
            .clone()
            .lazy()
            .filter(col(fire::STATE).eq(lit(code.as_str())))
            .collect()?),
    }
}

/// Sorted distinct state codes present in the data (dropdown options).
pub fn distinct_states(df: &DataFrame) -> Result<Vec<String>> {
    let states = df.column(fire::STATE)?.str()?;
    let unique: BTreeSet<&str> = states.into_iter().flatten().collect();
    Ok(unique.into_iter().map(str::to_string).collect())
}
