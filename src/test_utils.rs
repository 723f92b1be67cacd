use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use chrono::NaiveDate;
use moka::future::Cache;
use polars::prelude::*;

use model::fire;

use crate::router::create_router;
use crate::schemas::AppState;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// In-memory test dataset: three CA fires (2000, 2000, 2001) and two
/// TX fires (2000), one of which has no containment date.
pub fn test_dataset() -> DataFrame {
    let discovery = vec![
        Some(date(2000, 6, 1)),
        Some(date(2000, 7, 1)),
        Some(date(2001, 6, 1)),
        Some(date(2000, 8, 1)),
        Some(date(2000, 8, 2)),
    ];
    let containment = vec![
        Some(date(2000, 6, 3)),
        Some(date(2000, 7, 1)),
        Some(date(2001, 6, 11)),
        Some(date(2000, 8, 5)),
        None,
    ];

    DataFrame::new(vec![
        Series::new(fire::STATE.into(), &["CA", "CA", "CA", "TX", "TX"]).into(),
        Series::new(fire::FIRE_YEAR.into(), &[2000i64, 2000, 2001, 2000, 2000]).into(),
        Series::new(fire::DISCOVERY_DATE.into(), discovery).into(),
        Series::new(fire::CONTAINMENT_DATE.into(), containment).into(),
        Series::new(fire::FIRE_SIZE.into(), &[120.5f64, 0.3, 5400.0, 12.0, 7.5]).into(),
        Series::new(
            fire::CAUSE.into(),
            &["Lightning", "Arson", "Lightning", "Debris Burning", "Equipment Use"],
        )
        .into(),
        Series::new(
            fire::FIRE_NAME.into(),
            &["ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO"],
        )
        .into(),
        Series::new(
            fire::COUNTY.into(),
            &["Shasta", "Kern", "Modoc", "Travis", "Bexar"],
        )
        .into(),
    ])
    .unwrap()
}

pub fn setup_app_state_with_dataset(df: DataFrame) -> AppState {
    let annotated = compute::region::with_region(&df).unwrap();
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300))
        .build();

    AppState {
        dataset: Arc::new(annotated),
        cache,
    }
}

pub fn setup_test_app_state() -> AppState {
    setup_app_state_with_dataset(test_dataset())
}

pub fn setup_app_with_dataset(df: DataFrame) -> Router {
    create_router(setup_app_state_with_dataset(df))
}

pub fn setup_test_app() -> Router {
    create_router(setup_test_app_state())
}
