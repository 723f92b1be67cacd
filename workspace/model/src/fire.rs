//! Column names of the wildfire occurrence dataset.
//!
//! The input file is a row-oriented CSV with one row per recorded fire
//! (1992-2015, compiled from federal/state/local fire organizations).
//! These constants are the single source of truth for column names used
//! by the loader, the aggregation engine, and the chart builders.

/// Two-letter state code of the fire location.
pub const STATE: &str = "STATE";

/// Calendar year the fire was discovered.
pub const FIRE_YEAR: &str = "FIRE_YEAR";

/// Date the fire was discovered.
pub const DISCOVERY_DATE: &str = "DISCOVERY_DATE";

/// Date the fire was contained. May be missing.
pub const CONTAINMENT_DATE: &str = "CONTAINMENT_DATE";

/// Final fire size in acres.
pub const FIRE_SIZE: &str = "FIRE_SIZE";

/// Recorded ignition cause category.
pub const CAUSE: &str = "STAT_CAUSE_DESCR";

/// Name assigned to the fire, if any.
pub const FIRE_NAME: &str = "FIRE_NAME";

/// County of the fire location.
pub const COUNTY: &str = "COUNTY";

/// Census sub-region, appended by the region mapper.
pub const REGION: &str = "REGION";

/// Whole days between discovery and containment, appended by the
/// aggregation engine.
pub const DURATION_DAYS: &str = "DURATION_DAYS";

/// Columns the loader requires to be present in the input file.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    STATE,
    FIRE_YEAR,
    DISCOVERY_DATE,
    CONTAINMENT_DATE,
    FIRE_SIZE,
    CAUSE,
    FIRE_NAME,
    COUNTY,
];
