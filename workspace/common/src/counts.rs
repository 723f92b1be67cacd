use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Total wildfire count for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StateCount {
    /// Two-letter state code
    pub state: String,
    /// Number of recorded fires in that state
    pub count: u64,
}

/// Wildfire count for one (year, state) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct YearStateCount {
    /// Calendar year of discovery
    pub year: i32,
    /// Two-letter state code
    pub state: String,
    /// Number of recorded fires for that year and state
    pub count: u64,
}
