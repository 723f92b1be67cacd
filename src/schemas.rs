use std::sync::Arc;

use chart::DashboardSpec;
use moka::future::Cache;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The region-annotated wildfire table, loaded once at startup
    /// and read-only afterwards
    pub dataset: Arc<DataFrame>,
    /// Cache of rendered dashboard specs keyed by interaction state
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Dashboard(DashboardSpec),
    States(Vec<String>),
}

/// Query parameters for the dashboard endpoint
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DashboardQuery {
    /// Comma-separated state codes currently selected on the bar
    /// chart (e.g. "CA,TX"); empty or absent means no selection
    pub selected: Option<String>,
    /// One bar-click event to apply to the selection before rendering
    pub toggle: Option<String>,
    /// Dropdown value gating the strip/box charts; "All States" or a
    /// state code
    pub state: Option<String>,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of rows in the loaded dataset
    pub dataset_rows: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::dashboard::get_dashboard,
        crate::handlers::states::get_states,
    ),
    components(
        schemas(
            ApiResponse<DashboardSpec>,
            ApiResponse<Vec<String>>,
            ErrorResponse,
            HealthResponse,
            DashboardQuery,
            DashboardSpec,
            common::StateCount,
            common::YearStateCount,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Wildfire dashboard chart specifications"),
    ),
    info(
        title = "Firescope API",
        description = "Interactive wildfire data-exploration dashboard - serves linked Vega-Lite chart specifications over 23 years of U.S. wildfire records",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
