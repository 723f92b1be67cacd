use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, instrument};

use chart::DashboardSpec;
use common::{SelectionState, StateFilter};

use crate::schemas::{ApiResponse, AppState, CachedData, DashboardQuery};

/// Render the dashboard for the given interaction state.
///
/// The client carries its selection in `selected` and may apply one
/// bar-click event via `toggle` before rendering; `state` is the
/// dropdown value for the strip/box charts. Every call re-runs the
/// full derivation pipeline against the cached raw table.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    params(
        ("selected" = Option<String>, Query, description = "Comma-separated selected state codes, e.g. CA,TX"),
        ("toggle" = Option<String>, Query, description = "State code of one bar click to apply"),
        ("state" = Option<String>, Query, description = "Dropdown value: a state code or \"All States\""),
    ),
    responses(
        (status = 200, description = "Dashboard rendered successfully", body = ApiResponse<DashboardSpec>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardSpec>>, StatusCode> {
    // Apply the interaction event before anything else so the cache
    // key reflects the post-click state.
    let mut selection = SelectionState::parse(query.selected.as_deref().unwrap_or(""));
    if let Some(code) = query.toggle.as_deref() {
        selection.toggle(code);
    }
    let filter = StateFilter::parse(query.state.as_deref().unwrap_or(""));

    // Check cache first
    let cache_key = format!("dashboard_{}_{}", selection, filter);
    if let Some(CachedData::Dashboard(spec)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: spec,
            message: "Dashboard retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let spec = match chart::render(&state.dataset, &selection, &filter) {
        Ok(spec) => spec,
        Err(err) => {
            error!(%err, "dashboard render failed");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Dashboard(spec.clone()))
        .await;

    let response = ApiResponse {
        data: spec,
        message: "Dashboard rendered successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
