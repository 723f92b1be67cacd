use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, instrument};

use common::ALL_STATES;

use crate::schemas::{ApiResponse, AppState, CachedData};

/// Dropdown options: the "All States" sentinel followed by the sorted
/// distinct state codes present in the duration view. A state whose
/// every record fails the data-quality filters would only ever yield
/// empty strip/box charts, so it is not offered.
#[utoipa::path(
    get,
    path = "/api/v1/states",
    tag = "dashboard",
    responses(
        (status = 200, description = "State options retrieved successfully", body = ApiResponse<Vec<String>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_states(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, StatusCode> {
    let cache_key = "states".to_string();
    if let Some(CachedData::States(options)) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: options,
            message: "State options retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let mut options = vec![ALL_STATES.to_string()];
    let eligible = compute::aggregate::with_duration(&state.dataset)
        .and_then(|df| compute::aggregate::distinct_states(&df));
    match eligible {
        Ok(states) => options.extend(states),
        Err(err) => {
            error!(%err, "failed to list states");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    state
        .cache
        .insert(cache_key, CachedData::States(options.clone()))
        .await;

    let response = ApiResponse {
        data: options,
        message: "State options retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
