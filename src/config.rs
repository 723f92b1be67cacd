use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use moka::future::Cache;

use crate::schemas::AppState;

/// Default dataset filename, matching the published 1992-2015 subset.
pub const DEFAULT_DATASET: &str = "Full_Wildfire_Dataset__1992_2015_.csv";

/// Initialize application configuration and state
pub async fn initialize_app_state() -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();
    let dataset_path =
        std::env::var("DATASET_PATH").unwrap_or_else(|_| DEFAULT_DATASET.to_string());

    initialize_app_state_with_path(Path::new(&dataset_path)).await
}

/// Initialize application state from an explicit dataset path.
///
/// Loading happens once here; a missing or malformed dataset aborts
/// startup rather than serving a partial dashboard.
pub async fn initialize_app_state_with_path(path: &Path) -> Result<AppState> {
    tracing::info!("Loading wildfire dataset from: {}", path.display());
    let raw = compute::loader::load_dataset(path)?;
    let annotated = compute::region::with_region(&raw)?;

    // Initialize cache
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    Ok(AppState {
        dataset: Arc::new(annotated),
        cache,
    })
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
