use std::path::Path;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::{get_bind_address, initialize_app_state, initialize_app_state_with_path};
use crate::router::create_router;

pub async fn serve(dataset: Option<&Path>, bind: Option<&str>) -> Result<()> {
    info!("Firescope application starting up");

    // Initialize application state; a dataset load failure is fatal,
    // there is no partial dashboard to serve.
    let state = match dataset {
        Some(path) => initialize_app_state_with_path(path).await,
        None => initialize_app_state().await,
    };
    let state = match state {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    let bind_address = bind.map(str::to_string).unwrap_or_else(get_bind_address);

    // Create router
    let app = create_router(state);

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Firescope API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
