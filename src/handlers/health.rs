use axum::{extract::State, Json};

use crate::models::HealthResponse;
use crate::state::AppState;
use crate::store::Database;

pub async fn root() -> &'static str {
    "Card Collector API Server"
}

/// Health check endpoint
pub async fn health_check<D: Database>(State(state): State<AppState<D>>) -> Json<HealthResponse> {
    let database = match state.db.ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let status = if database == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
