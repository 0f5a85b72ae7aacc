/// Health check endpoints
///
/// Read-only status reporting. None of these touch the user store.
///
/// # Endpoints
///
/// - `GET /api/health/` - Service status
/// - `GET /api/health/ping` - Connectivity check
/// - `GET /api/health/info` - Application metadata
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "version": "0.1.0",
///   "environment": "development"
/// }
/// ```

use crate::{app::AppState, routes::SuccessResponse};
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,

    /// Time the check ran
    pub timestamp: DateTime<Utc>,

    /// Application version
    pub version: String,

    /// Current environment
    pub environment: String,
}

/// Application info response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppInfoResponse {
    /// Application name
    pub app_name: String,

    /// Application version
    pub version: String,

    /// Application description
    pub description: String,

    /// Current environment
    pub environment: String,

    /// Debug flag
    pub debug: bool,

    /// Swagger UI location
    pub docs_url: String,

    /// ReDoc location
    pub redoc_url: String,

    /// Time of the request
    pub timestamp: DateTime<Utc>,
}

/// Health check handler
///
/// The process has no external dependencies, so a response always means
/// healthy.
#[utoipa::path(
    get,
    path = "/api/health/",
    tag = "Health",
    responses((status = 200, description = "Service is healthy", body = HealthCheckResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: state.config.app.version.clone(),
        environment: state.config.app.environment.clone(),
    })
}

/// Simple ping endpoint for basic connectivity testing
#[utoipa::path(
    get,
    path = "/api/health/ping",
    tag = "Health",
    responses((status = 200, description = "Pong", body = SuccessResponse))
)]
pub async fn ping() -> Json<SuccessResponse> {
    let now = Utc::now();

    Json(SuccessResponse::with_data(
        "pong",
        json!({ "timestamp": now.to_rfc3339() }),
    ))
}

/// Application information endpoint
#[utoipa::path(
    get,
    path = "/api/health/info",
    tag = "Health",
    responses((status = 200, description = "Application metadata", body = AppInfoResponse))
)]
pub async fn app_info(State(state): State<AppState>) -> Json<AppInfoResponse> {
    let app = &state.config.app;

    Json(AppInfoResponse {
        app_name: app.name.clone(),
        version: app.version.clone(),
        description: app.description.clone(),
        environment: app.environment.clone(),
        debug: app.debug,
        docs_url: "/docs".to_string(),
        redoc_url: "/redoc".to_string(),
        timestamp: Utc::now(),
    })
}
