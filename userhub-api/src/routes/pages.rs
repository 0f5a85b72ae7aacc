/// HTML pages and catch-all handlers
///
/// # Endpoints
///
/// - `GET /` - Landing page
/// - `GET /favicon.ico` - Placeholder favicon response
/// - fallback - JSON 404 under `/api/`, HTML 404 page elsewhere

use crate::{app::AppState, error::ApiError, views};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Renders the landing page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(views::index_page(&state.config.app))
}

/// Favicon placeholder
pub async fn favicon() -> Json<Value> {
    Json(json!({ "message": "No favicon configured" }))
}

/// Handles requests that match no route
///
/// API clients get the standard JSON error body; browsers get an HTML page.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();

    if path == "/api" || path.starts_with("/api/") {
        return ApiError::NotFound("Not found".to_string()).into_response();
    }

    let html = views::not_found_page(&state.config.app, path);

    (StatusCode::NOT_FOUND, Html(html)).into_response()
}
