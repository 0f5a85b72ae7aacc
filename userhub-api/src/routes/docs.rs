/// API documentation endpoints
///
/// The OpenAPI document is generated from the handler annotations with
/// `utoipa`, built once at startup and served as static JSON.
///
/// # Endpoints
///
/// - `GET /openapi.json` - OpenAPI document
/// - `GET /docs` - Swagger UI
/// - `GET /redoc` - ReDoc

use crate::{
    app::AppState,
    config::Config,
    error::{ErrorResponse, ValidationErrorDetail},
    routes::{health, users, SuccessResponse},
    views,
};
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use utoipa::OpenApi;

/// Where the OpenAPI document is served
const OPENAPI_URL: &str = "/openapi.json";

/// Script and style sources the documentation pages load from
const DOCS_CSP: &str = "default-src 'self'; script-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; style-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; img-src 'self' data: https://cdn.jsdelivr.net; font-src 'self' https://fonts.gstatic.com; worker-src 'self' blob:; connect-src 'self'; frame-ancestors 'none'";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::ping,
        health::app_info,
        users::list_users,
        users::create_user,
        users::get_user,
        users::update_user,
        users::delete_user,
        users::get_user_by_username,
    ),
    components(schemas(
        health::HealthCheckResponse,
        health::AppInfoResponse,
        users::UserResponse,
        users::CreateUserRequest,
        users::UpdateUserRequest,
        SuccessResponse,
        ErrorResponse,
        ValidationErrorDetail,
    )),
    tags(
        (name = "Health", description = "Health check and system status"),
        (name = "Users", description = "User management"),
    )
)]
struct ApiDoc;

/// Builds the OpenAPI document with title, version and description from config
pub fn openapi(config: &Config) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = config.app.name.clone();
    doc.info.version = config.app.version.clone();
    doc.info.description = Some(config.app.description.clone());
    doc
}

/// Serves the OpenAPI document
pub async fn openapi_json(State(state): State<AppState>) -> Response {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(state.openapi.as_ref()),
    )
        .into_response()
}

/// Serves the Swagger UI page
pub async fn swagger_ui(State(state): State<AppState>) -> Response {
    docs_page(views::swagger_ui_page(&state.config.app.name, OPENAPI_URL))
}

/// Serves the ReDoc page
pub async fn redoc(State(state): State<AppState>) -> Response {
    docs_page(views::redoc_page(&state.config.app.name, OPENAPI_URL))
}

fn docs_page(html: String) -> Response {
    ([(header::CONTENT_SECURITY_POLICY, DOCS_CSP)], Html(html)).into_response()
}
