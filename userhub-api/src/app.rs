/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use userhub_api::{app::AppState, config::Config};
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::from_config(config);
/// let app = userhub_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{
    config::Config,
    middleware::{cors::cors_layer, security::SecurityHeadersLayer},
    routes,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use userhub_shared::{service::UserService, store::UserStore};

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// User service (owns the in-memory store)
    pub users: Arc<UserService>,

    /// Application configuration
    pub config: Arc<Config>,

    /// OpenAPI document, generated once
    pub openapi: Arc<utoipa::openapi::OpenApi>,
}

impl AppState {
    /// Creates new application state around an existing service
    pub fn new(users: UserService, config: Config) -> Self {
        let openapi = routes::docs::openapi(&config);

        Self {
            users: Arc::new(users),
            config: Arc::new(config),
            openapi: Arc::new(openapi),
        }
    }

    /// Creates application state with a fresh store
    ///
    /// The store holds the demo accounts when `seed_demo_users` is set.
    pub fn from_config(config: Config) -> Self {
        let store = if config.seed_demo_users {
            UserStore::with_demo_users()
        } else {
            UserStore::new()
        };

        Self::new(UserService::new(store), config)
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET /                            # Landing page
/// ├── GET /favicon.ico
/// ├── /api/health/
/// │   ├── GET /                        # Health check
/// │   ├── GET /ping
/// │   └── GET /info
/// ├── /api/users/
/// │   ├── GET    /                     # List users (skip, limit)
/// │   ├── POST   /                     # Create user
/// │   ├── GET    /:user_id
/// │   ├── PUT    /:user_id
/// │   ├── DELETE /:user_id
/// │   └── GET    /username/:username
/// ├── GET /openapi.json
/// ├── GET /docs                        # Swagger UI
/// ├── GET /redoc
/// └── /static/*                        # Static assets
/// ```
///
/// Collection paths answer with and without the trailing slash.
/// Unmatched paths fall through to [`routes::pages::not_found`].
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Security headers
pub fn build_router(state: AppState) -> Router {
    let health_check = get(routes::health::health_check);
    let users_collection = get(routes::users::list_users).post(routes::users::create_user);

    let api_routes = Router::new()
        .route("/api/health", health_check.clone())
        .route("/api/health/", health_check)
        .route("/api/health/ping", get(routes::health::ping))
        .route("/api/health/info", get(routes::health::app_info))
        .route("/api/users", users_collection.clone())
        .route("/api/users/", users_collection)
        .route(
            "/api/users/:user_id",
            get(routes::users::get_user)
                .put(routes::users::update_user)
                .delete(routes::users::delete_user),
        )
        .route(
            "/api/users/username/:username",
            get(routes::users::get_user_by_username),
        );

    let page_routes = Router::new()
        .route("/", get(routes::pages::index))
        .route("/favicon.ico", get(routes::pages::favicon))
        .route("/openapi.json", get(routes::docs::openapi_json))
        .route("/docs", get(routes::docs::swagger_ui))
        .route("/redoc", get(routes::docs::redoc));

    let cors = cors_layer(&state.config.api.cors);
    let production = state.config.is_production();
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .nest_service("/static", static_files)
        .fallback(routes::pages::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(production))
        .with_state(state)
}
