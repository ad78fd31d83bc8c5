//! Router configuration for Web API.

use axum::{routing::get, Json, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::doc::ApiDoc;
use super::dto::MessageResponse;
use super::error::ApiError;
use super::handlers::{create_board, list_boards, AppState};
use super::middleware::create_cors_layer;
use crate::config::WebConfig;

/// Create the board API router.
///
/// Both `/boards` and `/boards/` are served.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let boards = get(list_boards).post(create_board);

    Router::new()
        .route("/", get(root))
        .route("/boards", boards.clone())
        .route("/boards/", boards)
        .fallback(not_found)
        .with_state(app_state)
}

/// Create the complete application: API routes, health check, optional
/// Swagger UI, and the shared middleware stack.
pub fn create_app(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let mut router = create_router(app_state).merge(create_health_router());

    if config.swagger_enabled {
        router = router.merge(create_swagger_router());
    }

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&config.cors_origins))
            .layer(CompressionLayer::new()),
    )
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router serving the generated OpenAPI document.
pub fn create_swagger_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Service banner.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Board API"))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for unknown routes.
async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
