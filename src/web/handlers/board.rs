//! Board handlers for Web API.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::web::dto::{BoardResponse, CreateBoardRequest, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::BoardError;

/// GET /boards/ - List all board entries, newest first.
#[utoipa::path(
    get,
    path = "/boards/",
    tag = "boards",
    responses(
        (status = 200, description = "All board entries, newest first", body = [BoardResponse]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BoardResponse>>, ApiError> {
    let entries = state.store.list_all().await.map_err(|e| {
        tracing::error!("Failed to list boards: {}", e);
        ApiError::internal("Failed to fetch boards")
    })?;

    Ok(Json(entries.into_iter().map(BoardResponse::from).collect()))
}

/// POST /boards/ - Create a new board entry.
#[utoipa::path(
    post,
    path = "/boards/",
    tag = "boards",
    request_body = CreateBoardRequest,
    responses(
        (status = 201, description = "Board entry created", body = BoardResponse),
        (status = 400, description = "Invalid JSON, or a map of field name to error messages"),
        (status = 413, description = "Request body too large", body = ErrorBody),
        (status = 415, description = "Missing JSON content type", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateBoardRequest>,
) -> Result<(StatusCode, Json<BoardResponse>), ApiError> {
    let entry = state.store.create(req.into()).await.map_err(|e| match e {
        BoardError::Validation(errors) => ApiError::from_validation_errors(&errors),
        e => {
            tracing::error!("Failed to create board: {}", e);
            ApiError::internal("Failed to create board")
        }
    })?;

    tracing::info!(id = entry.id, "Board entry created");

    Ok((StatusCode::CREATED, Json(BoardResponse::from(entry))))
}
