//! Validating JSON extractor for Web API DTOs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::{ApiError, ErrorCode};

/// A JSON extractor that validates the request body.
///
/// The body is deserialized as JSON and then validated with the `validator`
/// crate. Malformed JSON is rejected as a bad request, and validation
/// failures are rejected with a field-level error report. A missing JSON
/// content type or an oversized body keeps its own status.
///
/// # Example
///
/// ```ignore
/// use board_api::web::dto::ValidatedJson;
///
/// async fn create_board(
///     ValidatedJson(payload): ValidatedJson<CreateBoardRequest>,
/// ) -> Result<Json<BoardResponse>, ApiError> {
///     // payload is already validated
///     // ...
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value
            .validate()
            .map_err(|e| ApiError::from_validation_errors(&e))?;

        Ok(ValidatedJson(value))
    }
}

/// Map a JSON extraction failure to an API error, keeping 413 and 415.
fn json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => {
            ApiError::new(ErrorCode::PayloadTooLarge, rejection.body_text())
        }
        StatusCode::UNSUPPORTED_MEDIA_TYPE => {
            ApiError::new(ErrorCode::UnsupportedMediaType, rejection.body_text())
        }
        _ => ApiError::bad_request(format!("Invalid JSON: {}", rejection.body_text())),
    }
}
