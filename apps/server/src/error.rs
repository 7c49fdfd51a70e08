//! Error handling for the game API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cafe_core::PuzzleError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Puzzle rejected gesture: {0}")]
    Puzzle(#[from] PuzzleError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Puzzle(err) if err.is_conflict() => (StatusCode::CONFLICT, err.code()),
            ApiError::Puzzle(err) => (StatusCode::BAD_REQUEST, err.code()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let error = ApiError::NotFound("session".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_status() {
        let error = ApiError::BadRequest("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal("unexpected error".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_slot_occupied_is_conflict() {
        let error = ApiError::from(PuzzleError::SlotOccupied {
            slot: "slot_1".to_string(),
        });
        assert_eq!(error.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_mix_in_progress_is_conflict() {
        let error = ApiError::from(PuzzleError::MixInProgress);
        assert_eq!(error.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unknown_item_is_bad_request() {
        let error = ApiError::from(PuzzleError::UnknownItem("sucrose".to_string()));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_display_not_found() {
        let error = ApiError::NotFound("Session 123".to_string());
        assert_eq!(error.to_string(), "Not found: Session 123");
    }

    #[test]
    fn test_error_display_puzzle() {
        let error = ApiError::from(PuzzleError::RoomUnlocked);
        assert_eq!(error.to_string(), "Puzzle rejected gesture: room is already unlocked");
    }
}
