//! Session lifecycle endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{RoomId, SessionResponse};
use crate::AppState;

/// POST /api/rooms/:room/sessions
/// Mounts a room page: fresh session with the initial shuffle
pub async fn create(
    State(state): State<AppState>,
    Path(room): Path<String>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let room_id = RoomId::from_str(&room)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown room: {}", room)))?;

    let session = state.sessions.open(room_id)?;
    tracing::info!("Opened {} session {}", room_id.as_str(), session.session_id);

    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/sessions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    Ok(Json(state.sessions.get(id)?))
}

/// DELETE /api/sessions/:id
/// Navigating away discards the session
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    if !state.sessions.remove(id)? {
        return Err(ApiError::NotFound(format!("Session {}", id)));
    }

    tracing::info!("Closed session {}", id);
    Ok(Json(serde_json::json!({ "deleted": true })))
}
