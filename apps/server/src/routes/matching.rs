//! Gestures for the slot-matching rooms (Rooms 1 and 3)

use axum::{
    extract::{Path, State},
    Json,
};
use cafe_core::PuzzleRoom;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::sessions::{as_matching, snapshot};
use crate::AppState;

/// POST /api/sessions/:id/assign
pub async fn assign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignRequest>,
) -> Result<Json<GestureResponse>> {
    let response = state.sessions.with_session(id, |room| {
        let returned = as_matching(room)?
            .assign(&payload.slot, &payload.item)
            .map_err(|err| {
                tracing::warn!("Session {} refused {} on {}: {}", id, payload.item, payload.slot, err);
                ApiError::from(err)
            })?;
        tracing::debug!("Session {} placed {} on {}", id, payload.item, payload.slot);

        Ok(GestureResponse {
            returned,
            session: snapshot(id, room),
        })
    })?;

    Ok(Json(response))
}

/// POST /api/sessions/:id/unassign
pub async fn unassign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UnassignRequest>,
) -> Result<Json<GestureResponse>> {
    let response = state.sessions.with_session(id, |room| {
        let returned = as_matching(room)?.unassign(&payload.slot)?;
        tracing::debug!("Session {} cleared {}", id, payload.slot);

        Ok(GestureResponse {
            returned,
            session: snapshot(id, room),
        })
    })?;

    Ok(Json(response))
}

/// POST /api/sessions/:id/submit
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmitResponse>> {
    let response = state.sessions.with_session(id, |room| {
        let outcome = as_matching(room)?.submit(&mut rand::thread_rng());

        match outcome.feedback {
            Feedback::Correct => {
                tracing::info!("Session {} unlocked {}", id, room.id().as_str())
            }
            Feedback::Incorrect => tracing::debug!("Session {} submitted a wrong board", id),
            _ => tracing::debug!("Session {} submitted an incomplete board", id),
        }

        Ok(SubmitResponse {
            outcome,
            session: snapshot(id, room),
        })
    })?;

    Ok(Json(response))
}

/// POST /api/sessions/:id/reset
pub async fn reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    let response = state.sessions.with_session(id, |room| {
        as_matching(room)?.reset(&mut rand::thread_rng())?;
        Ok(snapshot(id, room))
    })?;

    Ok(Json(response))
}

/// POST /api/sessions/:id/hints
pub async fn toggle_hints(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HintsResponse>> {
    let response = state.sessions.with_session(id, |room| {
        let show_hints = as_matching(room)?.toggle_hints();
        Ok(HintsResponse {
            show_hints,
            session: snapshot(id, room),
        })
    })?;

    Ok(Json(response))
}
