//! Gestures for the mixing room (Room 2)

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::sessions::{as_mixing, snapshot};
use crate::AppState;

/// POST /api/sessions/:id/select
/// Drag or tap a sugar into the beaker
pub async fn select(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SelectRequest>,
) -> Result<Json<SessionResponse>> {
    let response = state.sessions.with_session(id, |room| {
        as_mixing(room)?.select(&payload.item)?;
        tracing::debug!("Session {} added {} to the beaker", id, payload.item);
        Ok(snapshot(id, room))
    })?;

    Ok(Json(response))
}

/// POST /api/sessions/:id/clear
pub async fn clear(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    let response = state.sessions.with_session(id, |room| {
        as_mixing(room)?.clear_selection()?;
        Ok(snapshot(id, room))
    })?;

    Ok(Json(response))
}

/// POST /api/sessions/:id/mix
/// Closes the beaker, waits out the mix delay, then judges the pair.
/// Other gestures on the session are refused until the mix resolves.
pub async fn mix(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MixResponse>> {
    state
        .sessions
        .with_session(id, |room| Ok(as_mixing(room)?.begin_mix()?))
        .map_err(|err| {
            tracing::warn!("Session {} refused mix: {}", id, err);
            err
        })?;

    // Resolved on its own task: a dropped request still finishes the mix.
    let sessions = state.sessions.clone();
    let delay = state.config.mix_delay;
    let resolve = tokio::spawn(async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        sessions.with_session(id, |room| {
            let outcome = as_mixing(room)?.finish_mix()?;
            if outcome.completed {
                tracing::info!("Session {} formed every disaccharide", id);
            } else {
                tracing::debug!("Session {} mix against {}: {}", id, outcome.target, outcome.matched);
            }

            Ok(MixResponse {
                outcome,
                session: snapshot(id, room),
            })
        })
    });

    let response = resolve
        .await
        .map_err(|err| ApiError::Internal(format!("mix task failed: {}", err)))??;

    Ok(Json(response))
}
