//! Final "build your dish" endpoints

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use cafe_core::catalog::DISH_SUGAR_OPTIONS;
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::models::{DishForm, DishOptionsResponse};

/// GET /api/dish/options
pub async fn options() -> Json<DishOptionsResponse> {
    Json(DishOptionsResponse {
        sugars: DISH_SUGAR_OPTIONS.iter().map(|s| s.to_string()).collect(),
    })
}

/// POST /api/dish/export
/// Returns the dish record as a JSON file download
pub async fn export(Json(form): Json<DishForm>) -> Result<Response> {
    let record = form.into_record(Utc::now())?;
    let body = record
        .to_json_pretty()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let disposition = content_disposition(&record.file_name())?;

    tracing::info!("Exported dish {}", record.dish_name);

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// Attachment header; characters outside printable ASCII become underscores.
fn content_disposition(file_name: &str) -> Result<HeaderValue> {
    let safe: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();

    HeaderValue::from_str(&format!("attachment; filename=\"{}\"", safe))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
