//! Axum route handlers for the Resume API.

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::resume::text::resume_to_plain_text;

#[derive(Debug, Serialize, Deserialize)]
pub struct PlainTextResponse {
    pub text: String,
}

/// GET /api/v1/resume/sample
pub async fn handle_sample() -> Json<ResumeRecord> {
    Json(ResumeRecord::sample())
}

/// POST /api/v1/resume/plain-text
pub async fn handle_plain_text(
    payload: Result<Json<ResumeRecord>, JsonRejection>,
) -> Result<Json<PlainTextResponse>, AppError> {
    let Json(record) = payload?;
    Ok(Json(PlainTextResponse {
        text: resume_to_plain_text(&record),
    }))
}
