//! Axum route handlers for the ATS API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::engine::ATSResult;
use crate::ats::guidance::{bullet_guidance, BulletGuidance};
use crate::ats::improvements::{is_ats_ready, top_improvements};
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub result: ATSResult,
    pub improvements: Vec<String>,
    pub ats_ready: bool,
}

#[derive(Debug, Deserialize)]
pub struct BulletGuidanceRequest {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores the full resume draft. Called by the form on every edit.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ResumeRecord>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(record) = payload?;

    let result = state.engine.compute_score(&record);
    let improvements = top_improvements(&record);
    let ats_ready = is_ats_ready(&result, &improvements);

    debug!(
        score = result.score,
        label = ?result.label,
        suggestions = result.suggestions.len(),
        "ATS score computed"
    );

    Ok(Json(ScoreResponse {
        result,
        improvements,
        ats_ready,
    }))
}

/// POST /api/v1/ats/bullet-guidance
pub async fn handle_bullet_guidance(
    State(state): State<AppState>,
    payload: Result<Json<BulletGuidanceRequest>, JsonRejection>,
) -> Result<Json<BulletGuidance>, AppError> {
    let Json(request) = payload?;
    Ok(Json(bullet_guidance(&request.text, &state.bullet_verbs)))
}
