//! Axum route handlers for the scoring API.
//!
//! Handlers own request validation and tracing; the scoring core never sees
//! the transport. `userId` is logged for traceability only — it never
//! reaches the computation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::gap_analyzer::analyze_gaps;
use crate::analysis::recommender::{recommend, GapSummary};
use crate::errors::AppError;
use crate::models::assessment::{AssessmentResponse, PredictionOutcome, SkillProfile};
use crate::models::gap::GapAnalysis;
use crate::models::resource::LearningRecommendation;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictProficiencyRequest {
    pub user_id: String,
    pub assessment_responses: Vec<AssessmentResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeGapsRequest {
    pub user_id: String,
    pub skill_profile: SkillProfile,
    pub target_role_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_id: String,
    pub gaps: Vec<GapSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommendations: Vec<LearningRecommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/predict/proficiency
///
/// Predicts per-skill proficiency levels from assessment responses.
pub async fn handle_predict_proficiency(
    State(state): State<AppState>,
    Json(request): Json<PredictProficiencyRequest>,
) -> Result<Json<PredictionOutcome>, AppError> {
    info!(
        user_id = %request.user_id,
        responses = request.assessment_responses.len(),
        "predicting proficiency"
    );

    let outcome = state.model.predict(&request.assessment_responses).await?;

    Ok(Json(outcome))
}

/// POST /api/v1/analyze/gaps
///
/// Compares a skill profile against a target role and returns prioritized
/// gaps, readiness, and strength/improvement areas.
pub async fn handle_analyze_gaps(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeGapsRequest>,
) -> Result<Json<GapAnalysis>, AppError> {
    for skill in &request.skill_profile.skills {
        if !(1..=5).contains(&skill.proficiency_level) {
            return Err(AppError::Validation(format!(
                "proficiency level {} for skill '{}' is outside 1-5",
                skill.proficiency_level, skill.skill_id
            )));
        }
    }

    info!(
        user_id = %request.user_id,
        target_role = %request.target_role_id,
        skills = request.skill_profile.skills.len(),
        "analyzing skill gaps"
    );

    let analysis = analyze_gaps(
        &request.skill_profile,
        &request.target_role_id,
        &state.roles,
        &state.config.gap_thresholds,
    );

    Ok(Json(analysis))
}

/// POST /api/v1/recommend
///
/// Generates learning recommendations from a prioritized gap list.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    info!(
        user_id = %request.user_id,
        gaps = request.gaps.len(),
        "generating recommendations"
    );

    let recommendations = recommend(&request.gaps, &state.resources);

    Ok(Json(RecommendationResponse { recommendations }))
}
