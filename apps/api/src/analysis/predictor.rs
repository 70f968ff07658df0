//! Proficiency Predictor — pluggable, trait-based model that turns assessment
//! responses into per-skill proficiency levels with confidence.
//!
//! Default: `WeightedScoringModel` (pure-Rust, rule-based, explainable).
//! Trained backends can implement `ProficiencyModel` and swap in at startup.
//!
//! `AppState` holds an `Arc<dyn ProficiencyModel>`.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;

use crate::analysis::scoring::{
    calibrate_self_assessment, prediction_confidence, round2, score_to_proficiency, time_factor,
    weighted_mean, DEFAULT_TIME_SPENT,
};
use crate::errors::AppError;
use crate::models::assessment::{AssessmentResponse, PredictionOutcome, SkillPrediction};

/// Share of the combined score carried by objective answers when both
/// response kinds are present.
const OBJECTIVE_WEIGHT: f64 = 0.7;
const SELF_RATING_WEIGHT: f64 = 0.3;

/// The proficiency model trait. Implement this to swap backends without
/// touching the endpoint or handler code.
#[async_trait]
pub trait ProficiencyModel: Send + Sync {
    async fn predict(&self, responses: &[AssessmentResponse])
        -> Result<PredictionOutcome, AppError>;
}

/// Rule-based weighted-scoring model. Fast, deterministic, no inference
/// service behind it.
///
/// Algorithm:
/// 1. Group responses by skill; unattributed responses are dropped
/// 2. Split each group into self-ratings and objective answers by shape
/// 3. Objective: difficulty-weighted accuracy × mean time factor
/// 4. Self: mean rating / 5, calibrated toward the objective score
/// 5. Combine 0.7/0.3, map to a 1–5 level, attach count-based confidence
pub struct WeightedScoringModel;

#[async_trait]
impl ProficiencyModel for WeightedScoringModel {
    async fn predict(
        &self,
        responses: &[AssessmentResponse],
    ) -> Result<PredictionOutcome, AppError> {
        Ok(predict_proficiency(responses))
    }
}

/// Core prediction over a response set. Empty input yields an empty
/// prediction list with confidence 0.0.
pub fn predict_proficiency(responses: &[AssessmentResponse]) -> PredictionOutcome {
    let mut by_skill: IndexMap<&str, Vec<&AssessmentResponse>> = IndexMap::new();
    for response in responses {
        match response.skill_id.as_deref() {
            // Empty-string ids count as unattributed, same as missing.
            Some(skill_id) if !skill_id.is_empty() => {
                by_skill.entry(skill_id).or_default().push(response);
            }
            _ => {}
        }
    }

    let predictions: Vec<SkillPrediction> = by_skill
        .iter()
        .map(|(skill_id, group)| predict_skill(skill_id, group))
        .collect();

    let confidence = if predictions.is_empty() {
        0.0
    } else {
        round2(predictions.iter().map(|p| p.confidence).sum::<f64>() / predictions.len() as f64)
    };

    PredictionOutcome {
        predictions,
        confidence,
    }
}

fn predict_skill(skill_id: &str, responses: &[&AssessmentResponse]) -> SkillPrediction {
    let mut self_ratings: Vec<f64> = Vec::new();
    let mut objective: Vec<&AssessmentResponse> = Vec::new();

    for &response in responses {
        match self_rating_value(&response.answer) {
            Some(rating) => self_ratings.push(rating),
            None => objective.push(response),
        }
    }

    let mut objective_score = 0.0;
    if !objective.is_empty() {
        let correctness: Vec<f64> = objective
            .iter()
            .map(|r| if r.is_correct.unwrap_or(false) { 1.0 } else { 0.0 })
            .collect();
        let weights: Vec<f64> = objective
            .iter()
            .map(|r| r.difficulty_weight.unwrap_or(1.0))
            .collect();
        objective_score = weighted_mean(&correctness, &weights);

        let mean_time_factor = objective
            .iter()
            .map(|r| time_factor(r.time_spent.unwrap_or(DEFAULT_TIME_SPENT)))
            .sum::<f64>()
            / objective.len() as f64;
        objective_score *= mean_time_factor;
    }

    let mut self_rating_score = 0.0;
    if !self_ratings.is_empty() {
        self_rating_score = self_ratings.iter().sum::<f64>() / self_ratings.len() as f64 / 5.0;
        if !objective.is_empty() {
            self_rating_score = calibrate_self_assessment(self_rating_score, objective_score);
        }
    }

    let combined_score = if !objective.is_empty() && !self_ratings.is_empty() {
        OBJECTIVE_WEIGHT * objective_score + SELF_RATING_WEIGHT * self_rating_score
    } else if !objective.is_empty() {
        objective_score
    } else {
        self_rating_score
    };

    let skill_name = responses
        .first()
        .and_then(|r| r.skill_name.clone())
        .unwrap_or_else(|| skill_id.to_string());

    SkillPrediction {
        skill_id: skill_id.to_string(),
        skill_name,
        proficiency_level: score_to_proficiency(combined_score),
        confidence: round2(prediction_confidence(responses.len())),
    }
}

/// Classifies an answer as a self-rating by shape: a string of ASCII digits
/// parsing to 1–5. Any other value (numbers, choice arrays, free text)
/// keeps the response in the objective bucket.
///
/// A numeric-string answer to an objective question is indistinguishable
/// from a self-rating here; that ambiguity is inherent to the heuristic.
fn self_rating_value(answer: &Value) -> Option<f64> {
    let text = answer.as_str()?;
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let rating: u32 = text.parse().ok()?;
    if (1..=5).contains(&rating) {
        Some(f64::from(rating))
    } else {
        None
    }
}
