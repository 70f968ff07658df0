use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single assessment answer, supplied per prediction call. Everything
/// beyond `questionId` is optional on the wire and defaults are substituted
/// during scoring rather than at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub question_id: String,
    #[serde(default)]
    pub skill_id: Option<String>,
    #[serde(default)]
    pub skill_name: Option<String>,
    /// Free text, a number, or a set of choices. A string of digits in 1–5
    /// is treated as a self-rating; every other shape scores as objective.
    #[serde(default)]
    pub answer: Value,
    /// Seconds spent on the question.
    #[serde(default)]
    pub time_spent: Option<u32>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub difficulty_weight: Option<f64>,
}

/// Predicted proficiency for one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPrediction {
    pub skill_id: String,
    pub skill_name: String,
    pub proficiency_level: u8, // 1–5
    pub confidence: f64,       // 0.0–1.0
}

/// Full predictor output: one prediction per distinct skill plus the
/// unweighted mean of the per-skill confidences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
    pub predictions: Vec<SkillPrediction>,
    pub confidence: f64,
}

/// Persisted-shape assessment record as stored in a user's skill profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAssessment {
    pub skill_id: String,
    pub skill_name: String,
    pub proficiency_level: u8,
    pub confidence: f64,
    pub assessed_at: DateTime<Utc>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProfile {
    pub user_id: String,
    pub skills: Vec<SkillAssessment>,
    pub overall_score: f64,
    pub last_updated: DateTime<Utc>,
}
