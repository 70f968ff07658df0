//! Shared scoring helpers for the proficiency pipeline.
//!
//! Everything here is a pure function over caller-supplied numbers. Missing
//! inputs degrade to documented defaults; the only hard failure is the
//! mismatched-slice contract in `weighted_mean`.

/// How far a self-rating is pulled toward the objective score.
pub const CALIBRATION_FACTOR: f64 = 0.3;

/// Assumed seconds per question when `timeSpent` is missing.
pub const DEFAULT_TIME_SPENT: u32 = 60;

/// Weighted average of `scores`. Returns 0.0 for empty input or an
/// all-zero weight vector.
///
/// # Panics
///
/// Panics if `scores` and `weights` differ in length — that is a caller
/// bug, never silently truncated.
pub fn weighted_mean(scores: &[f64], weights: &[f64]) -> f64 {
    assert_eq!(
        scores.len(),
        weights.len(),
        "scores and weights must have the same length"
    );
    let total_weight: f64 = weights.iter().sum();
    if total_weight == 0.0 {
        return 0.0;
    }
    let weighted_sum: f64 = scores.iter().zip(weights).map(|(s, w)| s * w).sum();
    weighted_sum / total_weight
}

/// Pulls a self-reported rating toward the objective measurement to counter
/// self-assessment bias. Both inputs and the result are on the 0–1 scale.
pub fn calibrate_self_assessment(self_rating: f64, objective_score: f64) -> f64 {
    let adjustment = (objective_score - self_rating) * CALIBRATION_FACTOR;
    (self_rating + adjustment).clamp(0.0, 1.0)
}

/// Per-response time factor: fast answers (<30s) get a boost, slow answers
/// (>120s) a penalty.
pub fn time_factor(time_spent: u32) -> f64 {
    if time_spent < 30 {
        1.1
    } else if time_spent > 120 {
        0.9
    } else {
        1.0
    }
}

/// Maps a combined 0–1 score to a proficiency level.
///
/// <0.2 novice(1), <0.4 beginner(2), <0.6 intermediate(3), <0.8 advanced(4),
/// else expert(5).
pub fn score_to_proficiency(score: f64) -> u8 {
    if score < 0.2 {
        1
    } else if score < 0.4 {
        2
    } else if score < 0.6 {
        3
    } else if score < 0.8 {
        4
    } else {
        5
    }
}

/// Confidence in a prediction given how many responses backed it.
///
/// Logistic curve from 0.5 toward 0.95, midpoint at 5 responses. More data
/// means higher confidence, with diminishing returns.
pub fn prediction_confidence(response_count: usize) -> f64 {
    const MIN_CONFIDENCE: f64 = 0.5;
    const MAX_CONFIDENCE: f64 = 0.95;
    const STEEPNESS: f64 = 0.5;
    const MIDPOINT: f64 = 5.0;

    let n = response_count as f64;
    MIN_CONFIDENCE + (MAX_CONFIDENCE - MIN_CONFIDENCE) / (1.0 + (-STEEPNESS * (n - MIDPOINT)).exp())
}

/// Rounds to two decimals, the precision confidences are reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal, the precision readiness is reported at.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
