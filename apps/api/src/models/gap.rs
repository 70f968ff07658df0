use serde::{Deserialize, Serialize};

/// Qualitative weight of a required skill within a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    MustHave,
    GoodToHave,
    NiceToHave,
}

impl Importance {
    /// Weight used in the readiness computation.
    pub fn readiness_weight(self) -> f64 {
        match self {
            Importance::MustHave => 1.5,
            Importance::GoodToHave => 1.0,
            Importance::NiceToHave => 0.5,
        }
    }
}

/// Gap priority, ordered critical < high < medium < low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: critical(0) < high(1) < medium(2) < low(3).
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

/// One skill requirement within a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredSkill {
    pub skill_id: String,
    pub skill_name: String,
    pub required_level: u8, // 1–5
    pub importance: Importance,
}

/// A role's full requirement set. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequirement {
    pub title: String,
    pub skills: Vec<RequiredSkill>,
}

/// A required skill level the user has not met. Only materialized when
/// `gap_size > 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill_id: String,
    pub skill_name: String,
    pub current_level: u8,
    pub required_level: u8,
    pub gap_size: u8,
    pub priority: Priority,
    pub importance: Importance,
    /// Estimated hours to close the gap.
    pub estimated_time_to_close: u32,
}

/// Result of comparing a skill profile against a target role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    pub gaps: Vec<SkillGap>,
    pub overall_readiness: f64, // 0.0–100.0, one decimal
    pub strength_areas: Vec<String>,
    pub improvement_areas: Vec<String>,
}
