//! Gap Analyzer — compares a skill profile against a target role's
//! requirements and produces prioritized gaps, an overall readiness score,
//! and strength/improvement summaries.
//!
//! Role lookup never fails; unknown ids resolve to the default requirement
//! set via `RoleCatalog`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::scoring::round1;
use crate::catalog::roles::RoleCatalog;
use crate::models::assessment::SkillProfile;
use crate::models::gap::{GapAnalysis, Importance, Priority, RequiredSkill, SkillGap};

/// Per-level cost curve: later levels take progressively longer to reach.
const LEVEL_MULTIPLIERS: [f64; 5] = [1.0, 1.0, 1.2, 1.5, 2.0];

/// Number of skill names reported in the strength/improvement summaries.
const AREA_LIMIT: usize = 5;

/// Gap-size thresholds for the priority matrix plus the base learning-time
/// estimate. Tunable via environment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapThresholds {
    /// Gap size at or above which a must-have skill becomes critical.
    pub critical_gap: u8,
    /// Gap size at or above which a must-have skill becomes high priority.
    pub high_gap: u8,
    /// Base hours to improve one proficiency level.
    pub hours_per_level: f64,
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            critical_gap: 3,
            high_gap: 2,
            hours_per_level: 20.0,
        }
    }
}

/// Analyzes gaps between a user's profile and the target role.
///
/// Algorithm:
/// 1. Resolve role requirements (exact → title → default)
/// 2. Per requirement: current level (0 if unassessed), gap = required − current
/// 3. Priority from the gap-size × importance matrix
/// 4. Learning-curve time estimate per gap
/// 5. Stable priority sort; requirement order breaks ties
/// 6. Importance-weighted readiness percentage
pub fn analyze_gaps(
    profile: &SkillProfile,
    target_role_id: &str,
    roles: &RoleCatalog,
    thresholds: &GapThresholds,
) -> GapAnalysis {
    let role = roles.requirements_for(target_role_id);

    let user_levels: HashMap<&str, u8> = profile
        .skills
        .iter()
        .map(|s| (s.skill_id.as_str(), s.proficiency_level))
        .collect();

    let mut gaps: Vec<SkillGap> = Vec::new();
    let mut strength_areas: Vec<String> = Vec::new();
    let mut improvement_areas: Vec<String> = Vec::new();

    for requirement in &role.skills {
        let current_level = user_levels
            .get(requirement.skill_id.as_str())
            .copied()
            .unwrap_or(0);
        let gap_size = requirement.required_level.saturating_sub(current_level);

        if gap_size > 0 {
            gaps.push(SkillGap {
                skill_id: requirement.skill_id.clone(),
                skill_name: requirement.skill_name.clone(),
                current_level,
                required_level: requirement.required_level,
                gap_size,
                priority: gap_priority(gap_size, requirement.importance, thresholds),
                importance: requirement.importance,
                estimated_time_to_close: estimate_time_to_close(
                    gap_size,
                    thresholds.hours_per_level,
                ),
            });
            improvement_areas.push(requirement.skill_name.clone());
        } else {
            strength_areas.push(requirement.skill_name.clone());
        }
    }

    // Stable sort: ties keep the role table's declared skill order.
    gaps.sort_by_key(|g| g.priority.rank());

    let overall_readiness = overall_readiness(&gaps, &role.skills);

    strength_areas.truncate(AREA_LIMIT);
    improvement_areas.truncate(AREA_LIMIT);

    GapAnalysis {
        gaps,
        overall_readiness,
        strength_areas,
        improvement_areas,
    }
}

/// Priority matrix, gap size crossed with importance:
///
/// |           | must_have | good_to_have | nice_to_have |
/// |-----------|-----------|--------------|--------------|
/// | gap ≥ 3   | critical  | high         | medium       |
/// | gap = 2   | high      | medium       | low          |
/// | gap = 1   | medium    | low          | low          |
fn gap_priority(gap_size: u8, importance: Importance, thresholds: &GapThresholds) -> Priority {
    if gap_size >= thresholds.critical_gap {
        match importance {
            Importance::MustHave => Priority::Critical,
            Importance::GoodToHave => Priority::High,
            Importance::NiceToHave => Priority::Medium,
        }
    } else if gap_size >= thresholds.high_gap {
        match importance {
            Importance::MustHave => Priority::High,
            Importance::GoodToHave => Priority::Medium,
            Importance::NiceToHave => Priority::Low,
        }
    } else {
        match importance {
            Importance::MustHave => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

/// Hours to close a gap: each successive level costs
/// `hours_per_level × multiplier`, truncated to whole hours.
fn estimate_time_to_close(gap_size: u8, hours_per_level: f64) -> u32 {
    let mut total_hours = 0.0;
    for i in 0..gap_size as usize {
        total_hours += hours_per_level * LEVEL_MULTIPLIERS[i.min(LEVEL_MULTIPLIERS.len() - 1)];
    }
    total_hours as u32
}

/// Importance-weighted completion ratio across all requirements, as a
/// percentage rounded to one decimal. An empty requirement list is vacuous
/// full readiness.
fn overall_readiness(gaps: &[SkillGap], requirements: &[RequiredSkill]) -> f64 {
    if requirements.is_empty() {
        return 100.0;
    }

    let gap_sizes: HashMap<&str, u8> = gaps
        .iter()
        .map(|g| (g.skill_id.as_str(), g.gap_size))
        .collect();

    let mut weighted_credit = 0.0;
    let mut total_weight = 0.0;

    for requirement in requirements {
        let weight = requirement.importance.readiness_weight();
        total_weight += weight;

        let credit = match gap_sizes.get(requirement.skill_id.as_str()) {
            Some(gap_size) if requirement.required_level > 0 => {
                f64::from(requirement.required_level.saturating_sub(*gap_size))
                    / f64::from(requirement.required_level)
            }
            Some(_) => 0.0, // zero-level requirement with a gap: no credit
            None => 1.0,
        };

        weighted_credit += credit * weight;
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    round1(weighted_credit / total_weight * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::assessment::SkillAssessment;

    fn make_profile(skills: &[(&str, u8)]) -> SkillProfile {
        SkillProfile {
            user_id: "test-user".to_string(),
            skills: skills
                .iter()
                .map(|(skill_id, level)| SkillAssessment {
                    skill_id: (*skill_id).to_string(),
                    skill_name: (*skill_id).to_string(),
                    proficiency_level: *level,
                    confidence: 0.8,
                    assessed_at: Utc::now(),
                    source: "quiz".to_string(),
                })
                .collect(),
            overall_score: 50.0,
            last_updated: Utc::now(),
        }
    }

    fn defaults() -> (RoleCatalog, GapThresholds) {
        (RoleCatalog::builtin(), GapThresholds::default())
    }

    #[test]
    fn test_empty_profile_gaps_every_requirement() {
        let (roles, thresholds) = defaults();
        let analysis = analyze_gaps(&make_profile(&[]), "frontend_developer", &roles, &thresholds);

        let requirement_count = roles.requirements_for("frontend_developer").skills.len();
        assert_eq!(analysis.gaps.len(), requirement_count);
        assert!(analysis.overall_readiness < 100.0);
        assert!(analysis.strength_areas.is_empty());
    }

    #[test]
    fn test_meeting_every_requirement_yields_full_readiness() {
        let (roles, thresholds) = defaults();
        let skills: Vec<(String, u8)> = roles
            .requirements_for("frontend_developer")
            .skills
            .iter()
            .map(|r| (r.skill_id.clone(), 5))
            .collect();
        let borrowed: Vec<(&str, u8)> = skills.iter().map(|(id, l)| (id.as_str(), *l)).collect();

        let analysis = analyze_gaps(
            &make_profile(&borrowed),
            "frontend_developer",
            &roles,
            &thresholds,
        );

        assert!(analysis.gaps.is_empty());
        assert_eq!(analysis.overall_readiness, 100.0);
        assert!(analysis.improvement_areas.is_empty());
    }

    #[test]
    fn test_gaps_sorted_by_non_decreasing_priority_rank() {
        let (roles, thresholds) = defaults();
        let analysis = analyze_gaps(&make_profile(&[]), "software_engineer", &roles, &thresholds);

        let ranks: Vec<u8> = analysis.gaps.iter().map(|g| g.priority.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_ties_keep_requirement_table_order() {
        let (roles, thresholds) = defaults();
        // Empty profile against frontend: every must-have gap is critical and
        // must appear in the role table's declared order.
        let analysis = analyze_gaps(&make_profile(&[]), "frontend_developer", &roles, &thresholds);
        let critical: Vec<&str> = analysis
            .gaps
            .iter()
            .filter(|g| g.priority == Priority::Critical)
            .map(|g| g.skill_id.as_str())
            .collect();
        assert_eq!(critical, vec!["js", "react", "git", "problem_solving"]);
    }

    #[test]
    fn test_unknown_role_matches_default_gap_set() {
        let (roles, thresholds) = defaults();
        let profile = make_profile(&[]);
        let unknown = analyze_gaps(&profile, "unknown_role_xyz", &roles, &thresholds);
        let default = analyze_gaps(&profile, "default", &roles, &thresholds);

        let unknown_ids: Vec<&str> = unknown.gaps.iter().map(|g| g.skill_id.as_str()).collect();
        let default_ids: Vec<&str> = default.gaps.iter().map(|g| g.skill_id.as_str()).collect();
        assert_eq!(unknown_ids, default_ids);
        assert_eq!(unknown.overall_readiness, default.overall_readiness);
    }

    #[test]
    fn test_priority_matrix() {
        let thresholds = GapThresholds::default();
        assert_eq!(
            gap_priority(3, Importance::MustHave, &thresholds),
            Priority::Critical
        );
        assert_eq!(
            gap_priority(4, Importance::GoodToHave, &thresholds),
            Priority::High
        );
        assert_eq!(
            gap_priority(3, Importance::NiceToHave, &thresholds),
            Priority::Medium
        );
        assert_eq!(
            gap_priority(2, Importance::MustHave, &thresholds),
            Priority::High
        );
        assert_eq!(
            gap_priority(2, Importance::GoodToHave, &thresholds),
            Priority::Medium
        );
        assert_eq!(
            gap_priority(2, Importance::NiceToHave, &thresholds),
            Priority::Low
        );
        assert_eq!(
            gap_priority(1, Importance::MustHave, &thresholds),
            Priority::Medium
        );
        assert_eq!(
            gap_priority(1, Importance::GoodToHave, &thresholds),
            Priority::Low
        );
        assert_eq!(
            gap_priority(1, Importance::NiceToHave, &thresholds),
            Priority::Low
        );
    }

    #[test]
    fn test_custom_thresholds_shift_the_matrix() {
        let thresholds = GapThresholds {
            critical_gap: 2,
            high_gap: 1,
            hours_per_level: 20.0,
        };
        assert_eq!(
            gap_priority(2, Importance::MustHave, &thresholds),
            Priority::Critical
        );
        assert_eq!(
            gap_priority(1, Importance::MustHave, &thresholds),
            Priority::High
        );
    }

    #[test]
    fn test_time_estimate_follows_learning_curve() {
        // 20 × [1.0, 1.0, 1.2, 1.5, 2.0] running totals: 20, 40, 64, 94, 134
        assert_eq!(estimate_time_to_close(0, 20.0), 0);
        assert_eq!(estimate_time_to_close(1, 20.0), 20);
        assert_eq!(estimate_time_to_close(2, 20.0), 40);
        assert_eq!(estimate_time_to_close(3, 20.0), 64);
        assert_eq!(estimate_time_to_close(4, 20.0), 94);
        assert_eq!(estimate_time_to_close(5, 20.0), 134);
        // Past the curve's end, the last multiplier repeats
        assert_eq!(estimate_time_to_close(6, 20.0), 174);
    }

    #[test]
    fn test_time_estimate_strictly_increasing() {
        let mut previous = 0;
        for gap in 1..=10u8 {
            let estimate = estimate_time_to_close(gap, 20.0);
            assert!(estimate > previous, "estimate not increasing at gap {gap}");
            previous = estimate;
        }
    }

    #[test]
    fn test_partial_skills_give_partial_readiness() {
        let (roles, thresholds) = defaults();
        // Meet only nodejs for backend_developer.
        let analysis = analyze_gaps(
            &make_profile(&[("nodejs", 4)]),
            "backend_developer",
            &roles,
            &thresholds,
        );
        assert!(analysis.overall_readiness > 0.0);
        assert!(analysis.overall_readiness < 100.0);
        assert_eq!(analysis.strength_areas, vec!["Node.js"]);
    }

    #[test]
    fn test_readiness_weights_must_have_heavier() {
        let (roles, thresholds) = defaults();
        // software_engineer: missing only the nice_to_have agile (weight 0.5)
        // vs missing only the must_have git (weight 1.5), same gap size 3.
        let all_but_agile: Vec<(&str, u8)> = vec![
            ("ds", 5),
            ("algo", 5),
            ("system", 5),
            ("git", 5),
            ("problem_solving", 5),
            ("communication", 5),
            ("teamwork", 5),
        ];
        let all_but_git: Vec<(&str, u8)> = vec![
            ("ds", 5),
            ("algo", 5),
            ("system", 5),
            ("problem_solving", 5),
            ("communication", 5),
            ("teamwork", 5),
            ("agile", 5),
        ];
        let missing_agile = analyze_gaps(
            &make_profile(&all_but_agile),
            "software_engineer",
            &roles,
            &thresholds,
        );
        let missing_git = analyze_gaps(
            &make_profile(&all_but_git),
            "software_engineer",
            &roles,
            &thresholds,
        );
        assert!(missing_agile.overall_readiness > missing_git.overall_readiness);
    }

    #[test]
    fn test_empty_requirements_are_vacuous_full_readiness() {
        assert_eq!(overall_readiness(&[], &[]), 100.0);
    }

    #[test]
    fn test_area_lists_truncated_to_five_in_table_order() {
        let (roles, thresholds) = defaults();
        // software_engineer has 8 requirements; all gapped.
        let analysis = analyze_gaps(&make_profile(&[]), "software_engineer", &roles, &thresholds);
        assert_eq!(analysis.improvement_areas.len(), 5);
        assert_eq!(
            analysis.improvement_areas,
            vec![
                "Data Structures",
                "Algorithms",
                "System Design",
                "Git",
                "Problem Solving"
            ]
        );
    }

    #[test]
    fn test_exceeding_requirement_counts_as_strength() {
        let (roles, thresholds) = defaults();
        let analysis = analyze_gaps(
            &make_profile(&[("ds", 5), ("algo", 4), ("system", 3)]),
            "default",
            &roles,
            &thresholds,
        );
        assert!(analysis.gaps.is_empty());
        assert_eq!(analysis.overall_readiness, 100.0);
        assert_eq!(analysis.strength_areas.len(), 3);
    }
}
