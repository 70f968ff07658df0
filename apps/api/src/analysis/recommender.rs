//! Resource Recommender — turns a prioritized gap list into a deduplicated,
//! ranked list of learning resources.
//!
//! Resources are scored per gap (type fit for the gap size, level match),
//! deduplicated globally by (title, provider), and capped at 10. The
//! relevance score is internal; the emitted `priority` is the source gap's
//! 1-based position in the priority-sorted list.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::resources::{normalize_skill_name, ResourceCatalog};
use crate::models::gap::{Priority, SkillGap};
use crate::models::resource::{LearningRecommendation, LearningResource, ResourceType};

/// Minimum relevance score (exclusive) for a resource to be emitted.
const RELEVANCE_THRESHOLD: f64 = 0.3;

/// Maximum number of recommendations returned per call.
const RECOMMENDATION_LIMIT: usize = 10;

/// The slice of a skill gap the recommender needs. Full analyzer gaps
/// convert via `From`; callers may also supply these records directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapSummary {
    pub skill_id: String,
    pub skill_name: String,
    pub gap_size: u8,
    pub priority: Priority,
}

impl From<&SkillGap> for GapSummary {
    fn from(gap: &SkillGap) -> Self {
        Self {
            skill_id: gap.skill_id.clone(),
            skill_name: gap.skill_name.clone(),
            gap_size: gap.gap_size,
            priority: gap.priority,
        }
    }
}

/// Generates learning recommendations for a gap list.
///
/// Algorithm:
/// 1. Stable-sort gaps by priority rank
/// 2. Resolve each gap's normalized skill name against the catalog
/// 3. Score each unseen resource; emit when the score clears the threshold
/// 4. Order by source-gap position, then score descending within a gap
/// 5. Cap at 10
pub fn recommend(gaps: &[GapSummary], catalog: &ResourceCatalog) -> Vec<LearningRecommendation> {
    if gaps.is_empty() {
        return Vec::new();
    }

    let mut sorted_gaps: Vec<&GapSummary> = gaps.iter().collect();
    sorted_gaps.sort_by_key(|g| g.priority.rank());

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut scored: Vec<(f64, LearningRecommendation)> = Vec::new();

    for (position, gap) in sorted_gaps.iter().enumerate() {
        let skill_key = normalize_skill_name(&gap.skill_name);

        for resource in catalog.resources_for(&skill_key) {
            let dedup_key = (resource.title.clone(), resource.provider.clone());
            if seen.contains(&dedup_key) {
                continue;
            }

            let score = score_resource(resource, gap.gap_size);
            if score > RELEVANCE_THRESHOLD {
                scored.push((
                    score,
                    LearningRecommendation {
                        skill_id: gap.skill_id.clone(),
                        skill_name: gap.skill_name.clone(),
                        resource_type: resource.resource_type,
                        title: resource.title.clone(),
                        description: format!(
                            "Close your {} gap with this {}",
                            gap.skill_name,
                            resource.resource_type.as_str()
                        ),
                        url: resource.url.clone(),
                        provider: resource.provider.clone(),
                        estimated_duration: resource.duration,
                        priority: position + 1,
                    },
                ));
                seen.insert(dedup_key);
            }
        }
    }

    // Earlier gaps lead entirely; within a gap, higher scores lead.
    scored.sort_by(|(score_a, rec_a), (score_b, rec_b)| {
        rec_a
            .priority
            .cmp(&rec_b.priority)
            .then(score_b.partial_cmp(score_a).unwrap_or(Ordering::Equal))
    });
    scored.truncate(RECOMMENDATION_LIMIT);

    scored.into_iter().map(|(_, rec)| rec).collect()
}

/// Relevance score in [0, 1]: base 0.5, plus a type bonus bucketed by gap
/// size (big gaps favor comprehensive formats, small gaps favor quick ones)
/// and a bonus when the resource's difficulty sits within the gap.
fn score_resource(resource: &LearningResource, gap_size: u8) -> f64 {
    let mut score: f64 = 0.5;

    score += if gap_size >= 3 {
        match resource.resource_type {
            ResourceType::Course => 0.3,
            ResourceType::Book => 0.2,
            _ => 0.0,
        }
    } else if gap_size == 2 {
        match resource.resource_type {
            ResourceType::Tutorial | ResourceType::Project => 0.3,
            ResourceType::Course => 0.1,
            _ => 0.0,
        }
    } else {
        match resource.resource_type {
            ResourceType::Tutorial | ResourceType::Documentation => 0.3,
            ResourceType::Video => 0.2,
            _ => 0.0,
        }
    };

    if resource.level.rank() <= gap_size {
        score += 0.1;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resource::ResourceLevel;

    fn make_gap(skill_id: &str, skill_name: &str, gap_size: u8, priority: Priority) -> GapSummary {
        GapSummary {
            skill_id: skill_id.to_string(),
            skill_name: skill_name.to_string(),
            gap_size,
            priority,
        }
    }

    fn make_resource(title: &str, resource_type: ResourceType, level: ResourceLevel) -> LearningResource {
        LearningResource {
            title: title.to_string(),
            resource_type,
            provider: "Test Provider".to_string(),
            url: "https://example.com".to_string(),
            duration: 10,
            level,
        }
    }

    #[test]
    fn test_empty_gaps_return_empty() {
        let catalog = ResourceCatalog::builtin();
        assert!(recommend(&[], &catalog).is_empty());
    }

    #[test]
    fn test_known_skill_gets_its_resources() {
        let catalog = ResourceCatalog::builtin();
        let gaps = vec![make_gap("js", "JavaScript", 3, Priority::Critical)];
        let recommendations = recommend(&gaps, &catalog);
        assert!(!recommendations.is_empty());
        assert!(recommendations.iter().all(|r| r.skill_name == "JavaScript"));
        assert!(recommendations.iter().all(|r| r.priority == 1));
    }

    #[test]
    fn test_never_more_than_ten() {
        let catalog = ResourceCatalog::builtin();
        let gaps: Vec<GapSummary> = [
            ("js", "JavaScript"),
            ("react", "React"),
            ("nodejs", "Node.js"),
            ("sql", "SQL"),
            ("python", "Python"),
            ("git", "Git"),
            ("algo", "Algorithms"),
            ("ds", "Data Structures"),
        ]
        .iter()
        .map(|(id, name)| make_gap(id, name, 3, Priority::High))
        .collect();

        let recommendations = recommend(&gaps, &catalog);
        assert!(recommendations.len() <= 10);
    }

    #[test]
    fn test_no_duplicate_title_provider_pairs() {
        let catalog = ResourceCatalog::builtin();
        // Both normalize into the "javascript" catalog key.
        let gaps = vec![
            make_gap("js", "JavaScript", 4, Priority::Critical),
            make_gap("js2", "Java Script", 3, Priority::High),
        ];
        let recommendations = recommend(&gaps, &catalog);
        let mut keys: Vec<(&str, &str)> = recommendations
            .iter()
            .map(|r| (r.title.as_str(), r.provider.as_str()))
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_unknown_skill_falls_back_to_default_resources() {
        let catalog = ResourceCatalog::builtin();
        let gaps = vec![make_gap("xyz", "Quantum Basket Weaving", 3, Priority::Medium)];
        let recommendations = recommend(&gaps, &catalog);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].title, "Skill Development Path");
    }

    #[test]
    fn test_priority_field_is_gap_position() {
        let catalog = ResourceCatalog::builtin();
        let gaps = vec![
            make_gap("sql", "SQL", 1, Priority::Low),
            make_gap("js", "JavaScript", 4, Priority::Critical),
        ];
        let recommendations = recommend(&gaps, &catalog);
        // JavaScript sorts first despite appearing second in the input.
        assert_eq!(recommendations[0].skill_name, "JavaScript");
        assert_eq!(recommendations[0].priority, 1);
        assert!(recommendations
            .iter()
            .filter(|r| r.skill_name == "SQL")
            .all(|r| r.priority == 2));
    }

    #[test]
    fn test_large_gap_prefers_courses_over_tutorials() {
        let course = make_resource("A Course", ResourceType::Course, ResourceLevel::Beginner);
        let tutorial = make_resource("A Tutorial", ResourceType::Tutorial, ResourceLevel::Beginner);
        assert!(score_resource(&course, 4) > score_resource(&tutorial, 4));
    }

    #[test]
    fn test_small_gap_prefers_tutorials_and_docs() {
        let course = make_resource("A Course", ResourceType::Course, ResourceLevel::Beginner);
        let docs = make_resource("Docs", ResourceType::Documentation, ResourceLevel::Beginner);
        assert!(score_resource(&docs, 1) > score_resource(&course, 1));
    }

    #[test]
    fn test_level_match_bonus_within_gap() {
        let advanced = make_resource("Deep", ResourceType::Course, ResourceLevel::Advanced);
        // rank 3 ≤ gap 3 → bonus applies; gap 2 → no bonus
        assert!(score_resource(&advanced, 3) > score_resource(&advanced, 2) + 0.15);
    }

    #[test]
    fn test_score_clamped_to_one() {
        let course = make_resource("Max", ResourceType::Course, ResourceLevel::Beginner);
        assert!(score_resource(&course, 5) <= 1.0);
    }

    #[test]
    fn test_within_gap_ordering_by_score() {
        let catalog = ResourceCatalog::builtin();
        // Gap size 3 on JavaScript: course (0.5+0.3+0.1=0.9) beats
        // book/advanced (0.5+0.2+0.1=0.8) beats tutorial (0.5+0+0.1=0.6).
        let gaps = vec![make_gap("js", "JavaScript", 3, Priority::Critical)];
        let recommendations = recommend(&gaps, &catalog);
        assert_eq!(recommendations[0].resource_type, ResourceType::Course);
    }

    #[test]
    fn test_analyzer_output_feeds_recommender() {
        use crate::analysis::gap_analyzer::{analyze_gaps, GapThresholds};
        use crate::catalog::roles::RoleCatalog;
        use crate::models::assessment::SkillProfile;
        use chrono::Utc;

        let profile = SkillProfile {
            user_id: "u1".to_string(),
            skills: vec![],
            overall_score: 0.0,
            last_updated: Utc::now(),
        };
        let analysis = analyze_gaps(
            &profile,
            "frontend_developer",
            &RoleCatalog::builtin(),
            &GapThresholds::default(),
        );
        let summaries: Vec<GapSummary> = analysis.gaps.iter().map(GapSummary::from).collect();
        let recommendations = recommend(&summaries, &ResourceCatalog::builtin());

        assert!(!recommendations.is_empty());
        assert!(recommendations.len() <= 10);
        // The top recommendation addresses the top-priority gap.
        assert_eq!(recommendations[0].priority, 1);
        assert_eq!(recommendations[0].skill_name, analysis.gaps[0].skill_name);
    }

    #[test]
    fn test_gap_summary_from_skill_gap() {
        let gap = SkillGap {
            skill_id: "js".to_string(),
            skill_name: "JavaScript".to_string(),
            current_level: 1,
            required_level: 4,
            gap_size: 3,
            priority: Priority::Critical,
            importance: crate::models::gap::Importance::MustHave,
            estimated_time_to_close: 64,
        };
        let summary = GapSummary::from(&gap);
        assert_eq!(summary.skill_id, "js");
        assert_eq!(summary.gap_size, 3);
        assert_eq!(summary.priority, Priority::Critical);
    }
}
