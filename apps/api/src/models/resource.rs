use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Course,
    Tutorial,
    Book,
    Project,
    Documentation,
    Video,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Course => "course",
            ResourceType::Tutorial => "tutorial",
            ResourceType::Book => "book",
            ResourceType::Project => "project",
            ResourceType::Documentation => "documentation",
            ResourceType::Video => "video",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ResourceLevel {
    /// Difficulty rank: beginner(1) < intermediate(2) < advanced(3).
    pub fn rank(self) -> u8 {
        match self {
            ResourceLevel::Beginner => 1,
            ResourceLevel::Intermediate => 2,
            ResourceLevel::Advanced => 3,
        }
    }
}

/// A catalog entry. Immutable reference data keyed by normalized skill name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub provider: String,
    pub url: String,
    /// Hours.
    pub duration: u32,
    pub level: ResourceLevel,
}

/// A ranked recommendation derived from a gap and a catalog entry.
/// `priority` is the 1-based position of the source gap in the
/// priority-sorted gap list, not a severity class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecommendation {
    pub skill_id: String,
    pub skill_name: String,
    pub resource_type: ResourceType,
    pub title: String,
    pub description: String,
    pub url: String,
    pub provider: String,
    pub estimated_duration: u32,
    pub priority: usize,
}
