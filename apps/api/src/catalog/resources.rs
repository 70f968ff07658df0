//! Learning resource catalog — immutable reference data keyed by normalized
//! skill name.
//!
//! Resolution mirrors the role table's never-fails contract: exact key →
//! first key related by substring containment → the `default` entry.

use indexmap::IndexMap;

use crate::models::resource::{LearningResource, ResourceLevel, ResourceType};

pub const DEFAULT_RESOURCE_KEY: &str = "default";

pub struct ResourceCatalog {
    entries: IndexMap<String, Vec<LearningResource>>,
}

impl ResourceCatalog {
    /// Builds a catalog from a resource table. A `default` entry is a
    /// construction-time contract.
    pub fn new(entries: IndexMap<String, Vec<LearningResource>>) -> Self {
        assert!(
            entries.contains_key(DEFAULT_RESOURCE_KEY),
            "resource table must contain a '{DEFAULT_RESOURCE_KEY}' entry"
        );
        Self { entries }
    }

    /// Resolves an already-normalized skill name to its resource list.
    ///
    /// 1. exact key match
    /// 2. first catalog key (declaration order) that contains, or is
    ///    contained in, the normalized name
    /// 3. the default resource set
    pub fn resources_for(&self, normalized_skill: &str) -> &[LearningResource] {
        if let Some(resources) = self.entries.get(normalized_skill) {
            return resources;
        }
        for (key, resources) in &self.entries {
            if key == DEFAULT_RESOURCE_KEY {
                continue;
            }
            if key.contains(normalized_skill) || normalized_skill.contains(key.as_str()) {
                return resources;
            }
        }
        &self.entries[DEFAULT_RESOURCE_KEY]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in catalog, adapted from the curated resource dataset.
    pub fn builtin() -> Self {
        use ResourceLevel::{Advanced, Beginner, Intermediate};
        use ResourceType::{Book, Course, Documentation, Project, Tutorial, Video};

        let mut entries: IndexMap<String, Vec<LearningResource>> = IndexMap::new();
        let mut add = |key: &str, list: &[(&str, ResourceType, &str, &str, u32, ResourceLevel)]| {
            entries.insert(
                key.to_string(),
                list.iter()
                    .map(|(title, resource_type, provider, url, duration, level)| {
                        LearningResource {
                            title: (*title).to_string(),
                            resource_type: *resource_type,
                            provider: (*provider).to_string(),
                            url: (*url).to_string(),
                            duration: *duration,
                            level: *level,
                        }
                    })
                    .collect(),
            );
        };

        add(
            "javascript",
            &[
                (
                    "JavaScript: The Complete Guide",
                    Course,
                    "Udemy",
                    "https://udemy.com/javascript-complete",
                    40,
                    Beginner,
                ),
                (
                    "Modern JavaScript Tutorial",
                    Tutorial,
                    "javascript.info",
                    "https://javascript.info",
                    15,
                    Intermediate,
                ),
                (
                    "You Don't Know JS",
                    Book,
                    "O'Reilly",
                    "https://github.com/getify/You-Dont-Know-JS",
                    30,
                    Advanced,
                ),
            ],
        );

        add(
            "react",
            &[
                (
                    "React - The Complete Guide",
                    Course,
                    "Udemy",
                    "https://udemy.com/react-complete",
                    50,
                    Beginner,
                ),
                (
                    "React Official Documentation",
                    Documentation,
                    "Meta",
                    "https://react.dev",
                    20,
                    Beginner,
                ),
                (
                    "Build a React App",
                    Project,
                    "FreeCodeCamp",
                    "https://freecodecamp.org/react",
                    20,
                    Intermediate,
                ),
            ],
        );

        add(
            "nodejs",
            &[
                (
                    "Node.js - The Complete Guide",
                    Course,
                    "Udemy",
                    "https://example.com/node-complete",
                    40,
                    Beginner,
                ),
                (
                    "Node.js Best Practices",
                    Documentation,
                    "Community",
                    "https://github.com/goldbergyoni/nodebestpractices",
                    15,
                    Advanced,
                ),
            ],
        );

        add(
            "typescript",
            &[
                (
                    "The TypeScript Handbook",
                    Documentation,
                    "Microsoft",
                    "https://typescriptlang.org/docs/handbook",
                    12,
                    Beginner,
                ),
                (
                    "Understanding TypeScript",
                    Course,
                    "Udemy",
                    "https://example.com/understanding-typescript",
                    22,
                    Intermediate,
                ),
            ],
        );

        add(
            "python",
            &[
                (
                    "Python for Everybody",
                    Course,
                    "University of Michigan",
                    "https://www.py4e.com",
                    35,
                    Beginner,
                ),
                (
                    "Automate the Boring Stuff with Python",
                    Book,
                    "No Starch Press",
                    "https://automatetheboringstuff.com",
                    25,
                    Beginner,
                ),
            ],
        );

        add(
            "sql",
            &[
                (
                    "SQL for Data Science",
                    Course,
                    "Coursera",
                    "https://example.com/sql-data-science",
                    20,
                    Beginner,
                ),
                (
                    "SQLZoo Interactive Tutorial",
                    Tutorial,
                    "SQLZoo",
                    "https://sqlzoo.net",
                    10,
                    Beginner,
                ),
            ],
        );

        add(
            "git",
            &[
                (
                    "Git & GitHub Crash Course",
                    Video,
                    "YouTube",
                    "https://example.com/git-crash-course",
                    2,
                    Beginner,
                ),
                (
                    "Pro Git",
                    Book,
                    "Apress",
                    "https://git-scm.com/book",
                    18,
                    Intermediate,
                ),
            ],
        );

        add(
            "restapis",
            &[
                (
                    "RESTful Web Services",
                    Course,
                    "Pluralsight",
                    "https://example.com/rest-api-course",
                    12,
                    Intermediate,
                ),
                (
                    "Build a REST API from Scratch",
                    Project,
                    "FreeCodeCamp",
                    "https://freecodecamp.org/rest-api",
                    8,
                    Intermediate,
                ),
            ],
        );

        add(
            "datastructures",
            &[
                (
                    "Visualizing Data Structures",
                    Tutorial,
                    "VisuAlgo",
                    "https://visualgo.net",
                    8,
                    Beginner,
                ),
                (
                    "Data Structures Deep Dive",
                    Course,
                    "Udemy",
                    "https://example.com/ds-deep-dive",
                    30,
                    Intermediate,
                ),
            ],
        );

        add(
            "algorithms",
            &[
                (
                    "Algorithms Specialization",
                    Course,
                    "Coursera",
                    "https://example.com/stanford-algos",
                    60,
                    Intermediate,
                ),
                (
                    "Grokking Algorithms",
                    Book,
                    "Manning",
                    "https://manning.com/grokking-algorithms",
                    15,
                    Beginner,
                ),
            ],
        );

        add(
            "systemdesign",
            &[
                (
                    "System Design Primer",
                    Documentation,
                    "Community",
                    "https://github.com/donnemartin/system-design-primer",
                    25,
                    Intermediate,
                ),
                (
                    "Designing Data-Intensive Applications",
                    Book,
                    "O'Reilly",
                    "https://dataintensive.net",
                    40,
                    Advanced,
                ),
            ],
        );

        add(
            "machinelearning",
            &[
                (
                    "Machine Learning Specialization",
                    Course,
                    "Coursera",
                    "https://example.com/ml-specialization",
                    55,
                    Beginner,
                ),
                (
                    "Hands-On Machine Learning",
                    Book,
                    "O'Reilly",
                    "https://example.com/hands-on-ml",
                    45,
                    Intermediate,
                ),
            ],
        );

        add(
            DEFAULT_RESOURCE_KEY,
            &[(
                "Skill Development Path",
                Course,
                "SkillSense Learning",
                "#",
                20,
                Intermediate,
            )],
        );

        Self::new(entries)
    }
}

/// Normalizes a skill name for catalog lookup: lowercase with spaces, dots,
/// and hyphens stripped ("Node.js" → "nodejs", "REST APIs" → "restapis").
pub fn normalize_skill_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect()
}
