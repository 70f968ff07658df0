//! Role requirements table — immutable reference data, built once at startup.
//!
//! Lookup is a three-step fallback that never fails: exact key → normalized
//! title → the `default` role. An unknown role id silently resolving to the
//! default requirement set is deliberate, so a caller always gets a
//! well-formed analysis.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::models::gap::{Importance, RequiredSkill, RoleRequirement};

pub const DEFAULT_ROLE_ID: &str = "default";

pub struct RoleCatalog {
    roles: IndexMap<String, RoleRequirement>,
    /// Normalized role title → role key, excluding the default entry.
    title_index: HashMap<String, String>,
}

impl RoleCatalog {
    /// Builds a catalog from a role table. The table must contain a
    /// `default` entry; that is a construction-time contract, not a
    /// request-time error path.
    pub fn new(roles: IndexMap<String, RoleRequirement>) -> Self {
        assert!(
            roles.contains_key(DEFAULT_ROLE_ID),
            "role table must contain a '{DEFAULT_ROLE_ID}' entry"
        );

        let mut title_index = HashMap::new();
        for (key, role) in &roles {
            if key != DEFAULT_ROLE_ID {
                title_index
                    .entry(normalize_role_id(&role.title))
                    .or_insert_with(|| key.clone());
            }
        }

        Self { roles, title_index }
    }

    /// Resolves a role id to its requirement set.
    ///
    /// 1. exact key match
    /// 2. normalized-title match ("Frontend Developer" → frontend_developer)
    /// 3. the default role
    pub fn requirements_for(&self, role_id: &str) -> &RoleRequirement {
        if let Some(role) = self.roles.get(role_id) {
            return role;
        }
        if let Some(key) = self.title_index.get(&normalize_role_id(role_id)) {
            return &self.roles[key];
        }
        &self.roles[DEFAULT_ROLE_ID]
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// The built-in role table, seeded from the curated role dataset.
    pub fn builtin() -> Self {
        let mut roles = IndexMap::new();

        roles.insert(
            "frontend_developer".to_string(),
            role(
                "Frontend Developer",
                &[
                    ("js", "JavaScript", 4, Importance::MustHave),
                    ("react", "React", 4, Importance::MustHave),
                    ("typescript", "TypeScript", 3, Importance::GoodToHave),
                    ("git", "Git", 3, Importance::MustHave),
                    ("rest", "REST APIs", 3, Importance::GoodToHave),
                    ("communication", "Communication", 3, Importance::GoodToHave),
                    ("problem_solving", "Problem Solving", 4, Importance::MustHave),
                ],
            ),
        );

        roles.insert(
            "backend_developer".to_string(),
            role(
                "Backend Developer",
                &[
                    ("nodejs", "Node.js", 4, Importance::MustHave),
                    ("js", "JavaScript", 4, Importance::MustHave),
                    ("sql", "SQL", 4, Importance::MustHave),
                    ("rest", "REST APIs", 4, Importance::MustHave),
                    ("system", "System Design", 3, Importance::GoodToHave),
                    ("git", "Git", 3, Importance::MustHave),
                    ("problem_solving", "Problem Solving", 4, Importance::MustHave),
                ],
            ),
        );

        roles.insert(
            "full_stack_developer".to_string(),
            role(
                "Full Stack Developer",
                &[
                    ("js", "JavaScript", 4, Importance::MustHave),
                    ("react", "React", 4, Importance::MustHave),
                    ("nodejs", "Node.js", 4, Importance::MustHave),
                    ("typescript", "TypeScript", 3, Importance::GoodToHave),
                    ("sql", "SQL", 3, Importance::MustHave),
                    ("rest", "REST APIs", 4, Importance::MustHave),
                    ("git", "Git", 3, Importance::MustHave),
                    ("system", "System Design", 3, Importance::GoodToHave),
                ],
            ),
        );

        roles.insert(
            "data_scientist".to_string(),
            role(
                "Data Scientist",
                &[
                    ("python", "Python", 4, Importance::MustHave),
                    ("ml", "Machine Learning", 4, Importance::MustHave),
                    ("sql", "SQL", 3, Importance::MustHave),
                    ("ds", "Data Structures", 3, Importance::GoodToHave),
                    ("algo", "Algorithms", 3, Importance::GoodToHave),
                    ("communication", "Communication", 4, Importance::MustHave),
                    ("problem_solving", "Problem Solving", 5, Importance::MustHave),
                ],
            ),
        );

        roles.insert(
            "software_engineer".to_string(),
            role(
                "Software Engineer",
                &[
                    ("ds", "Data Structures", 4, Importance::MustHave),
                    ("algo", "Algorithms", 4, Importance::MustHave),
                    ("system", "System Design", 4, Importance::MustHave),
                    ("git", "Git", 3, Importance::MustHave),
                    ("problem_solving", "Problem Solving", 5, Importance::MustHave),
                    ("communication", "Communication", 3, Importance::GoodToHave),
                    ("teamwork", "Teamwork", 3, Importance::GoodToHave),
                    ("agile", "Agile Methodology", 3, Importance::NiceToHave),
                ],
            ),
        );

        // Generalist fallback for unknown role ids.
        roles.insert(
            DEFAULT_ROLE_ID.to_string(),
            role(
                "Software Engineer",
                &[
                    ("ds", "Data Structures", 4, Importance::MustHave),
                    ("algo", "Algorithms", 4, Importance::MustHave),
                    ("system", "System Design", 3, Importance::GoodToHave),
                ],
            ),
        );

        Self::new(roles)
    }
}

/// Normalizes a role identifier or title: lowercase, spaces and hyphens
/// mapped to underscores.
pub fn normalize_role_id(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

fn role(title: &str, skills: &[(&str, &str, u8, Importance)]) -> RoleRequirement {
    RoleRequirement {
        title: title.to_string(),
        skills: skills
            .iter()
            .map(|(id, name, level, importance)| RequiredSkill {
                skill_id: (*id).to_string(),
                skill_name: (*name).to_string(),
                required_level: *level,
                importance: *importance,
            })
            .collect(),
    }
}
