use serde::{Deserialize, Serialize};

/// Area of the stack a skill belongs to. Drives the category tabs of the
/// skill browser on the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Design,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Design,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Design => "design",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Devops => "DevOps",
            SkillCategory::Design => "Design",
        }
    }
}

/// A technology with a self-assessed proficiency.
///
/// `level` is a percentage and never exceeds 100; the hardcoded content is
/// checked against that bound in the content tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
    pub years_of_experience: u8,
    pub description: String,
    pub related_skills: Vec<String>,
    pub key_projects: Vec<String>,
    /// CSS color used for the skill's bar and badge.
    pub color: String,
}

impl Skill {
    pub fn years_label(&self) -> String {
        match self.years_of_experience {
            1 => "1 year".to_string(),
            n => format!("{} years", n),
        }
    }
}

/// Aggregate shown in the chart view, one per non-empty category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategoryStats {
    pub category: SkillCategory,
    pub count: usize,
    /// Mean level rounded to the nearest integer (halves round up).
    pub average_level: u8,
    /// Highest level in the category; the first one listed wins ties.
    pub top_skill: Option<String>,
}

/// Computes per-category statistics in `SkillCategory::ALL` order, skipping
/// categories with no skills.
pub fn category_stats(skills: &[Skill]) -> Vec<SkillCategoryStats> {
    SkillCategory::ALL
        .iter()
        .filter_map(|&category| {
            let members: Vec<&Skill> = skills.iter().filter(|s| s.category == category).collect();
            if members.is_empty() {
                return None;
            }

            let total: u32 = members.iter().map(|s| u32::from(s.level)).sum();
            let average = (f64::from(total) / members.len() as f64).round() as u8;

            let mut top: Option<&Skill> = None;
            for skill in &members {
                if top.is_none_or(|best| skill.level > best.level) {
                    top = Some(skill);
                }
            }

            Some(SkillCategoryStats {
                category,
                count: members.len(),
                average_level: average,
                top_skill: top.map(|s| s.name.clone()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: u8, category: SkillCategory) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            category,
            years_of_experience: 1,
            description: String::new(),
            related_skills: Vec::new(),
            key_projects: Vec::new(),
            color: "#000".to_string(),
        }
    }

    #[test]
    fn stats_per_category() {
        let skills = vec![
            skill("Rust", 80, SkillCategory::Backend),
            skill("CSS", 70, SkillCategory::Frontend),
            skill("Go", 85, SkillCategory::Backend),
            skill("Figma", 60, SkillCategory::Design),
        ];
        let stats = category_stats(&skills);

        let categories: Vec<SkillCategory> = stats.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            [SkillCategory::Frontend, SkillCategory::Backend, SkillCategory::Design]
        );

        let backend = &stats[1];
        assert_eq!(backend.count, 2);
        // 82.5 rounds up.
        assert_eq!(backend.average_level, 83);
        assert_eq!(backend.top_skill.as_deref(), Some("Go"));
    }

    #[test]
    fn first_listed_wins_top_level_ties() {
        let skills = vec![
            skill("Tailwind CSS", 88, SkillCategory::Frontend),
            skill("React", 88, SkillCategory::Frontend),
            skill("HTML", 75, SkillCategory::Frontend),
        ];
        let stats = category_stats(&skills);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].top_skill.as_deref(), Some("Tailwind CSS"));
        assert_eq!(stats[0].average_level, 84);
    }

    #[test]
    fn no_skills_no_stats() {
        assert!(category_stats(&[]).is_empty());
    }
}
