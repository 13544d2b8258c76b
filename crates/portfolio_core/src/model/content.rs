//! Biographical page content.
//!
//! # Responsibility
//! - Hold the static text and link data every section renders.
//! - Provide the shipped defaults and a validation pass for custom content.
//!
//! # Invariants
//! - `profile.roles` is non-empty (the hero typewriter cycles through it).
//! - Skill levels are percentages in `0..=100`.
//! - Project titles are unique.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum value of a skill proficiency bar.
pub const SKILL_LEVEL_MAX: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    /// Phrases cycled by the hero typewriter, in display order.
    pub roles: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage in `0..=100`.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub handle: String,
}

/// Everything the page renders besides chrome and decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub social_links: Vec<SocialLink>,
}

impl SiteContent {
    /// Validates content-level invariants.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.roles.iter().all(|role| role.trim().is_empty()) {
            return Err(ContentError::MissingRoles);
        }

        for category in &self.skill_categories {
            for skill in &category.skills {
                if skill.level > SKILL_LEVEL_MAX {
                    return Err(ContentError::SkillLevelOutOfRange {
                        skill: skill.name.clone(),
                        level: skill.level,
                    });
                }
            }
        }

        let mut titles = BTreeSet::new();
        for project in &self.projects {
            if !titles.insert(project.title.trim()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
        }
        Ok(())
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "SARAN".to_string(),
                title: "Creative Developer".to_string(),
                roles: strings(&["Web Developer", "Graphic Designer", "UI-UX Designer"]),
                summary: "Passionate about creating digital experiences that blend creativity \
                          with functionality. I transform ideas into beautiful, interactive \
                          solutions that make a difference."
                    .to_string(),
            },
            stats: vec![
                stat("1.5+", "Years Experience"),
                stat("15+", "Projects Completed"),
                stat("100%", "Client Satisfaction"),
                stat("24/7", "Support Available"),
            ],
            projects: vec![
                project(
                    "PRIME SHOP",
                    "Interactive e-commerce platform with real-time analytics and dynamic \
                     product visualization.",
                    "PRIME-SHOP/index.html",
                    "PRIME-SHOP.git",
                ),
                project(
                    "MEMORY SEQUENCE GAME",
                    "Memory sequence game with animated transitions, multiple difficulty \
                     levels and user tracking.",
                    "MEMORY-SQUENCE-GAME",
                    "MEMORY-SQUENCE-GAME",
                ),
                project(
                    "MEMORY MATCHING GAME",
                    "Two player card game: players take turns flipping two cards to find \
                     matching pairs until every pair is found.",
                    "MEMORY-CARDFLIP-GAME",
                    "MEMORY-CARDFLIP-GAME",
                ),
                project(
                    "WEATHER APP",
                    "Real-time weather application with geolocation support, showing \
                     current conditions and forecasts from a public API.",
                    "WEATHER-APP",
                    "WEATHER-APP",
                ),
            ],
            skill_categories: vec![
                category(
                    "Frontend Development",
                    &[
                        ("React/Next.js", 95),
                        ("SQL", 100),
                        ("HTML5/CSS3", 95),
                        ("JavaScript", 92),
                        ("TailwindCSS", 48),
                        ("Python", 85),
                    ],
                ),
                category(
                    "Design Tools",
                    &[
                        ("Figma", 92),
                        ("Adobe Photoshop", 88),
                        ("Adobe Illustrator", 85),
                        ("Adobe After Effects", 80),
                        ("Sketch", 75),
                        ("Blender", 40),
                    ],
                ),
                category(
                    "UI/UX Design",
                    &[
                        ("User Research", 88),
                        ("Wireframing", 92),
                        ("Prototyping", 90),
                        ("Design Systems", 95),
                        ("User Testing", 85),
                        ("Accessibility", 82),
                    ],
                ),
            ],
            social_links: vec![
                SocialLink {
                    name: "Email".to_string(),
                    url: "mailto:sarankumaran7733@gmail.com".to_string(),
                    handle: "sarankumaran7733@gmail.com".to_string(),
                },
                SocialLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com/K-Saran".to_string(),
                    handle: "@saran".to_string(),
                },
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/k-saran-47b638326".to_string(),
                    handle: "/in/saran".to_string(),
                },
            ],
        }
    }
}

/// Content validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    MissingRoles,
    SkillLevelOutOfRange { skill: String, level: u8 },
    DuplicateProject(String),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRoles => write!(f, "profile must declare at least one role"),
            Self::SkillLevelOutOfRange { skill, level } => write!(
                f,
                "skill `{skill}` level {level} exceeds {SKILL_LEVEL_MAX}"
            ),
            Self::DuplicateProject(title) => write!(f, "duplicate project title: {title}"),
        }
    }
}

impl Error for ContentError {}

const GITHUB_PAGES_BASE: &str = "https://k-saran.github.io";
const GITHUB_REPO_BASE: &str = "https://github.com/K-Saran";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn stat(number: &str, label: &str) -> Stat {
    Stat {
        number: number.to_string(),
        label: label.to_string(),
    }
}

fn project(title: &str, description: &str, live_path: &str, repo_path: &str) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        technologies: strings(&["HTML", "CSS", "JAVASCRIPT"]),
        live_url: Some(format!("{GITHUB_PAGES_BASE}/{live_path}")),
        repo_url: Some(format!("{GITHUB_REPO_BASE}/{repo_path}")),
    }
}

fn category(title: &str, skills: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        title: title.to_string(),
        skills: skills
            .iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level: *level,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentError, SiteContent};

    #[test]
    fn default_content_is_valid() {
        let content = SiteContent::default();
        content.validate().expect("shipped content must validate");
        assert_eq!(content.profile.roles.len(), 3);
        assert_eq!(content.projects.len(), 4);
    }

    #[test]
    fn validate_rejects_out_of_range_skill_level() {
        let mut content = SiteContent::default();
        content.skill_categories[0].skills[0].level = 101;
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::SkillLevelOutOfRange { level: 101, .. }));
    }

    #[test]
    fn validate_rejects_duplicate_projects_and_blank_roles() {
        let mut content = SiteContent::default();
        let first = content.projects[0].clone();
        content.projects.push(first);
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateProject("PRIME SHOP".to_string()))
        );

        let mut content = SiteContent::default();
        content.profile.roles = vec!["  ".to_string()];
        assert_eq!(content.validate(), Err(ContentError::MissingRoles));
    }
}
