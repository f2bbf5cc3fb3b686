//! Metadata shapes of the four collections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{empty_as_none, expanded_or_none, split_list, ImageRef};
use super::object::CosmicObject;
use super::select::{Labeled, Proficiency, ProjectStatus, Rating, SkillCategory};

pub type Project = CosmicObject<ProjectMetadata>;
pub type Skill = CosmicObject<SkillMetadata>;
pub type WorkExperience = CosmicObject<WorkExperienceMetadata>;
pub type Testimonial = CosmicObject<TestimonialMetadata>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub project_name: String,

    #[serde(default)]
    pub description: String,

    /// Comma-separated, as entered in the bucket
    #[serde(default)]
    pub technologies: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub project_image: Option<ImageRef>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub live_url: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub github_url: Option<String>,

    pub status: Labeled<ProjectStatus>,

    #[serde(default)]
    pub featured: bool,
}

impl ProjectMetadata {
    pub fn technology_list(&self) -> Vec<&str> {
        split_list(&self.technologies)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMetadata {
    pub skill_name: String,
    pub category: Labeled<SkillCategory>,
    pub proficiency: Labeled<Proficiency>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub years_experience: Option<f64>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub icon: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceMetadata {
    pub job_title: String,
    pub company_name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub company_website: Option<String>,

    pub start_date: NaiveDate,

    /// Absent while the role is ongoing
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    #[serde(default)]
    pub description: String,

    /// One achievement per line
    #[serde(default, deserialize_with = "empty_as_none")]
    pub achievements: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub technologies: Option<String>,
}

impl WorkExperienceMetadata {
    /// Whether the role has no end yet
    pub fn is_ongoing(&self) -> bool {
        self.current || self.end_date.is_none()
    }

    pub fn achievement_list(&self) -> Vec<&str> {
        self.achievements
            .as_deref()
            .map(|text| {
                text.lines()
                    .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn technology_list(&self) -> Vec<&str> {
        self.technologies.as_deref().map(split_list).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialMetadata {
    pub client_name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub client_title: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub company_name: Option<String>,

    pub testimonial: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub rating: Option<Labeled<Rating>>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub client_photo: Option<ImageRef>,

    /// Expanded one level deep; an unexpanded id is treated as absent
    #[serde(default, deserialize_with = "expanded_or_none")]
    pub related_project: Option<Project>,
}
