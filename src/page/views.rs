//! Presentation models built from the typed content

use chrono::NaiveDate;

use crate::models::{Proficiency, Project, ProjectStatus, Skill, Testimonial, WorkExperience};

/// Number of featured projects shown in the hero
pub const HERO_PROJECT_COUNT: usize = 3;

/// Document head metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl PageMeta {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn keyword_list(&self) -> String {
        self.keywords.join(", ")
    }
}

impl Default for PageMeta {
    fn default() -> Self {
        PageMeta::new(
            "Professional Developer Portfolio | Full-Stack Developer",
            "Professional full-stack developer specializing in React, Node.js, and modern web \
             technologies. View my projects, skills, and client testimonials.",
        )
        .with_keywords(&["developer", "portfolio", "web development", "projects", "skills"])
    }
}

/// A project status filter button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    pub key: &'static str,
    pub label: &'static str,
}

pub const STATUS_OPTIONS: [StatusOption; 4] = [
    StatusOption { key: "all", label: "All Projects" },
    StatusOption { key: "completed", label: "Completed" },
    StatusOption { key: "in_progress", label: "In Progress" },
    StatusOption { key: "planned", label: "Planned" },
];

fn status_class(status: &ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "status-completed",
        ProjectStatus::InProgress => "status-in-progress",
        _ => "status-other",
    }
}

fn proficiency_class(level: &Proficiency) -> &'static str {
    match level {
        Proficiency::Beginner => "skill-beginner",
        Proficiency::Intermediate => "skill-intermediate",
        Proficiency::Advanced => "skill-advanced",
        // unknown levels share the expert badge
        _ => "skill-expert",
    }
}

/// Project as shown on cards and the detail page.
///
/// Absent links and images are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub status_key: String,
    pub status_label: String,
    pub status_class: &'static str,
    pub featured: bool,
    pub live_url: String,
    pub github_url: String,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        let metadata = &project.metadata;
        Self {
            slug: project.slug.clone(),
            name: metadata.project_name.clone(),
            description: metadata.description.clone(),
            image: metadata
                .project_image
                .as_ref()
                .map(|image| image.sized(600, 400))
                .unwrap_or_default(),
            technologies: metadata
                .technology_list()
                .into_iter()
                .map(str::to_string)
                .collect(),
            status_key: metadata.status.key.as_str().to_string(),
            status_label: metadata.status.label(),
            status_class: status_class(&metadata.status.key),
            featured: metadata.featured,
            live_url: metadata.live_url.clone().unwrap_or_default(),
            github_url: metadata.github_url.clone().unwrap_or_default(),
        }
    }
}

/// The first few featured projects, for the hero
pub fn hero_cards(featured: &[Project]) -> Vec<ProjectCard> {
    featured
        .iter()
        .take(HERO_PROJECT_COUNT)
        .map(ProjectCard::from_project)
        .collect()
}

/// Projects whose status key is `key`; `"all"` keeps every project
pub fn filter_by_status<'a>(cards: &'a [ProjectCard], key: &str) -> Vec<&'a ProjectCard> {
    cards
        .iter()
        .filter(|card| key == "all" || card.status_key == key)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCard {
    pub name: String,
    pub icon: String,
    pub years: String,
    pub proficiency_label: String,
    pub proficiency_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub label: String,
    pub skills: Vec<SkillCard>,
}

fn years_label(years: Option<f64>) -> String {
    match years {
        Some(years) if years > 0.0 => format!("{} years experience", years),
        _ => String::new(),
    }
}

/// Group skills by category label, groups in order of first appearance
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let metadata = &skill.metadata;
        let label = metadata.category.label();
        let card = SkillCard {
            name: metadata.skill_name.clone(),
            icon: metadata
                .icon
                .as_ref()
                .map(|icon| icon.sized(80, 80))
                .unwrap_or_default(),
            years: years_label(metadata.years_experience),
            proficiency_label: metadata.proficiency.label(),
            proficiency_class: proficiency_class(&metadata.proficiency.key),
        };

        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.skills.push(card),
            None => groups.push(SkillGroup {
                label,
                skills: vec![card],
            }),
        }
    }
    groups
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company_name: String,
    pub company_website: String,
    pub period: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: String,
}

/// "March 2021"
pub fn format_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Work history, most recent start first
pub fn experience_timeline(jobs: &[WorkExperience]) -> Vec<ExperienceEntry> {
    let mut sorted: Vec<&WorkExperience> = jobs.iter().collect();
    sorted.sort_by(|a, b| b.metadata.start_date.cmp(&a.metadata.start_date));

    sorted
        .into_iter()
        .map(|job| {
            let metadata = &job.metadata;
            let end = match metadata.end_date {
                Some(end) if !metadata.current => format_month(end),
                _ => "Present".to_string(),
            };
            ExperienceEntry {
                job_title: metadata.job_title.clone(),
                company_name: metadata.company_name.clone(),
                company_website: metadata.company_website.clone().unwrap_or_default(),
                period: format!("{} - {}", format_month(metadata.start_date), end),
                current: metadata.current,
                description: metadata.description.clone(),
                achievements: metadata
                    .achievement_list()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                technologies: metadata.technology_list().join(", "),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialCard {
    pub client_name: String,
    pub client_title: String,
    pub company_name: String,
    pub body: String,
    pub photo: String,
    /// Class of each of the five stars; empty without a rating
    pub stars: Vec<&'static str>,
    pub related_project: String,
}

impl TestimonialCard {
    pub fn from_testimonial(testimonial: &Testimonial) -> Self {
        let metadata = &testimonial.metadata;
        let stars = match &metadata.rating {
            Some(rating) => {
                let filled = rating.key.stars().unwrap_or(0);
                (1..=5)
                    .map(|star| if star <= filled { "star-filled" } else { "star-empty" })
                    .collect()
            }
            None => Vec::new(),
        };

        Self {
            client_name: metadata.client_name.clone(),
            client_title: metadata.client_title.clone().unwrap_or_default(),
            company_name: metadata.company_name.clone().unwrap_or_default(),
            body: metadata.testimonial.clone(),
            photo: metadata
                .client_photo
                .as_ref()
                .map(|photo| photo.sized(120, 120))
                .unwrap_or_default(),
            stars,
            related_project: metadata
                .related_project
                .as_ref()
                .map(|project| project.metadata.project_name.clone())
                .unwrap_or_default(),
        }
    }
}
