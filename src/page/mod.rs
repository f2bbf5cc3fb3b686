//! Page composition and rendering

pub mod views;

use askama::Template;

use crate::content::{Content, ObjectStore};
use crate::error::{Error, Result};
use crate::models::{Project, Skill, Testimonial, WorkExperience};

pub use views::*;

/// Everything the home page shows
#[derive(Debug, Clone, PartialEq)]
pub struct HomeContent {
    pub projects: Vec<Project>,
    pub featured_projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub work_experience: Vec<WorkExperience>,
    pub testimonials: Vec<Testimonial>,
}

/// Fetch every collection of the home page concurrently.
///
/// All five requests run to completion; if any of them failed the page
/// fails as a whole with [`Error::Composition`].
pub async fn compose_home<S: ObjectStore>(content: &Content<S>) -> Result<HomeContent> {
    let (projects, featured_projects, skills, work_experience, testimonials) = tokio::join!(
        content.get_projects(),
        content.get_featured_projects(),
        content.get_skills(),
        content.get_work_experience(),
        content.get_testimonials(),
    );

    Ok(HomeContent {
        projects: projects.map_err(Error::composition)?,
        featured_projects: featured_projects.map_err(Error::composition)?,
        skills: skills.map_err(Error::composition)?,
        work_experience: work_experience.map_err(Error::composition)?,
        testimonials: testimonials.map_err(Error::composition)?,
    })
}

/// What a rendered page turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Project,
    NotFound,
    /// The content could not be loaded
    Unavailable,
}

impl PageKind {
    /// HTTP status a server would answer with
    pub fn status_code(&self) -> u16 {
        match self {
            PageKind::Home | PageKind::Project => 200,
            PageKind::NotFound => 404,
            PageKind::Unavailable => 503,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub kind: PageKind,
    pub html: String,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    meta: &'a PageMeta,
    hero: Vec<ProjectCard>,
    projects: Vec<ProjectCard>,
    status_options: &'a [StatusOption],
    skill_groups: Vec<SkillGroup>,
    experience: Vec<ExperienceEntry>,
    testimonials: Vec<TestimonialCard>,
}

impl<'a> HomeTemplate<'a> {
    fn new(meta: &'a PageMeta, home: &HomeContent) -> Self {
        Self {
            meta,
            hero: hero_cards(&home.featured_projects),
            projects: home.projects.iter().map(ProjectCard::from_project).collect(),
            status_options: &STATUS_OPTIONS,
            skill_groups: group_skills(&home.skills),
            experience: experience_timeline(&home.work_experience),
            testimonials: home
                .testimonials
                .iter()
                .map(TestimonialCard::from_testimonial)
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "project.html")]
struct ProjectTemplate<'a> {
    meta: &'a PageMeta,
    card: ProjectCard,
}

#[derive(Template)]
#[template(path = "unavailable.html")]
struct UnavailableTemplate<'a> {
    meta: &'a PageMeta,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    meta: &'a PageMeta,
    slug: &'a str,
}

/// Render fetched content as the home page
pub fn render_home_content(meta: &PageMeta, home: &HomeContent) -> Result<String> {
    Ok(HomeTemplate::new(meta, home).render()?)
}

fn render_unavailable(meta: &PageMeta, error: &Error) -> Result<RenderedPage> {
    tracing::error!(
        error = %error,
        collection = ?error.collection(),
        "Error fetching data"
    );
    Ok(RenderedPage {
        kind: PageKind::Unavailable,
        html: UnavailableTemplate { meta }.render()?,
    })
}

/// Fetch and render the home page.
///
/// A failed fetch renders the "unable to load" page instead; only a
/// template failure is an error.
pub async fn render_home<S: ObjectStore>(
    content: &Content<S>,
    meta: &PageMeta,
) -> Result<RenderedPage> {
    match compose_home(content).await {
        Ok(home) => Ok(RenderedPage {
            kind: PageKind::Home,
            html: render_home_content(meta, &home)?,
        }),
        Err(e) => render_unavailable(meta, &e),
    }
}

/// Fetch and render the detail page of one project
pub async fn render_project_page<S: ObjectStore>(
    content: &Content<S>,
    meta: &PageMeta,
    slug: &str,
) -> Result<RenderedPage> {
    match content.get_project_by_slug(slug).await {
        Ok(Some(project)) => {
            let card = ProjectCard::from_project(&project);
            let meta = PageMeta {
                title: format!("{} | {}", card.name, meta.title),
                description: card.description.clone(),
                keywords: meta
                    .keywords
                    .iter()
                    .cloned()
                    .chain(card.technologies.iter().cloned())
                    .collect(),
            };
            Ok(RenderedPage {
                kind: PageKind::Project,
                html: ProjectTemplate {
                    meta: &meta,
                    card,
                }
                .render()?,
            })
        }
        Ok(None) => Ok(RenderedPage {
            kind: PageKind::NotFound,
            html: NotFoundTemplate { meta, slug }.render()?,
        }),
        Err(e) => render_unavailable(meta, &e),
    }
}
