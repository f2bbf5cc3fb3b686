//! Cosmic Portfolio
//!
//! A developer portfolio rendered server-side from the projects, skills,
//! work experience and testimonials stored in a Cosmic bucket.

pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod page;

use cosmic_rust_objects::BucketClient;

use crate::config::ContentConfig;
use crate::content::{Content, ObjectStore};
use crate::error::Result;
use crate::page::{PageMeta, RenderedPage};

/// The main entry point: content accessors plus the page metadata used
/// when rendering
#[derive(Debug, Clone)]
pub struct Portfolio<S = BucketClient> {
    content: Content<S>,
    meta: PageMeta,
}

impl Portfolio<BucketClient> {
    /// Create a portfolio reading from the bucket described by `config`
    ///
    /// # Example
    ///
    /// ```
    /// use cosmic_portfolio::{config::ContentConfig, Portfolio};
    ///
    /// let config = ContentConfig::new("my-portfolio", "read-key", "write-key");
    /// let portfolio = Portfolio::new(&config).unwrap();
    /// ```
    pub fn new(config: &ContentConfig) -> Result<Self> {
        Ok(Self::with_content(Content::from_config(config)?))
    }

    /// Create a portfolio from the `COSMIC_*` environment variables.
    ///
    /// Missing variables are not reported here; rendering shows the
    /// "unable to load" page instead.
    pub fn from_env() -> Result<Self> {
        Self::new(&ContentConfig::from_env())
    }
}

impl<S: ObjectStore> Portfolio<S> {
    /// Create a portfolio on an existing set of accessors
    pub fn with_content(content: Content<S>) -> Self {
        Self {
            content,
            meta: PageMeta::default(),
        }
    }

    /// Replace the document head metadata
    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = meta;
        self
    }

    /// The typed content accessors
    pub fn content(&self) -> &Content<S> {
        &self.content
    }

    /// The document head metadata used by every rendered page
    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Render the home page
    pub async fn render_home(&self) -> Result<RenderedPage> {
        page::render_home(&self.content, &self.meta).await
    }

    /// Render the detail page of the project at `slug`
    pub async fn render_project(&self, slug: &str) -> Result<RenderedPage> {
        page::render_project_page(&self.content, &self.meta, slug).await
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::{ClientOptions, ContentConfig};
    pub use crate::content::{Content, ObjectStore};
    pub use crate::error::Error;
    pub use crate::models::{Collection, Project, Skill, Testimonial, WorkExperience};
    pub use crate::page::{PageKind, RenderedPage};
    pub use crate::Portfolio;
}
