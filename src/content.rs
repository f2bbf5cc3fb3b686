//! Typed accessors over the content bucket
//!
//! Every accessor asks for the same projection ([`PROPS`]) and expansion
//! depth ([`DEPTH`]), and treats the bucket's 404 for an empty result as
//! "no content" rather than a failure.

use std::sync::Arc;

use cosmic_rust_objects::{BucketClient, ObjectFilter, ObjectsError};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ContentConfig;
use crate::error::{Error, Result};
use crate::models::{Collection, CosmicObject, Project, Skill, Testimonial, WorkExperience};

/// Fields requested for every object
pub const PROPS: [&str; 4] = ["id", "title", "slug", "metadata"];

/// Levels of related objects expanded inline
pub const DEPTH: u8 = 1;

/// Read access to the objects of a bucket.
///
/// Implementations return raw objects and report an empty result the way
/// the Objects API does, with a not-found error.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// All objects matching `filter`
    async fn find_objects(&self, filter: ObjectFilter) -> std::result::Result<Vec<Value>, ObjectsError>;

    /// The first object matching `filter`
    async fn find_object(&self, filter: ObjectFilter) -> std::result::Result<Value, ObjectsError>;
}

#[async_trait::async_trait]
impl ObjectStore for BucketClient {
    async fn find_objects(&self, filter: ObjectFilter) -> std::result::Result<Vec<Value>, ObjectsError> {
        let response = self
            .find(filter)
            .props(&PROPS)
            .depth(DEPTH)
            .execute::<Value>()
            .await?;
        Ok(response.objects)
    }

    async fn find_object(&self, filter: ObjectFilter) -> std::result::Result<Value, ObjectsError> {
        self.find_one(filter)
            .props(&PROPS)
            .depth(DEPTH)
            .execute::<Value>()
            .await
    }
}

/// Collapse the store's not-found signal into `None`; tag anything else
/// with the collection that failed.
fn classify<T>(
    result: std::result::Result<T, ObjectsError>,
    collection: Collection,
    scope: &'static str,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => {
            tracing::debug!(%collection, scope, "no objects found");
            Ok(None)
        }
        Err(e) => {
            tracing::warn!(%collection, scope, error = %e, "fetch failed");
            Err(Error::fetch(collection, scope, e))
        }
    }
}

fn decode<M: DeserializeOwned>(
    value: Value,
    collection: Collection,
    scope: &'static str,
) -> Result<CosmicObject<M>> {
    serde_json::from_value(value)
        .map_err(|e| Error::fetch(collection, scope, ObjectsError::SerializationError(e)))
}

/// Typed content accessors sharing one store handle
#[derive(Debug)]
pub struct Content<S = BucketClient> {
    store: Arc<S>,
}

impl<S> Clone for Content<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl Content<BucketClient> {
    /// Build the accessors on a bucket client for `config`.
    ///
    /// The configuration is not validated; see [`ContentConfig::validate`].
    pub fn from_config(config: &ContentConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self::new(BucketClient::new(config.bucket_config(), http_client)))
    }
}

impl<S: ObjectStore> Content<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn fetch_all<M: DeserializeOwned>(
        &self,
        collection: Collection,
        scope: &'static str,
        filter: ObjectFilter,
    ) -> Result<Vec<CosmicObject<M>>> {
        let values = classify(self.store.find_objects(filter).await, collection, scope)?
            .unwrap_or_default();

        let objects = values
            .into_iter()
            .map(|value| decode(value, collection, scope))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(%collection, scope, count = objects.len(), "fetched objects");
        Ok(objects)
    }

    /// Every project
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let collection = Collection::Projects;
        self.fetch_all(collection, "projects", ObjectFilter::of_type(collection.as_str()))
            .await
    }

    /// Projects flagged as featured.
    ///
    /// The filter is sent to the bucket and applied again here.
    pub async fn get_featured_projects(&self) -> Result<Vec<Project>> {
        let collection = Collection::Projects;
        let filter = ObjectFilter::of_type(collection.as_str()).eq("metadata.featured", true);

        let mut projects: Vec<Project> =
            self.fetch_all(collection, "featured projects", filter).await?;
        projects.retain(|project| project.metadata.featured);
        Ok(projects)
    }

    pub async fn get_skills(&self) -> Result<Vec<Skill>> {
        let collection = Collection::Skills;
        self.fetch_all(collection, "skills", ObjectFilter::of_type(collection.as_str()))
            .await
    }

    /// Work history, in no particular order
    pub async fn get_work_experience(&self) -> Result<Vec<WorkExperience>> {
        let collection = Collection::WorkExperience;
        self.fetch_all(
            collection,
            "work experience",
            ObjectFilter::of_type(collection.as_str()),
        )
        .await
    }

    pub async fn get_testimonials(&self) -> Result<Vec<Testimonial>> {
        let collection = Collection::Testimonials;
        self.fetch_all(collection, "testimonials", ObjectFilter::of_type(collection.as_str()))
            .await
    }

    /// The project whose slug is exactly `slug`, if any
    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>> {
        let collection = Collection::Projects;
        let scope = "project";
        let filter = ObjectFilter::of_type(collection.as_str()).slug(slug);

        let Some(value) = classify(self.store.find_object(filter).await, collection, scope)? else {
            return Ok(None);
        };
        let project: Project = decode(value, collection, scope)?;

        if project.slug != slug {
            tracing::warn!(requested = slug, returned = %project.slug, "slug mismatch, ignoring object");
            return Ok(None);
        }
        Ok(Some(project))
    }
}
