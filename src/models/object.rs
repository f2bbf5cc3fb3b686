//! The object envelope shared by every collection, and the union over them

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Project, Skill, Testimonial, WorkExperience};

/// The content collections of the bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Skills,
    WorkExperience,
    Testimonials,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Projects,
        Collection::Skills,
        Collection::WorkExperience,
        Collection::Testimonials,
    ];

    /// The object type slug used in queries
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Skills => "skills",
            Collection::WorkExperience => "work-experience",
            Collection::Testimonials => "testimonials",
        }
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|collection| collection.as_str() == s)
            .ok_or_else(|| format!("Unknown object type: {}", s))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bucket object with collection-specific metadata `M`.
///
/// Accessors request only `id`, `title`, `slug` and `metadata`, so the
/// remaining envelope fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmicObject<M> {
    pub id: String,
    pub slug: String,
    pub title: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    pub metadata: M,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// An object of any collection, narrowed by its `type`
#[derive(Debug, Clone, PartialEq)]
pub enum ContentObject {
    Project(Project),
    Skill(Skill),
    WorkExperience(WorkExperience),
    Testimonial(Testimonial),
    /// An object whose type is missing or not one of the known collections
    Unknown(CosmicObject<Map<String, Value>>),
}

impl ContentObject {
    /// Narrow a raw object by its `type` field
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let collection = value
            .get("type")
            .and_then(Value::as_str)
            .and_then(|t| t.parse::<Collection>().ok());

        Ok(match collection {
            Some(Collection::Projects) => ContentObject::Project(serde_json::from_value(value)?),
            Some(Collection::Skills) => ContentObject::Skill(serde_json::from_value(value)?),
            Some(Collection::WorkExperience) => {
                ContentObject::WorkExperience(serde_json::from_value(value)?)
            }
            Some(Collection::Testimonials) => {
                ContentObject::Testimonial(serde_json::from_value(value)?)
            }
            None => ContentObject::Unknown(serde_json::from_value(value)?),
        })
    }

    pub fn collection(&self) -> Option<Collection> {
        match self {
            ContentObject::Project(_) => Some(Collection::Projects),
            ContentObject::Skill(_) => Some(Collection::Skills),
            ContentObject::WorkExperience(_) => Some(Collection::WorkExperience),
            ContentObject::Testimonial(_) => Some(Collection::Testimonials),
            ContentObject::Unknown(_) => None,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            ContentObject::Project(o) => &o.slug,
            ContentObject::Skill(o) => &o.slug,
            ContentObject::WorkExperience(o) => &o.slug,
            ContentObject::Testimonial(o) => &o.slug,
            ContentObject::Unknown(o) => &o.slug,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentObject::Project(o) => &o.title,
            ContentObject::Skill(o) => &o.title,
            ContentObject::WorkExperience(o) => &o.title,
            ContentObject::Testimonial(o) => &o.title,
            ContentObject::Unknown(o) => &o.title,
        }
    }

    pub fn as_project(&self) -> Option<&Project> {
        match self {
            ContentObject::Project(project) => Some(project),
            _ => None,
        }
    }

    pub fn as_testimonial(&self) -> Option<&Testimonial> {
        match self {
            ContentObject::Testimonial(testimonial) => Some(testimonial),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for ContentObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ContentObject::from_value(value).map_err(de::Error::custom)
    }
}
