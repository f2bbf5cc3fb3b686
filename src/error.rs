//! Error handling for the portfolio site

use std::fmt;
use thiserror::Error;

use cosmic_rust_objects::ObjectsError;

use crate::models::Collection;

/// Unified error type for the portfolio site
#[derive(Error, Debug)]
pub enum Error {
    /// A collection could not be fetched from the bucket
    #[error("Failed to fetch {scope}: {source}")]
    Fetch {
        collection: Collection,
        scope: &'static str,
        #[source]
        source: ObjectsError,
    },

    /// One of the concurrent fetches behind a page failed
    #[error("Unable to compose page: {0}")]
    Composition(#[source] Box<Error>),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template rendering errors
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new fetch error for `collection`
    pub fn fetch(collection: Collection, scope: &'static str, source: ObjectsError) -> Self {
        Error::Fetch {
            collection,
            scope,
            source,
        }
    }

    /// Wrap an error raised while composing a page
    pub fn composition(inner: Error) -> Self {
        Error::Composition(Box::new(inner))
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// The collection whose fetch failed, looking through composition errors
    pub fn collection(&self) -> Option<Collection> {
        match self {
            Error::Fetch { collection, .. } => Some(*collection),
            Error::Composition(inner) => inner.collection(),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
