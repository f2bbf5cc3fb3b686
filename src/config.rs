//! Configuration for the content client

use std::fmt;
use std::time::Duration;

use cosmic_rust_objects::{ApiEnvironment, BucketConfig, DEFAULT_API_VERSION};
use reqwest::Url;

use crate::error::{Error, Result};

/// Environment variable holding the bucket slug
pub const BUCKET_SLUG_VAR: &str = "COSMIC_BUCKET_SLUG";
/// Environment variable holding the read key
pub const READ_KEY_VAR: &str = "COSMIC_READ_KEY";
/// Environment variable holding the write key
pub const WRITE_KEY_VAR: &str = "COSMIC_WRITE_KEY";
/// Environment variable selecting the API environment
pub const API_ENVIRONMENT_VAR: &str = "COSMIC_API_ENVIRONMENT";
/// Environment variable overriding the API URL
pub const API_URL_VAR: &str = "COSMIC_API_URL";

/// Options for the HTTP side of the content client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The API environment name
    pub api_environment: String,

    /// Overrides the API URL of the environment
    pub api_url: Option<String>,

    /// The API version path segment
    pub api_version: String,

    /// Transport timeout per request. Off unless set.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_environment: ApiEnvironment::Staging.as_str().to_string(),
            api_url: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientOptions {
    /// Set the API environment
    pub fn with_api_environment(mut self, value: &str) -> Self {
        self.api_environment = value.to_string();
        self
    }

    /// Set the API URL override
    pub fn with_api_url(mut self, value: Option<&str>) -> Self {
        self.api_url = value.map(str::to_string);
        self
    }

    /// Set the API version
    pub fn with_api_version(mut self, value: &str) -> Self {
        self.api_version = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}

/// Everything needed to reach the content bucket
#[derive(Clone)]
pub struct ContentConfig {
    pub bucket_slug: String,
    pub read_key: String,
    pub write_key: String,
    pub options: ClientOptions,
}

impl ContentConfig {
    /// Create a configuration with default options
    pub fn new(bucket_slug: &str, read_key: &str, write_key: &str) -> Self {
        Self {
            bucket_slug: bucket_slug.to_string(),
            read_key: read_key.to_string(),
            write_key: write_key.to_string(),
            options: ClientOptions::default(),
        }
    }

    /// Replace the client options
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// Missing variables become empty values; the first request made with
    /// them fails instead.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut options = ClientOptions::default();
        if let Some(environment) = read(API_ENVIRONMENT_VAR) {
            options = options.with_api_environment(&environment);
        }
        if let Some(url) = read(API_URL_VAR) {
            options = options.with_api_url(Some(url.as_str()));
        }

        Self {
            bucket_slug: read(BUCKET_SLUG_VAR).unwrap_or_default(),
            read_key: read(READ_KEY_VAR).unwrap_or_default(),
            write_key: read(WRITE_KEY_VAR).unwrap_or_default(),
            options,
        }
    }

    /// Check the configuration up front instead of on the first request.
    ///
    /// The write key is not required: nothing in the site writes.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_slug.trim().is_empty() {
            return Err(Error::config(format!("{} is not set", BUCKET_SLUG_VAR)));
        }
        if self.read_key.trim().is_empty() {
            return Err(Error::config(format!("{} is not set", READ_KEY_VAR)));
        }
        match &self.options.api_url {
            Some(url) => {
                Url::parse(url)
                    .map_err(|e| Error::config(format!("{} is invalid: {}", API_URL_VAR, e)))?;
            }
            None => {
                self.options
                    .api_environment
                    .parse::<ApiEnvironment>()
                    .map_err(|e| Error::config(format!("{}: {}", API_ENVIRONMENT_VAR, e)))?;
            }
        }
        Ok(())
    }

    /// The bucket settings handed to the objects client
    pub fn bucket_config(&self) -> BucketConfig {
        let mut config = BucketConfig::new(&self.bucket_slug, &self.read_key, &self.write_key)
            .with_api_environment(&self.options.api_environment)
            .with_api_version(&self.options.api_version);
        if let Some(url) = &self.options.api_url {
            config = config.with_api_url(url);
        }
        config
    }
}

impl fmt::Debug for ContentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentConfig")
            .field("bucket", &self.bucket_config())
            .field("request_timeout", &self.options.request_timeout)
            .finish()
    }
}
