//! Cosmic Objects API client for Rust
//!
//! This crate provides read access to the objects stored in a Cosmic bucket,
//! querying them by type and metadata and controlling the returned fields and
//! the depth of related-object expansion.
//!
//! # Example
//!
//! ```no_run
//! use cosmic_rust_objects::{BucketClient, BucketConfig, ObjectFilter};
//! use serde_json::Value;
//!
//! # async fn run() -> Result<(), cosmic_rust_objects::ObjectsError> {
//! let bucket = BucketClient::new(
//!     BucketConfig::new("my-bucket", "read-key", "write-key"),
//!     reqwest::Client::new(),
//! );
//! let response = bucket
//!     .find(ObjectFilter::of_type("projects").eq("metadata.featured", true))
//!     .props(&["id", "title", "slug", "metadata"])
//!     .depth(1)
//!     .execute::<Value>()
//!     .await?;
//! println!("{} projects", response.objects.len());
//! # Ok(())
//! # }
//! ```

mod fetch;
mod filter;
mod query;
mod types;

use reqwest::{Client, StatusCode};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

pub use filter::*;
pub use query::*;
pub use types::*;

/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v3";

/// Error type
#[derive(Error, Debug)]
pub enum ObjectsError {
    #[error("API error: {details} (Status: {status})")]
    ApiError {
        details: ApiErrorDetails,
        status: StatusCode,
    },

    #[error("API error (unparsed): {message} (Status: {status})")]
    UnparsedApiError { message: String, status: StatusCode },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl ObjectsError {
    /// HTTP status reported by the API, if the request got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ObjectsError::ApiError { status, .. } | ObjectsError::UnparsedApiError { status, .. } => {
                Some(*status)
            }
            ObjectsError::NetworkError(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the API reported that no object matched the query.
    ///
    /// The Objects API answers an empty `find` with 404 rather than an empty
    /// list, so callers use this to tell "nothing there" from a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ObjectsError::ApiError { status, .. } | ObjectsError::UnparsedApiError { status, .. }
                if *status == StatusCode::NOT_FOUND
        )
    }
}

/// Connection settings for one bucket.
///
/// Nothing is validated here: an empty slug, a bad key or an unknown
/// environment is reported by the first request made with it.
#[derive(Clone)]
pub struct BucketConfig {
    /// Bucket slug
    pub bucket_slug: String,

    /// Key sent with read requests
    pub read_key: String,

    /// Key for write requests
    pub write_key: String,

    /// API environment name (`production` or `staging`)
    pub api_environment: String,

    /// Overrides the environment's API URL when set
    pub api_url: Option<String>,

    /// API version path segment
    pub api_version: String,
}

impl BucketConfig {
    /// Create a configuration for the production environment
    pub fn new(bucket_slug: &str, read_key: &str, write_key: &str) -> Self {
        Self {
            bucket_slug: bucket_slug.to_string(),
            read_key: read_key.to_string(),
            write_key: write_key.to_string(),
            api_environment: ApiEnvironment::Production.as_str().to_string(),
            api_url: None,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Set the API environment
    pub fn with_api_environment(mut self, environment: &str) -> Self {
        self.api_environment = environment.to_string();
        self
    }

    /// Send requests to `url` instead of the environment's API
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = Some(url.to_string());
        self
    }

    /// Set the API version path segment
    pub fn with_api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    /// Base URL requests are sent to
    pub fn api_base_url(&self) -> Result<String, ObjectsError> {
        match &self.api_url {
            Some(url) => Ok(url.clone()),
            None => {
                let environment: ApiEnvironment = self.api_environment.parse()?;
                Ok(environment.api_url().to_string())
            }
        }
    }

    /// URL of the bucket's objects endpoint
    pub fn objects_url(&self) -> Result<String, ObjectsError> {
        if self.bucket_slug.trim().is_empty() {
            return Err(ObjectsError::InvalidParameters(
                "Bucket slug is empty".to_string(),
            ));
        }

        let mut url = Url::parse(&self.api_base_url()?)?;
        url.path_segments_mut()
            .map_err(|_| ObjectsError::UrlParseError(url::ParseError::EmptyHost))?
            .pop_if_empty()
            .push(&self.api_version)
            .push("buckets")
            .push(&self.bucket_slug)
            .push("objects");

        Ok(url.to_string())
    }
}

impl fmt::Debug for BucketConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketConfig")
            .field("bucket_slug", &self.bucket_slug)
            .field("read_key", &redact(&self.read_key))
            .field("write_key", &redact(&self.write_key))
            .field("api_environment", &self.api_environment)
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

/// Client for one bucket's objects
#[derive(Debug, Clone)]
pub struct BucketClient {
    config: Arc<BucketConfig>,
    http_client: Client,
}

impl BucketClient {
    /// Create a new bucket client
    pub fn new(config: BucketConfig, http_client: Client) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
        }
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &BucketConfig {
        &self.config
    }

    /// Find every object matching `filter`
    pub fn find(&self, filter: ObjectFilter) -> FindBuilder {
        FindBuilder::new(self.config.clone(), self.http_client.clone(), filter)
    }

    /// Find the first object matching `filter`
    pub fn find_one(&self, filter: ObjectFilter) -> FindOneBuilder {
        FindOneBuilder::new(self.config.clone(), self.http_client.clone(), filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    /// Matches the JSON `query` parameter structurally, ignoring key order
    struct QueryJson(Value);

    impl Match for QueryJson {
        fn matches(&self, request: &Request) -> bool {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "query")
                .and_then(|(_, value)| serde_json::from_str::<Value>(&value).ok())
                .map_or(false, |query| query == self.0)
        }
    }

    fn client_for(server: &MockServer) -> BucketClient {
        BucketClient::new(
            BucketConfig::new("test-bucket", "fake-read-key", "fake-write-key")
                .with_api_url(&server.uri()),
            Client::new(),
        )
    }

    #[tokio::test]
    async fn test_find() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/buckets/test-bucket/objects"))
            .and(query_param("query", r#"{"type":"projects"}"#))
            .and(query_param("read_key", "fake-read-key"))
            .and(query_param("props", "id,title,slug,metadata"))
            .and(query_param("depth", "1"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "objects": [
                    { "id": "1", "slug": "alpha", "title": "Alpha", "metadata": {} },
                    { "id": "2", "slug": "beta", "title": "Beta", "metadata": {} }
                ],
                "total": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .find(ObjectFilter::of_type("projects"))
            .props(&["id", "title", "slug", "metadata"])
            .depth(1)
            .execute::<Value>()
            .await;

        assert!(result.is_ok(), "find failed: {:?}", result.err());
        let response = result.unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.objects.len(), 2);
        assert_eq!(response.objects[1]["slug"], "beta");
    }

    #[tokio::test]
    async fn test_find_with_modifiers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/buckets/test-bucket/objects"))
            .and(query_param("limit", "2"))
            .and(query_param("skip", "4"))
            .and(query_param("sort", "-created_at"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "objects": [{ "id": "5" }, { "id": "6" }],
                "total": 10,
                "limit": 2,
                "skip": 4
            })))
            .mount(&mock_server)
            .await;

        let request = client_for(&mock_server)
            .find(ObjectFilter::of_type("skills"))
            .limit(2)
            .skip(4)
            .sort("created_at", SortOrder::Descending);
        assert_eq!(request.filter().object_type(), Some("skills"));

        let response = request.execute::<Value>().await.unwrap();

        assert_eq!(response.total, 10);
        assert_eq!(response.limit, Some(2));
        assert_eq!(response.skip, Some(4));
    }

    #[tokio::test]
    async fn test_find_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/buckets/test-bucket/objects"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": 404,
                "message": "No objects found for your query"
            })))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .find(ObjectFilter::of_type("testimonials"))
            .execute::<Value>()
            .await;

        let err = result.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        match err {
            ObjectsError::ApiError { details, .. } => {
                assert_eq!(
                    details.message,
                    Some("No objects found for your query".to_string())
                );
            }
            e => panic!("Expected ApiError for 404, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_error_handling() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/buckets/test-bucket/objects"))
            .and(query_param("read_key", "invalid-key"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "status": 401,
                "message": "Unauthorized"
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v3/buckets/test-bucket/objects"))
            .and(query_param("read_key", "fake-read-key"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let unauthorized = BucketClient::new(
            BucketConfig::new("test-bucket", "invalid-key", "")
                .with_api_url(&mock_server.uri()),
            Client::new(),
        );
        let result_401 = unauthorized
            .find(ObjectFilter::of_type("projects"))
            .execute::<Value>()
            .await;
        match result_401.unwrap_err() {
            ObjectsError::ApiError { details, status } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(details.message, Some("Unauthorized".to_string()));
            }
            e => panic!("Expected ApiError for 401, got {:?}", e),
        }

        let result_500 = client_for(&mock_server)
            .find(ObjectFilter::of_type("projects"))
            .execute::<Value>()
            .await;
        let err = result_500.unwrap_err();
        assert!(!err.is_not_found());
        match err {
            ObjectsError::UnparsedApiError { message, status } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "Internal Server Error");
            }
            e => panic!("Expected UnparsedApiError for 500, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_find_one() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/buckets/test-bucket/objects"))
            .and(QueryJson(json!({ "type": "projects", "slug": "alpha" })))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "objects": [{ "id": "1", "slug": "alpha", "title": "Alpha" }],
                "total": 1
            })))
            .mount(&mock_server)
            .await;

        let request = client_for(&mock_server)
            .find_one(ObjectFilter::of_type("projects").slug("alpha"))
            .depth(1);
        assert_eq!(request.filter().get("slug"), Some(&json!("alpha")));

        let object = request.execute::<Value>().await.unwrap();

        assert_eq!(object["title"], "Alpha");
    }

    #[tokio::test]
    async fn test_find_one_empty_list_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/buckets/test-bucket/objects"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "objects": [], "total": 0 })),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .find_one(ObjectFilter::of_type("projects").slug("missing"))
            .execute::<Value>()
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_empty_bucket_slug_fails_on_first_request() {
        let client = BucketClient::new(BucketConfig::new("", "key", "key"), Client::new());

        let err = client
            .find(ObjectFilter::of_type("projects"))
            .execute::<Value>()
            .await
            .unwrap_err();

        assert!(matches!(err, ObjectsError::InvalidParameters(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_objects_url_per_environment() {
        let production = BucketConfig::new("folio", "r", "w");
        assert_eq!(
            production.objects_url().unwrap(),
            "https://api.cosmicjs.com/v3/buckets/folio/objects"
        );

        let staging = production.clone().with_api_environment("staging");
        assert_eq!(
            staging.objects_url().unwrap(),
            "https://api.cosmic-staging.com/v3/buckets/folio/objects"
        );

        let unknown = production.with_api_environment("qa");
        assert!(matches!(
            unknown.objects_url(),
            Err(ObjectsError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = BucketConfig::new("folio", "super-secret", "");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("<empty>"));
    }
}
