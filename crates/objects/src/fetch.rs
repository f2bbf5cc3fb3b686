//! HTTP request helper shared by the query builders

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use url::Url;

use crate::types::ApiErrorDetails;
use crate::ObjectsError;

/// Query parameters that must never reach the logs
const SECRET_PARAMS: &[&str] = &["read_key"];

/// Helper for building and executing requests against the Objects API
pub(crate) struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_params: Vec<(String, String)>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a GET request
    pub fn get(client: &'a Client, url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        Self {
            client,
            url: url.to_string(),
            method: Method::GET,
            headers,
            query_params: Vec::new(),
        }
    }

    /// Add a query parameter to the request
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.query_params.push((key.to_string(), value.to_string()));
        self
    }

    fn build_url(&self) -> Result<Url, ObjectsError> {
        let mut url = Url::parse(&self.url)?;
        if !self.query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query_params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// The request target with secret parameters left out
    fn describe(&self) -> String {
        let visible: Vec<String> = self
            .query_params
            .iter()
            .filter(|(key, _)| !SECRET_PARAMS.contains(&key.as_str()))
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        format!("{} {}?{}", self.method, self.url, visible.join("&"))
    }

    /// Execute the request and parse the response as JSON
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<T, ObjectsError> {
        let url = self.build_url()?;
        debug!("{}", self.describe());

        let response = self
            .client
            .request(self.method.clone(), url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(ObjectsError::NetworkError)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            warn!("{} failed with status {}", self.describe(), status);

            return match serde_json::from_str::<ApiErrorDetails>(&error_text) {
                Ok(details) => Err(ObjectsError::ApiError { details, status }),
                Err(_) => Err(ObjectsError::UnparsedApiError {
                    message: error_text,
                    status,
                }),
            };
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ObjectsError::DeserializationError(e.to_string()))
    }
}
