//! Wire types for the Objects API

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ObjectsError;

/// Which Cosmic API deployment a bucket talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEnvironment {
    /// The public production API
    Production,

    /// The staging API
    Staging,
}

impl ApiEnvironment {
    /// Convert the environment to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiEnvironment::Production => "production",
            ApiEnvironment::Staging => "staging",
        }
    }

    /// Base URL of the API for this environment
    pub fn api_url(&self) -> &'static str {
        match self {
            ApiEnvironment::Production => "https://api.cosmicjs.com",
            ApiEnvironment::Staging => "https://api.cosmic-staging.com",
        }
    }
}

impl FromStr for ApiEnvironment {
    type Err = ObjectsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(ApiEnvironment::Production),
            "staging" => Ok(ApiEnvironment::Staging),
            other => Err(ObjectsError::InvalidParameters(format!(
                "Unknown API environment: {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for `sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Response body of a `find` request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FindResponse<T> {
    pub objects: Vec<T>,

    #[serde(default)]
    pub total: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
}

/// Error body returned by the API on non-success statuses
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorDetails {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(status) = &self.status {
            parts.push(format!("Status: {}", status));
        }
        if let Some(message) = &self.message {
            parts.push(format!("Message: {}", message));
        }
        write!(f, "{}", parts.join(", "))
    }
}
