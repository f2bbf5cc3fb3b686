//! Field types and lenient deserializers shared by the metadata shapes

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An uploaded media file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,

    #[serde(default)]
    pub imgix_url: String,
}

impl ImageRef {
    /// Cropped, format-negotiated rendition of the image
    pub fn sized(&self, width: u32, height: u32) -> String {
        let base = if self.imgix_url.is_empty() {
            &self.url
        } else {
            &self.imgix_url
        };
        format!(
            "{}?w={}&h={}&fit=crop&auto=format,compress",
            base, width, height
        )
    }
}

/// Treat `null`, a missing field and `""` alike as absent.
///
/// The bucket sends unset optional metafields either way.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => T::deserialize(value).map(Some).map_err(de::Error::custom),
    }
}

/// A related object expanded inline by the API.
///
/// Anything but an object (an unexpanded id, `""`, `null`) is absent.
pub(crate) fn expanded_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => T::deserialize(value).map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// Split a comma-separated field into trimmed, non-empty entries
pub(crate) fn split_list(field: &str) -> Vec<&str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}
