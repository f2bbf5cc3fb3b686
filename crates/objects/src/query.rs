//! Query builders for the Objects API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::fetch::FetchBuilder;
use crate::filter::ObjectFilter;
use crate::types::{ApiErrorDetails, FindResponse, SortOrder};
use crate::{BucketConfig, ObjectsError};

/// Modifiers shared by `find` and `find_one`
#[derive(Debug, Clone, Default)]
struct QueryModifiers {
    props: Option<String>,
    depth: Option<u8>,
    limit: Option<u32>,
    skip: Option<u32>,
    sort: Option<String>,
}

impl QueryModifiers {
    fn apply<'a>(&self, mut fetch: FetchBuilder<'a>) -> FetchBuilder<'a> {
        if let Some(props) = &self.props {
            fetch = fetch.param("props", props);
        }
        if let Some(depth) = self.depth {
            fetch = fetch.param("depth", &depth.to_string());
        }
        if let Some(limit) = self.limit {
            fetch = fetch.param("limit", &limit.to_string());
        }
        if let Some(skip) = self.skip {
            fetch = fetch.param("skip", &skip.to_string());
        }
        if let Some(sort) = &self.sort {
            fetch = fetch.param("sort", sort);
        }
        fetch
    }
}

async fn run_query<T: DeserializeOwned>(
    config: &BucketConfig,
    client: &Client,
    filter: &ObjectFilter,
    modifiers: &QueryModifiers,
) -> Result<FindResponse<T>, ObjectsError> {
    let url = config.objects_url()?;
    let query = filter.to_query_string()?;

    let fetch = FetchBuilder::get(client, &url)
        .param("query", &query)
        .param("read_key", &config.read_key);

    modifiers
        .apply(fetch)
        .execute::<FindResponse<T>>()
        .await
}

/// Builder for `find` requests returning many objects
pub struct FindBuilder {
    config: Arc<BucketConfig>,
    client: Client,
    filter: ObjectFilter,
    modifiers: QueryModifiers,
}

impl FindBuilder {
    pub(crate) fn new(config: Arc<BucketConfig>, client: Client, filter: ObjectFilter) -> Self {
        Self {
            config,
            client,
            filter,
            modifiers: QueryModifiers::default(),
        }
    }

    /// Restrict the returned fields to `props`
    pub fn props(mut self, props: &[&str]) -> Self {
        self.modifiers.props = Some(props.join(","));
        self
    }

    /// How many levels of related objects the API expands inline
    pub fn depth(mut self, depth: u8) -> Self {
        self.modifiers.depth = Some(depth);
        self
    }

    /// Limit the number of objects returned
    pub fn limit(mut self, count: u32) -> Self {
        self.modifiers.limit = Some(count);
        self
    }

    /// Skip a number of objects
    pub fn skip(mut self, count: u32) -> Self {
        self.modifiers.skip = Some(count);
        self
    }

    /// Order the results by a field
    pub fn sort(mut self, field: &str, order: SortOrder) -> Self {
        let sort = match order {
            SortOrder::Ascending => field.to_string(),
            SortOrder::Descending => format!("-{}", field),
        };
        self.modifiers.sort = Some(sort);
        self
    }

    /// The filter this request will send
    pub fn filter(&self) -> &ObjectFilter {
        &self.filter
    }

    /// Execute the query.
    ///
    /// A query matching no objects fails with a 404 `ApiError`; see
    /// [`ObjectsError::is_not_found`].
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<FindResponse<T>, ObjectsError> {
        run_query(&self.config, &self.client, &self.filter, &self.modifiers).await
    }
}

/// Builder for `find_one` requests returning a single object
pub struct FindOneBuilder {
    config: Arc<BucketConfig>,
    client: Client,
    filter: ObjectFilter,
    modifiers: QueryModifiers,
}

impl FindOneBuilder {
    pub(crate) fn new(config: Arc<BucketConfig>, client: Client, filter: ObjectFilter) -> Self {
        Self {
            config,
            client,
            filter,
            modifiers: QueryModifiers {
                limit: Some(1),
                ..QueryModifiers::default()
            },
        }
    }

    /// Restrict the returned fields to `props`
    pub fn props(mut self, props: &[&str]) -> Self {
        self.modifiers.props = Some(props.join(","));
        self
    }

    /// How many levels of related objects the API expands inline
    pub fn depth(mut self, depth: u8) -> Self {
        self.modifiers.depth = Some(depth);
        self
    }

    /// The filter this request will send
    pub fn filter(&self) -> &ObjectFilter {
        &self.filter
    }

    /// Execute the query and return the first matching object.
    ///
    /// An empty result is reported the same way the API reports it for
    /// `find`: a 404 `ApiError`.
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<T, ObjectsError> {
        let response =
            run_query::<T>(&self.config, &self.client, &self.filter, &self.modifiers).await?;

        response
            .objects
            .into_iter()
            .next()
            .ok_or_else(|| ObjectsError::ApiError {
                details: ApiErrorDetails {
                    status: Some(StatusCode::NOT_FOUND.as_u16()),
                    message: Some("No objects found for your query".to_string()),
                },
                status: StatusCode::NOT_FOUND,
            })
    }
}
