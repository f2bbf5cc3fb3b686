//! Shared helpers for tests against a mocked bucket

#![allow(dead_code)]

use cosmic_portfolio::config::{ClientOptions, ContentConfig};
use cosmic_portfolio::content::Content;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Match, Mock, MockBuilder, MockServer, Request, ResponseTemplate};

pub const OBJECTS_PATH: &str = "/v3/buckets/test-bucket/objects";

/// Parse the JSON `query` parameter of a request
pub fn query_json(request: &Request) -> Option<Value> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "query")
        .and_then(|(_, value)| serde_json::from_str(&value).ok())
}

/// Matches the JSON `query` parameter structurally, ignoring key order
pub struct QueryJson(pub Value);

impl Match for QueryJson {
    fn matches(&self, request: &Request) -> bool {
        query_json(request).map_or(false, |query| query == self.0)
    }
}

/// A GET on the objects endpoint with exactly `query` and the fixed
/// projection and depth
pub fn objects_request(query: Value) -> MockBuilder {
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(QueryJson(query))
        .and(query_param("read_key", "fake-read-key"))
        .and(query_param("props", "id,title,slug,metadata"))
        .and(query_param("depth", "1"))
}

pub fn config_for(server: &MockServer) -> ContentConfig {
    ContentConfig::new("test-bucket", "fake-read-key", "fake-write-key")
        .with_options(ClientOptions::default().with_api_url(Some(server.uri().as_str())))
}

pub fn content_for(server: &MockServer) -> Content {
    Content::from_config(&config_for(server)).unwrap()
}

pub fn found(objects: Vec<Value>) -> ResponseTemplate {
    let total = objects.len();
    ResponseTemplate::new(200).set_body_json(json!({ "objects": objects, "total": total }))
}

/// How the bucket answers a query with no matches
pub fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "status": 404,
        "message": "No objects found for your query"
    }))
}

pub fn server_error() -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_json(json!({
        "status": 500,
        "message": "Internal server error"
    }))
}

pub fn project(slug: &str, name: &str, featured: bool) -> Value {
    json!({
        "id": format!("proj-{}", slug),
        "slug": slug,
        "title": name,
        "metadata": {
            "project_name": name,
            "description": format!("{} description", name),
            "technologies": "Rust, Tokio",
            "project_image": {
                "url": format!("https://cdn.cosmicjs.com/{}.png", slug),
                "imgix_url": format!("https://imgix.cosmicjs.com/{}.png", slug)
            },
            "live_url": format!("https://{}.example.com", slug),
            "github_url": "",
            "status": { "key": "completed", "value": "Completed" },
            "featured": featured
        }
    })
}

pub fn skill(slug: &str, name: &str, category: &str) -> Value {
    json!({
        "id": format!("skill-{}", slug),
        "slug": slug,
        "title": name,
        "metadata": {
            "skill_name": name,
            "category": { "key": category.to_lowercase(), "value": category },
            "proficiency": { "key": "advanced", "value": "Advanced" },
            "years_experience": 4,
            "icon": null
        }
    })
}

pub fn job(slug: &str, title: &str, start: &str, current: bool) -> Value {
    json!({
        "id": format!("job-{}", slug),
        "slug": slug,
        "title": title,
        "metadata": {
            "job_title": title,
            "company_name": "Acme Corp",
            "company_website": "https://acme.example.com",
            "start_date": start,
            "end_date": if current { Value::Null } else { json!("2023-12-31") },
            "current": current,
            "description": "Platform work",
            "achievements": "Led the migration\nHalved build times",
            "technologies": "Rust, Postgres"
        }
    })
}

pub fn testimonial(slug: &str, client: &str, related: Option<Value>) -> Value {
    json!({
        "id": format!("testimonial-{}", slug),
        "slug": slug,
        "title": client,
        "metadata": {
            "client_name": client,
            "client_title": "CTO",
            "company_name": "Globex",
            "testimonial": "Delivered on time and on budget.",
            "rating": { "key": "5", "value": "5 Stars" },
            "client_photo": null,
            "related_project": related
        }
    })
}

/// Mount a 200 answer for every collection of the home page
pub async fn mount_full_bucket(server: &MockServer) {
    mount_bucket_except(server, None).await;
}

/// Mount a 200 answer for every collection except `skip`, which the
/// caller mocks itself
pub async fn mount_bucket_except(server: &MockServer, skip: Option<&str>) {
    let projects = vec![
        project("atlas", "Atlas", true),
        project("beacon", "Beacon", false),
        project("comet", "Comet", true),
    ];

    let answers = vec![
        (json!({ "type": "projects" }), found(projects.clone())),
        (
            json!({ "type": "projects", "metadata.featured": true }),
            found(vec![projects[0].clone(), projects[2].clone()]),
        ),
        (
            json!({ "type": "skills" }),
            found(vec![
                skill("rust", "Rust", "Backend"),
                skill("react", "React", "Frontend"),
            ]),
        ),
        (
            json!({ "type": "work-experience" }),
            found(vec![
                job("acme-senior", "Senior Engineer", "2021-02-01", false),
                job("acme-lead", "Staff Engineer", "2024-01-08", true),
            ]),
        ),
        (
            json!({ "type": "testimonials" }),
            found(vec![testimonial(
                "globex",
                "Hank Scorpio",
                Some(project("atlas", "Atlas", true)),
            )]),
        ),
    ];

    for (query, response) in answers {
        if skip.map_or(false, |skip| query["type"] == skip) {
            continue;
        }
        objects_request(query).respond_with(response).mount(server).await;
    }
}
