//! HTTP client for the content API.
//!
//! One-shot request/response against the backend's collection endpoints:
//! no retries, no caching. A failed fetch surfaces as an [`Error`] that the
//! page layer turns into a not-found or error page; nothing here is fatal
//! to the process. Single-document lookups treat an empty `docs` envelope
//! the same as HTTP 404.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::types::{Blog, Category, SearchResult, Tutorial};

/// Queries shorter than this many characters skip the network entirely and
/// return no results.
pub const MIN_SEARCH_QUERY_CHARS: usize = 2;

/// Envelope the collection endpoints wrap their documents in.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct DocsPayload<T> {
    #[serde(default)]
    docs: Vec<T>,
}

/// Envelope for `/api/search` responses.
#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Typed client over the content API.
#[derive(Debug)]
pub struct ContentClient {
    http: reqwest::Client,
    base: Url,
}

impl ContentClient {
    /// Build a client for the configured backend.
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let base = Url::parse(&config.backend_url)
            .map_err(|e| Error::Config(format!("invalid backend_url '{}': {e}", config.backend_url)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("didact/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(Error::Network)?;

        Ok(Self { http, base })
    }

    /// All tutorial categories.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let payload: DocsPayload<Category> = self.get_json("api/categories", &[]).await?;
        Ok(payload.docs)
    }

    /// A single category by slug.
    pub async fn category(&self, slug: &str) -> Result<Category> {
        let payload: DocsPayload<Category> = self
            .get_json("api/categories", &[("where[slug][equals]", slug)])
            .await?;
        payload
            .docs
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("category '{slug}'")))
    }

    /// Published tutorials belonging to a category, in course order.
    pub async fn tutorials_in_category(&self, category_id: &str) -> Result<Vec<Tutorial>> {
        let payload: DocsPayload<Tutorial> = self
            .get_json(
                "api/tutorials",
                &[
                    ("where[category][equals]", category_id),
                    ("where[isPublished][equals]", "true"),
                ],
            )
            .await?;
        let mut tutorials = payload.docs;
        tutorials.sort_by_key(|t| t.order);
        Ok(tutorials)
    }

    /// A single published tutorial by slug, with its category populated.
    pub async fn tutorial(&self, slug: &str) -> Result<Tutorial> {
        let payload: DocsPayload<Tutorial> = self
            .get_json(
                "api/tutorials",
                &[
                    ("where[slug][equals]", slug),
                    ("where[isPublished][equals]", "true"),
                    ("depth", "1"),
                ],
            )
            .await?;
        payload
            .docs
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("tutorial '{slug}'")))
    }

    /// Published blog posts, newest first.
    pub async fn blogs(&self) -> Result<Vec<Blog>> {
        let payload: DocsPayload<Blog> = self
            .get_json(
                "api/blogs",
                &[("where[isPublished][equals]", "true"), ("sort", "-updatedAt")],
            )
            .await?;
        Ok(payload.docs)
    }

    /// A single published blog post by slug.
    pub async fn blog(&self, slug: &str) -> Result<Blog> {
        let payload: DocsPayload<Blog> = self
            .get_json(
                "api/blogs",
                &[
                    ("where[slug][equals]", slug),
                    ("where[isPublished][equals]", "true"),
                ],
            )
            .await?;
        payload
            .docs
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("blog post '{slug}'")))
    }

    /// Search tutorials and blog posts through the API's search endpoint.
    ///
    /// This is a passthrough — the backend owns the index. Queries below
    /// [`MIN_SEARCH_QUERY_CHARS`] short-circuit to an empty result list.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.trim().chars().count() < MIN_SEARCH_QUERY_CHARS {
            debug!(query, "search query below minimum length, skipping request");
            return Ok(Vec::new());
        }

        let payload: SearchPayload = self.get_json("api/search", &[("q", query)]).await?;
        info!(query, hits = payload.results.len(), "search completed");
        Ok(payload.results)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut url = self
            .base
            .join(path)
            .map_err(|e| Error::Config(format!("invalid request path '{path}': {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        debug!(%url, "content api request");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("no resource at '{url}'")));
        }
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> SiteConfig {
        SiteConfig {
            backend_url: server.uri(),
            ..SiteConfig::default()
        }
    }

    fn category_json(slug: &str) -> serde_json::Value {
        serde_json::json!({
            "id": format!("cat-{slug}"),
            "name": slug.to_uppercase(),
            "slug": slug,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
        })
    }

    #[tokio::test]
    async fn categories_unwraps_docs_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "docs": [category_json("rust"), category_json("go")],
            })))
            .mount(&server)
            .await;

        let client = ContentClient::new(&config_for(&server)).unwrap();
        let categories = client.categories().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].slug, "rust");
    }

    #[tokio::test]
    async fn missing_docs_field_means_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = ContentClient::new(&config_for(&server)).unwrap();
        assert!(client.categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn single_doc_lookup_maps_empty_envelope_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .and(query_param("where[slug][equals]", "missing"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "docs": [] })),
            )
            .mount(&server)
            .await;

        let client = ContentClient::new(&config_for(&server)).unwrap();
        let err = client.category("missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn tutorial_lookup_filters_published_at_depth_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tutorials"))
            .and(query_param("where[slug][equals]", "intro"))
            .and(query_param("where[isPublished][equals]", "true"))
            .and(query_param("depth", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "docs": [{
                    "id": "tut-1",
                    "title": "Intro",
                    "slug": "intro",
                    "summary": "start here",
                    "content": [
                        {"type": "heading", "level": 2, "content": "Setup"},
                        {"type": "aside", "content": "unknown kind"},
                    ],
                    "order": 1,
                    "readingTime": 4,
                    "isPublished": true,
                    "category": category_json("rust"),
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-02T00:00:00Z",
                }],
            })))
            .mount(&server)
            .await;

        let client = ContentClient::new(&config_for(&server)).unwrap();
        let tutorial = client.tutorial("intro").await.unwrap();
        assert_eq!(tutorial.reading_time, Some(4));
        assert_eq!(tutorial.category.slug, "rust");
        // Unknown block kinds survive the trip as skippable placeholders.
        assert_eq!(tutorial.content.len(), 2);
    }

    #[tokio::test]
    async fn tutorials_in_category_sort_by_course_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tutorials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "docs": [
                    {
                        "id": "b", "title": "Second", "slug": "second", "order": 2,
                        "category": category_json("rust"),
                        "createdAt": "2024-01-01T00:00:00Z",
                        "updatedAt": "2024-01-01T00:00:00Z",
                    },
                    {
                        "id": "a", "title": "First", "slug": "first", "order": 1,
                        "category": category_json("rust"),
                        "createdAt": "2024-01-01T00:00:00Z",
                        "updatedAt": "2024-01-01T00:00:00Z",
                    },
                ],
            })))
            .mount(&server)
            .await;

        let client = ContentClient::new(&config_for(&server)).unwrap();
        let tutorials = client.tutorials_in_category("cat-rust").await.unwrap();
        assert_eq!(tutorials[0].slug, "first");
        assert_eq!(tutorials[1].slug, "second");
    }

    #[tokio::test]
    async fn short_search_query_skips_the_network() {
        let server = MockServer::start().await;
        // No mock mounted: a request would come back 404 and fail the test.
        let client = ContentClient::new(&config_for(&server)).unwrap();
        assert!(client.search("a").await.unwrap().is_empty());
        assert!(client.search("  x  ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_unwraps_results_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("q", "borrow checker"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{
                    "type": "tutorial",
                    "id": "tut-1",
                    "title": "Ownership",
                    "slug": "ownership",
                    "summary": "moves and borrows",
                    "category": category_json("rust"),
                }],
            })))
            .mount(&server)
            .await;

        let client = ContentClient::new(&config_for(&server)).unwrap();
        let results = client.search("borrow checker").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "ownership");
    }

    #[tokio::test]
    async fn http_404_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/blogs"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ContentClient::new(&config_for(&server)).unwrap();
        let err = client.blogs().await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn http_500_maps_to_recoverable_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/blogs"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ContentClient::new(&config_for(&server)).unwrap();
        let err = client.blogs().await.unwrap_err();
        assert!(matches!(err, Error::Http { status: 500, .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn invalid_backend_url_is_a_config_error() {
        let config = SiteConfig {
            backend_url: "not a url".to_string(),
            ..SiteConfig::default()
        };
        let err = ContentClient::new(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
