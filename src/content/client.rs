//! WordPress REST API client.
//!
//! Two read operations, no caching, no retry, no pagination. Transport
//! failures and non-2xx statuses become [`ContentError::Network`]; bodies that
//! are not the expected JSON become [`ContentError::Decode`].

use std::sync::Arc;

use crate::error::{ContentError, NetworkError};
use crate::models::{Page, Post};
use crate::traits::{Headers, HttpClient, Response};

/// Read-only client for one WordPress site.
#[derive(Clone)]
pub struct ContentClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ContentClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/wp-json/wp/v2/posts`
    pub fn posts_url(&self) -> String {
        format!("{}/wp-json/wp/v2/posts", self.base_url)
    }

    /// `{base}/wp-json/wp/v2/pages?slug={slug}`, slug percent-encoded.
    pub fn page_url(&self, slug: &str) -> String {
        format!(
            "{}/wp-json/wp/v2/pages?slug={}",
            self.base_url,
            urlencoding::encode(slug)
        )
    }

    /// Public address of a page, as opened in the browser.
    pub fn page_web_url(&self, slug: &str) -> String {
        let path = if slug == "home" { "" } else { slug };
        crate::models::tiles::app_page_url(&self.base_url, path)
    }

    /// Slug of a page URL on this site: the last path segment, or `home`
    /// for the site root. `None` for other hosts.
    pub fn slug_for_url(&self, url: &str) -> Option<String> {
        let rest = url.strip_prefix(&self.base_url)?;
        if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('?')) {
            return None;
        }
        let path = rest.split(['?', '#']).next().unwrap_or_default();
        let slug = path
            .trim_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        if slug.is_empty() {
            Some("home".to_string())
        } else {
            Some(slug.to_string())
        }
    }

    async fn get(&self, url: &str) -> Result<Response, NetworkError> {
        tracing::debug!(url, "Fetching");
        let response = self
            .http
            .get(url, &json_headers())
            .await
            .map_err(|err| NetworkError::from_http_error(err, url))?;

        if !response.is_success() {
            return Err(NetworkError::HttpStatus {
                url: url.to_string(),
                status: response.status,
            });
        }
        Ok(response)
    }

    /// Latest posts.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ContentError> {
        let url = self.posts_url();
        let response = self.get(&url).await.map_err(|err| {
            tracing::warn!(error = %err, code = err.error_code(), "Posts request failed");
            ContentError::Network(err)
        })?;

        let posts: Vec<Post> = response.json().map_err(|err| ContentError::Decode {
            resource: "posts".to_string(),
            message: err.to_string(),
        })?;
        tracing::info!(count = posts.len(), "Posts loaded");
        Ok(posts)
    }

    /// The page with `slug`. An empty result is [`ContentError::NotFound`].
    pub async fn fetch_page_by_slug(&self, slug: &str) -> Result<Page, ContentError> {
        let url = self.page_url(slug);
        let response = self.get(&url).await.map_err(|err| {
            tracing::warn!(slug, error = %err, code = err.error_code(), "Page request failed");
            ContentError::Network(err)
        })?;

        let pages: Vec<Page> = response.json().map_err(|err| ContentError::Decode {
            resource: format!("page '{}'", slug),
            message: err.to_string(),
        })?;

        pages.into_iter().next().ok_or_else(|| {
            tracing::info!(slug, "No page with slug");
            ContentError::NotFound {
                slug: slug.to_string(),
            }
        })
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}
