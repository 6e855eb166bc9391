//! GraphQL-over-HTTP transport.
//!
//! Issues GraphQL requests either as POST with a JSON body or GET with
//! a URL-encoded query (the target API binding varies across
//! environments), normalizes non-200 and partial-error responses, and
//! keeps a time-windowed in-process response cache so repeated renders
//! within the revalidation window reuse upstream answers.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::error::Error;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default revalidation window in seconds.
pub const DEFAULT_REVALIDATE_SECS: u64 = 60;

/// Revalidation window for scraped legacy HTML pages (30 minutes).
pub const LEGACY_PAGE_REVALIDATE_SECS: u64 = 1800;

/// Wire binding for GraphQL requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// POST with a JSON `{query, variables}` body.
    PostJson,
    /// GET with URL-encoded `query`/`variables` parameters.
    GetQuery,
}

/// Per-call cache/revalidation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Serve a cached response if it is younger than the given number
    /// of seconds.
    Revalidate(u64),
    /// Always go to the network; never serve or store a cached copy.
    NoCache,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::Revalidate(DEFAULT_REVALIDATE_SECS)
    }
}

impl CachePolicy {
    /// Maximum acceptable age of a cached response, if caching applies.
    #[must_use]
    pub fn max_age(self) -> Option<Duration> {
        match self {
            Self::Revalidate(secs) => Some(Duration::from_secs(secs)),
            Self::NoCache => None,
        }
    }
}

/// Configuration for an HTTP transport instance.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// GraphQL wire binding.
    pub binding: Binding,
    /// Bounded timeout applied to every request.
    pub timeout: Duration,
    /// Accept invalid TLS certificates. Development-only; scoped to
    /// this transport instance, never process-wide.
    pub accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            binding: Binding::PostJson,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: false,
        }
    }
}

/// Seam between resolvers and the network. `HttpTransport` is the real
/// implementation; tests substitute `testing::MockTransport`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a GraphQL request and return the `data` payload.
    async fn request(
        &self,
        query: &str,
        variables: Option<Value>,
        cache: CachePolicy,
    ) -> Result<Value, Error>;

    /// Fetch a raw HTML page (legacy scraping sources).
    async fn fetch_html(&self, url: &str, cache: CachePolicy) -> Result<String, Error>;
}

struct CachedEntry<T> {
    inserted: Instant,
    value: T,
}

/// HTTP transport over `reqwest`.
///
/// Failures are logged and returned; there is no automatic retry, so
/// callers keep full control over which fetches are allowed to degrade.
pub struct HttpTransport {
    endpoint: String,
    binding: Binding,
    client: Client,
    responses: RwLock<HashMap<String, CachedEntry<Value>>>,
    pages: RwLock<HashMap<String, CachedEntry<String>>>,
}

impl HttpTransport {
    /// Create a transport for the given GraphQL endpoint.
    pub fn new(endpoint: &str, config: TransportConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            binding: config.binding,
            client,
            responses: RwLock::new(HashMap::new()),
            pages: RwLock::new(HashMap::new()),
        })
    }

    /// The configured GraphQL endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute(&self, query: &str, variables: &Value) -> Result<Value, Error> {
        let request = match self.binding {
            Binding::PostJson => self
                .client
                .post(&self.endpoint)
                .header("Content-Type", "application/json")
                .json(&json!({ "query": query, "variables": variables })),
            Binding::GetQuery => self
                .client
                .get(encoded_get_url(&self.endpoint, query, variables)),
        };

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            error!(status, %body, "graphql endpoint returned non-200");
            return Err(Error::Transport { status, body });
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("failed to parse response: {e}")))?;

        extract_data(envelope)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        query: &str,
        variables: Option<Value>,
        cache: CachePolicy,
    ) -> Result<Value, Error> {
        let variables = variables.unwrap_or_else(|| json!({}));
        let key = format!("{query}|{variables}");

        if let Some(max_age) = cache.max_age() {
            let cached = self.responses.read().await;
            if let Some(entry) = cached.get(&key) {
                if entry.inserted.elapsed() <= max_age {
                    debug!("serving graphql response from cache");
                    return Ok(entry.value.clone());
                }
            }
        }

        let data = self.execute(query, &variables).await?;

        if cache.max_age().is_some() {
            self.responses.write().await.insert(
                key,
                CachedEntry {
                    inserted: Instant::now(),
                    value: data.clone(),
                },
            );
        }

        Ok(data)
    }

    async fn fetch_html(&self, url: &str, cache: CachePolicy) -> Result<String, Error> {
        if let Some(max_age) = cache.max_age() {
            let cached = self.pages.read().await;
            if let Some(entry) = cached.get(url) {
                if entry.inserted.elapsed() <= max_age {
                    return Ok(entry.value.clone());
                }
            }
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transport { status, body });
        }

        let html = response
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if cache.max_age().is_some() {
            self.pages.write().await.insert(
                url.to_string(),
                CachedEntry {
                    inserted: Instant::now(),
                    value: html.clone(),
                },
            );
        }

        Ok(html)
    }
}

/// Build the GET-binding URL with percent-encoded parameters.
fn encoded_get_url(endpoint: &str, query: &str, variables: &Value) -> String {
    let encoded_query = utf8_percent_encode(query, NON_ALPHANUMERIC);
    let vars = variables.to_string();
    let encoded_vars = utf8_percent_encode(&vars, NON_ALPHANUMERIC);
    format!("{endpoint}?query={encoded_query}&variables={encoded_vars}")
}

/// Apply the partial-success policy to a GraphQL response envelope.
///
/// `errors` alongside non-null `data` is usable: the data is returned
/// and the errors are logged. `errors` with null or missing `data` is a
/// hard failure carrying the first error message.
fn extract_data(envelope: Value) -> Result<Value, Error> {
    let has_errors = envelope
        .get("errors")
        .and_then(Value::as_array)
        .is_some_and(|errs| !errs.is_empty());

    let data = envelope.get("data").cloned().unwrap_or(Value::Null);

    if has_errors {
        if data.is_null() {
            let message = envelope["errors"][0]["message"]
                .as_str()
                .unwrap_or("Unknown GraphQL error")
                .to_string();
            return Err(Error::GraphQl(message));
        }
        warn!(
            errors = %envelope["errors"],
            "graphql response carried errors alongside data; returning partial data"
        );
    }

    Ok(data)
}
