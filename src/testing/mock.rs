//! In-memory [`Transport`] double.
//!
//! Routes GraphQL requests by operation name (any substring of the
//! query document works) and HTML fetches by URL substring, and records
//! every call so tests can assert on fetch behavior, not just results.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;
use crate::transport::{CachePolicy, Transport};

/// A canned reply for one GraphQL route.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Successful response: the `data` payload.
    Data(Value),
    /// Non-200 HTTP response.
    Transport { status: u16, body: String },
    /// GraphQL-level failure with null data.
    GraphQl(String),
}

impl MockReply {
    fn into_result(self) -> Result<Value, Error> {
        match self {
            Self::Data(value) => Ok(value),
            Self::Transport { status, body } => Err(Error::Transport { status, body }),
            Self::GraphQl(message) => Err(Error::GraphQl(message)),
        }
    }
}

/// One recorded transport call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub query: String,
    pub variables: Value,
    pub cache: CachePolicy,
}

/// Mock transport. Unrouted GraphQL requests fail with a 404-shaped
/// transport error so a missing route is loud in test output.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<(String, MockReply)>>,
    html_routes: Mutex<Vec<(String, Result<String, ()>)>>,
    calls: Mutex<Vec<RecordedCall>>,
    html_calls: Mutex<Vec<String>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route queries containing `needle` (typically the operation name)
    /// to a successful `data` payload.
    pub fn on(&self, needle: &str, data: Value) {
        self.reply(needle, MockReply::Data(data));
    }

    /// Route queries containing `needle` to an arbitrary reply.
    pub fn reply(&self, needle: &str, reply: MockReply) {
        self.routes
            .lock()
            .unwrap()
            .push((needle.to_string(), reply));
    }

    /// Route HTML fetches whose URL contains `needle` to a page body.
    pub fn on_html(&self, needle: &str, html: &str) {
        self.html_routes
            .lock()
            .unwrap()
            .push((needle.to_string(), Ok(html.to_string())));
    }

    /// Route HTML fetches whose URL contains `needle` to a failure.
    pub fn on_html_error(&self, needle: &str) {
        self.html_routes
            .lock()
            .unwrap()
            .push((needle.to_string(), Err(())));
    }

    /// All GraphQL calls made so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// How many GraphQL calls contained `needle`.
    #[must_use]
    pub fn call_count(&self, needle: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.query.contains(needle))
            .count()
    }

    /// Whether any GraphQL call contained `needle`.
    #[must_use]
    pub fn was_called(&self, needle: &str) -> bool {
        self.call_count(needle) > 0
    }

    /// How many HTML fetches hit a URL containing `needle`.
    #[must_use]
    pub fn html_fetch_count(&self, needle: &str) -> usize {
        self.html_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|url| url.contains(needle))
            .count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        query: &str,
        variables: Option<Value>,
        cache: CachePolicy,
    ) -> Result<Value, Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            query: query.to_string(),
            variables: variables.unwrap_or(Value::Null),
            cache,
        });

        let reply = self
            .routes
            .lock()
            .unwrap()
            .iter()
            .find(|(needle, _)| query.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(reply) => reply.into_result(),
            None => Err(Error::Transport {
                status: 404,
                body: format!("no mock route matches query: {query}"),
            }),
        }
    }

    async fn fetch_html(&self, url: &str, _cache: CachePolicy) -> Result<String, Error> {
        self.html_calls.lock().unwrap().push(url.to_string());

        let reply = self
            .html_routes
            .lock()
            .unwrap()
            .iter()
            .find(|(needle, _)| url.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Ok(html)) => Ok(html),
            Some(Err(())) => Err(Error::Transport {
                status: 503,
                body: "mock html route configured to fail".to_string(),
            }),
            None => Err(Error::Transport {
                status: 404,
                body: format!("no mock html route matches url: {url}"),
            }),
        }
    }
}
