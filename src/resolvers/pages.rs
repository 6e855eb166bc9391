//! Static CMS pages.
//!
//! Pages change rarely, so lookups ride the long revalidation window
//! used for legacy content.

use std::sync::Arc;

use serde_json::json;

use crate::error::Error;
use crate::transport::{CachePolicy, Transport, LEGACY_PAGE_REVALIDATE_SECS};
use crate::types::page::{Page, WirePage, WirePageSingle};

const PAGE_BY_URI_QUERY: &str = r"
query PageByUri($uri: ID!) {
  page(id: $uri, idType: URI) {
    id
    title
    slug
    content
    status
  }
}";

/// Static page lookups.
pub struct PagesClient {
    transport: Arc<dyn Transport>,
}

impl PagesClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Look up a page by URI. The path is canonicalized to the
    /// `/{segments}/` form the CMS uses, so `tentang`, `/tentang` and
    /// `/tentang/` all hit the same page (and the same cache entry).
    /// Unpublished pages resolve to `None`.
    pub async fn by_uri(&self, uri: &str) -> Result<Option<Page>, Error> {
        let uri = normalize_uri(uri);
        let data = self
            .transport
            .request(
                PAGE_BY_URI_QUERY,
                Some(json!({ "uri": uri })),
                CachePolicy::Revalidate(LEGACY_PAGE_REVALIDATE_SECS),
            )
            .await?;
        let document: WirePageSingle = serde_json::from_value(data)?;
        Ok(document
            .page
            .map(WirePage::into_page)
            .filter(Page::is_published))
    }
}

/// Canonical page URI form: leading and trailing slash, no duplicates.
fn normalize_uri(uri: &str) -> String {
    let trimmed = uri.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
