//! Static page models and wire shapes.

use serde::Deserialize;

/// A normalized CMS page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    /// Upstream publication status, e.g. "publish".
    pub status: String,
}

impl Page {
    /// Whether the page is publicly visible.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == "publish"
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePage {
    #[serde(default)]
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
}

impl WirePage {
    pub fn into_page(self) -> Page {
        Page {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            content: self.content,
            status: self.status.unwrap_or_default(),
        }
    }
}

/// `{ page: {...} }` root shape.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePageSingle {
    pub page: Option<WirePage>,
}
