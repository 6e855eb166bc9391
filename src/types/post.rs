//! Post/content models and their wire shapes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::avatar::rewrite_asset_host;
use crate::types::wire::{parse_cms_date_or_epoch, Edges, MediaRef, Nodes};

/// A category attached to a content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Empty when the query fetched names only.
    pub slug: String,
}

/// Author attribution on a content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub database_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
}

/// A normalized post, page excerpt, or agenda-free content item.
///
/// `date` drives every ordering decision in the crate; `slug` is unique
/// within its content type upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub database_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub date: DateTime<Utc>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image_url: Option<String>,
    pub categories: Vec<Category>,
    pub author: Option<AuthorRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAvatar {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAuthorNode {
    pub database_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<WireAvatar>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireAuthorRef {
    pub node: Option<WireAuthorNode>,
}

/// A post as the GraphQL schema returns it. Individual queries fetch
/// different subsets, so everything beyond `id` is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePost {
    pub id: String,
    pub database_id: Option<i64>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<MediaRef>,
    pub categories: Option<Edges<WireCategory>>,
    pub author: Option<WireAuthorRef>,
}

impl WirePost {
    /// Normalize into the strict model. Image and avatar URLs get the
    /// asset-host typo rewrite here, at the boundary.
    pub fn into_item(self) -> ContentItem {
        let date = parse_cms_date_or_epoch(self.date.as_deref());

        let categories = self
            .categories
            .unwrap_or_default()
            .into_nodes()
            .into_iter()
            .filter_map(|c| {
                c.name.map(|name| Category {
                    name,
                    slug: c.slug.unwrap_or_default(),
                })
            })
            .collect();

        let author = self.author.and_then(|a| a.node).map(|node| AuthorRef {
            database_id: node.database_id,
            name: node.name,
            description: node.description,
            avatar_url: node
                .avatar
                .and_then(|a| a.url)
                .map(|url| rewrite_asset_host(&url)),
        });

        ContentItem {
            id: self.id,
            database_id: self.database_id,
            title: self.title.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            date,
            excerpt: self.excerpt,
            content: self.content,
            featured_image_url: self
                .featured_image
                .and_then(|m| m.source_url().map(|u| rewrite_asset_host(u))),
            categories,
            author,
        }
    }
}

/// Normalize a batch of wire posts.
pub fn into_items(posts: Vec<WirePost>) -> Vec<ContentItem> {
    posts.into_iter().map(WirePost::into_item).collect()
}

/// Re-sort date-descending. Display ordering is strict recency
/// regardless of upstream sticky/editorial ordering; the sort is stable
/// so equal timestamps keep their upstream order.
pub fn sort_by_date_desc(items: &mut [ContentItem]) {
    items.sort_by(|a, b| b.date.cmp(&a.date));
}

/// A category archive: the category itself plus its posts, from the
/// merged single-request query.
#[derive(Debug, Clone)]
pub struct CategoryArchive {
    pub category: Category,
    pub description: Option<String>,
    pub posts: Vec<ContentItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCategoryArchive {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub posts: Option<Nodes<WirePost>>,
}

impl WireCategoryArchive {
    pub fn into_archive(self) -> CategoryArchive {
        let mut posts = into_items(self.posts.unwrap_or_default().nodes);
        sort_by_date_desc(&mut posts);
        CategoryArchive {
            category: Category {
                name: self.name.unwrap_or_default(),
                slug: self.slug.unwrap_or_default(),
            },
            description: self.description,
            posts,
        }
    }
}

/// `{ category: {...} }` root shape.
#[derive(Debug, Clone, Deserialize)]
pub struct WireCategorySingle {
    pub category: Option<WireCategoryArchive>,
}

/// `{ posts: { nodes: ... } }` root shape.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePostsNodes {
    #[serde(default)]
    pub posts: Option<Nodes<WirePost>>,
}
