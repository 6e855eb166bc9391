//! Post queries: listings, single lookups, search, and related posts.

use std::sync::Arc;

use serde_json::json;

use crate::error::Error;
use crate::transport::{CachePolicy, Transport};
use crate::types::post::{
    into_items, sort_by_date_desc, CategoryArchive, ContentItem, WireCategorySingle, WirePost,
    WirePostsNodes,
};

const LATEST_POSTS_QUERY: &str = r"
query LatestPosts($first: Int!) {
  posts(first: $first, where: { status: PUBLISH }) {
    nodes {
      id
      databaseId
      title
      slug
      date
      excerpt
      featuredImage { node { sourceUrl altText } }
      categories { edges { node { name slug } } }
      author { node { databaseId name } }
    }
  }
}";

const POST_BY_SLUG_QUERY: &str = r"
query PostBySlug($slug: ID!) {
  post(id: $slug, idType: SLUG) {
    id
    databaseId
    title
    slug
    date
    excerpt
    content
    featuredImage { node { sourceUrl altText } }
    categories { edges { node { name slug } } }
    author { node { databaseId name description avatar { url } } }
  }
}";

const POSTS_BY_SLUGS_QUERY: &str = r"
query PostsBySlugs($slugs: [String!]) {
  posts(first: 100, where: { nameIn: $slugs, status: PUBLISH }) {
    nodes {
      id
      databaseId
      title
      slug
      date
      excerpt
      featuredImage { node { sourceUrl altText } }
      categories { edges { node { name slug } } }
      author { node { databaseId name } }
    }
  }
}";

const POSTS_BY_AUTHOR_QUERY: &str = r"
query PostsByAuthor($author: Int!, $first: Int!) {
  posts(first: $first, where: { author: $author, status: PUBLISH }) {
    nodes {
      id
      databaseId
      title
      slug
      date
      excerpt
      featuredImage { node { sourceUrl altText } }
      categories { edges { node { name slug } } }
    }
  }
}";

const POSTS_BY_CATEGORY_QUERY: &str = r"
query PostsByCategory($category: String!, $first: Int!) {
  posts(first: $first, where: { categoryName: $category, status: PUBLISH }) {
    nodes {
      id
      databaseId
      title
      slug
      date
      excerpt
      featuredImage { node { sourceUrl altText } }
      categories { edges { node { name slug } } }
      author { node { databaseId name } }
    }
  }
}";

const CATEGORY_WITH_POSTS_QUERY: &str = r"
query CategoryWithPosts($slug: ID!, $first: Int!) {
  category(id: $slug, idType: SLUG) {
    name
    slug
    description
    posts(first: $first, where: { status: PUBLISH }) {
      nodes {
        id
        databaseId
        title
        slug
        date
        excerpt
        featuredImage { node { sourceUrl altText } }
        categories { edges { node { name slug } } }
        author { node { databaseId name } }
      }
    }
  }
}";

const SEARCH_POSTS_QUERY: &str = r"
query SearchPosts($search: String!, $first: Int!) {
  posts(first: $first, where: { search: $search, status: PUBLISH }) {
    nodes {
      id
      databaseId
      title
      slug
      date
      excerpt
      featuredImage { node { sourceUrl altText } }
      categories { edges { node { name slug } } }
    }
  }
}";

/// Post listings and lookups. Primary content: every method propagates
/// transport failures.
pub struct PostsClient {
    transport: Arc<dyn Transport>,
}

impl PostsClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn fetch_items(
        &self,
        query: &str,
        variables: serde_json::Value,
        cache: CachePolicy,
    ) -> Result<Vec<ContentItem>, Error> {
        let data = self.transport.request(query, Some(variables), cache).await?;
        let document: WirePostsNodes = serde_json::from_value(data)?;
        let mut items = into_items(document.posts.unwrap_or_default().nodes);
        sort_by_date_desc(&mut items);
        Ok(items)
    }

    /// The newest published posts, date-descending.
    pub async fn latest(&self, first: usize) -> Result<Vec<ContentItem>, Error> {
        self.fetch_items(
            LATEST_POSTS_QUERY,
            json!({ "first": first }),
            CachePolicy::default(),
        )
        .await
    }

    /// One post with full content, or `None` when the slug is unknown.
    pub async fn by_slug(&self, slug: &str) -> Result<Option<ContentItem>, Error> {
        let data = self
            .transport
            .request(
                POST_BY_SLUG_QUERY,
                Some(json!({ "slug": slug })),
                CachePolicy::default(),
            )
            .await?;

        #[derive(serde::Deserialize)]
        struct Single {
            post: Option<WirePost>,
        }

        let document: Single = serde_json::from_value(data)?;
        Ok(document.post.map(WirePost::into_item))
    }

    /// Posts for an explicit slug list, in the requested order. Unknown
    /// slugs are silently absent from the result.
    pub async fn by_slugs(&self, slugs: &[String]) -> Result<Vec<ContentItem>, Error> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let data = self
            .transport
            .request(
                POSTS_BY_SLUGS_QUERY,
                Some(json!({ "slugs": slugs })),
                CachePolicy::default(),
            )
            .await?;
        let document: WirePostsNodes = serde_json::from_value(data)?;
        let mut fetched = into_items(document.posts.unwrap_or_default().nodes);

        // The API returns its own ordering; curation order is the
        // caller's slug order.
        let mut ordered = Vec::with_capacity(slugs.len());
        for slug in slugs {
            if let Some(pos) = fetched.iter().position(|item| &item.slug == slug) {
                ordered.push(fetched.remove(pos));
            }
        }
        Ok(ordered)
    }

    /// Published posts by one author, date-descending. The "more from
    /// this author" box passes the post being read as `exclude` so it
    /// never recommends itself.
    pub async fn by_author(
        &self,
        author_id: i64,
        exclude: Option<i64>,
        first: usize,
    ) -> Result<Vec<ContentItem>, Error> {
        let fetch = if exclude.is_some() { first + 1 } else { first };
        let mut items = self
            .fetch_items(
                POSTS_BY_AUTHOR_QUERY,
                json!({ "author": author_id, "first": fetch }),
                CachePolicy::default(),
            )
            .await?;
        if let Some(excluded) = exclude {
            items.retain(|item| item.database_id != Some(excluded));
        }
        items.truncate(first);
        Ok(items)
    }

    /// A category with its posts, merged into one request. `None` for
    /// an unknown category slug.
    pub async fn category_with_posts(
        &self,
        slug: &str,
        first: usize,
    ) -> Result<Option<CategoryArchive>, Error> {
        let data = self
            .transport
            .request(
                CATEGORY_WITH_POSTS_QUERY,
                Some(json!({ "slug": slug, "first": first })),
                CachePolicy::default(),
            )
            .await?;
        let document: WireCategorySingle = serde_json::from_value(data)?;
        Ok(document.category.map(|c| c.into_archive()))
    }

    /// Published posts in one category, date-descending.
    pub async fn by_category(
        &self,
        category: &str,
        first: usize,
    ) -> Result<Vec<ContentItem>, Error> {
        self.fetch_items(
            POSTS_BY_CATEGORY_QUERY,
            json!({ "category": category, "first": first }),
            CachePolicy::default(),
        )
        .await
    }

    /// Full-text search over published posts.
    pub async fn search(&self, term: &str, first: usize) -> Result<Vec<ContentItem>, Error> {
        self.fetch_items(
            SEARCH_POSTS_QUERY,
            json!({ "search": term, "first": first }),
            CachePolicy::NoCache,
        )
        .await
    }

    /// Posts related to one post: same primary category, the post
    /// itself excluded.
    pub async fn related(
        &self,
        category: &str,
        exclude_slug: &str,
        first: usize,
    ) -> Result<Vec<ContentItem>, Error> {
        // Over-fetch by one so the exclusion never shortens the result.
        let mut items = self.by_category(category, first + 1).await?;
        items.retain(|item| item.slug != exclude_slug);
        items.truncate(first);
        Ok(items)
    }
}
