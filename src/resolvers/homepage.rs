//! Homepage composition.
//!
//! A single merged fetch backs the homepage: the newest posts plus the
//! editorial settings singleton, with the separately-ranked popular
//! list joined in concurrently. The homepage must always render, so
//! this resolver never surfaces an error; total upstream failure
//! degrades to an empty default composition.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::error::Error;
use crate::transport::{CachePolicy, Transport};
use crate::types::homepage::{
    FeaturedContentMode, HomepageComposition, SectionTitles, WireHomepageDocument,
    WirePopularPosts,
};
use crate::types::post::{into_items, sort_by_date_desc, ContentItem};

/// How many posts the merged homepage document pulls. Covers the
/// featured slots plus both grids.
const HOMEPAGE_POSTS_LEN: usize = 20;

/// How many entries the popular ranking fetch asks for.
const POPULAR_FETCH_LEN: usize = 10;

/// How many of the newest posts fill the featured slots in `latest`
/// mode.
const LATEST_FEATURED_LEN: usize = 3;

const HOMEPAGE_QUERY: &str = r"
query HomepageDocument($first: Int!) {
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
  maiyahOptionsData {
    maiyahGlobalSettings {
      homepageSettings {
        featuredContentMode
        sectionTitleCeklis
        sectionTitleLatest
        sectionTitlePopular
        featuredPosts {
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
        ceklisAds {
          gambar { node { sourceUrl altText } }
          url
        }
      }
    }
  }
}";

const POPULAR_POSTS_QUERY: &str = r"
query PopularPosts($first: Int!) {
  wppPopularPosts(first: $first) {
    id
    databaseId
    title
    slug
    date
    excerpt
    featuredImage { node { sourceUrl altText } }
    categories { edges { node { name slug } } }
  }
}";

/// Builds the ready-to-render homepage.
pub struct HomepageClient {
    transport: Arc<dyn Transport>,
}

impl HomepageClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Compose the homepage. Infallible by contract: the merged
    /// document failing entirely yields the default composition, and a
    /// failed popular ranking only empties the featured slots.
    pub async fn compose(&self) -> HomepageComposition {
        let (document, popular) = tokio::join!(self.fetch_document(), self.fetch_popular());

        let (wire_posts, settings) = match document {
            Ok(document) => document.into_parts(),
            Err(error) => {
                warn!(%error, "homepage document fetch failed; rendering default composition");
                return HomepageComposition::default();
            }
        };

        let mut latest = into_items(wire_posts);
        sort_by_date_desc(&mut latest);

        let (mode, ads, section_titles, curated) = match settings {
            Some(settings) => {
                let mode = FeaturedContentMode::parse(settings.featured_content_mode.as_deref());
                let titles = settings.section_titles();
                let ads = settings
                    .ceklis_ads
                    .unwrap_or_default()
                    .into_iter()
                    .map(|ad| ad.into_slot())
                    .collect();
                let curated = into_items(settings.featured_posts.unwrap_or_default().nodes);
                (mode, ads, titles, curated)
            }
            None => (
                FeaturedContentMode::Manual,
                Vec::new(),
                SectionTitles::default(),
                Vec::new(),
            ),
        };

        let featured_posts = match mode {
            // Curated order is editorial; never re-sorted.
            FeaturedContentMode::Manual => curated,
            FeaturedContentMode::Latest => {
                latest.iter().take(LATEST_FEATURED_LEN).cloned().collect()
            }
            // The whole ranked list features; windowing is the
            // presentation layer's call.
            FeaturedContentMode::Popular => match popular {
                Ok(posts) => posts,
                Err(error) => {
                    warn!(%error, "popular ranking fetch failed; featured slots left empty");
                    Vec::new()
                }
            },
        };

        HomepageComposition {
            mode,
            featured_posts,
            latest_posts: latest,
            ads,
            section_titles,
        }
    }

    async fn fetch_document(&self) -> Result<WireHomepageDocument, Error> {
        let data = self
            .transport
            .request(
                HOMEPAGE_QUERY,
                Some(json!({ "first": HOMEPAGE_POSTS_LEN })),
                CachePolicy::NoCache,
            )
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn fetch_popular(&self) -> Result<Vec<ContentItem>, Error> {
        let data = self
            .transport
            .request(
                POPULAR_POSTS_QUERY,
                Some(json!({ "first": POPULAR_FETCH_LEN })),
                CachePolicy::default(),
            )
            .await?;
        let document: WirePopularPosts = serde_json::from_value(data)?;
        let mut items = into_items(document.wpp_popular_posts.unwrap_or_default());
        // Display ordering is recency, not the plugin's view ranking.
        sort_by_date_desc(&mut items);
        Ok(items)
    }
}
