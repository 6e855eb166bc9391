//! Contributor directory and archives.
//!
//! The directory stitches CMS users together with avatars scattered
//! across legacy sources. Resolution pools are assembled once per call:
//! the bundled legacy export (refreshed from the live directory page
//! when reachable), a per-contributor media-library search, and a lazy
//! author-page scrape for the stragglers the cheap sources miss. Every
//! auxiliary source is allowed to fail; only the users query itself is
//! a hard error.

use std::sync::Arc;

use futures::future::join_all;
use serde_json::json;
use tracing::{debug, warn};

use crate::avatar::{self, AvatarPools, ContributorIdentity};
use crate::config::SiteConfig;
use crate::error::Error;
use crate::scrape::{self, LegacyAvatars};
use crate::transport::{CachePolicy, Transport, LEGACY_PAGE_REVALIDATE_SECS};
use crate::types::contributor::{
    AvatarCandidate, Contributor, ContributorArchive, WireMediaItems, WireUser, WireUserWithPosts,
    WireUsers,
};
use crate::types::post::{into_items, sort_by_date_desc};

/// Upper bound on directory size; the site has a few dozen writers.
const DIRECTORY_FETCH_LEN: usize = 100;

/// How many media-library items one avatar search considers.
const MEDIA_SEARCH_LEN: usize = 40;

/// How many archive posts a contributor page shows.
const ARCHIVE_POSTS_LEN: usize = 12;

const CONTRIBUTORS_QUERY: &str = r"
query Contributors($first: Int!) {
  users(first: $first, where: { hasPublishedPosts: POST }) {
    nodes {
      id
      databaseId
      name
      slug
      description
      avatar { url }
      authorProfile { profilePhoto { node { sourceUrl } } }
      posts(first: 100) { nodes { id } }
    }
  }
}";

const CONTRIBUTOR_ARCHIVE_QUERY: &str = r"
query ContributorArchive($slug: ID!, $first: Int!) {
  user(id: $slug, idType: SLUG) {
    id
    databaseId
    name
    slug
    description
    avatar { url }
    authorProfile { profilePhoto { node { sourceUrl } } }
    posts(first: 100) { nodes { id } }
    archivePosts: posts(first: $first) {
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
  }
}";

const MEDIA_SEARCH_QUERY: &str = r"
query AvatarMediaSearch($search: String!, $first: Int!) {
  mediaItems(first: $first, where: { search: $search }) {
    nodes {
      sourceUrl
      slug
      title
    }
  }
}";

/// Contributor directory and per-contributor archive.
pub struct ContributorsClient {
    transport: Arc<dyn Transport>,
    config: SiteConfig,
}

impl ContributorsClient {
    pub(crate) fn new(transport: Arc<dyn Transport>, config: SiteConfig) -> Self {
        Self { transport, config }
    }

    /// The public contributor directory: every user with at least one
    /// published post, each with a fully resolved avatar.
    pub async fn directory(&self) -> Result<Vec<Contributor>, Error> {
        let data = self
            .transport
            .request(
                CONTRIBUTORS_QUERY,
                Some(json!({ "first": DIRECTORY_FETCH_LEN })),
                CachePolicy::default(),
            )
            .await?;
        let document: WireUsers = serde_json::from_value(data)?;
        let users: Vec<WireUser> = document
            .users
            .unwrap_or_default()
            .nodes
            .into_iter()
            .filter(|user| user.post_count() > 0)
            .collect();

        let legacy = self.legacy_avatars().await;

        let resolutions = join_all(
            users
                .iter()
                .map(|user| self.resolve_user_avatar(user, &legacy)),
        )
        .await;

        let mut contributors: Vec<Contributor> = users
            .into_iter()
            .zip(resolutions)
            .map(|(user, avatar_url)| {
                let post_count = user.post_count();
                Contributor {
                    id: user.id,
                    database_id: user.database_id,
                    name: user.name.unwrap_or_default(),
                    slug: user.slug.unwrap_or_default(),
                    description: user.description,
                    avatar_url,
                    post_count,
                }
            })
            .collect();

        contributors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(contributors)
    }

    /// One contributor with their recent posts, or `None` for an
    /// unknown slug.
    pub async fn archive(&self, slug: &str) -> Result<Option<ContributorArchive>, Error> {
        let data = self
            .transport
            .request(
                CONTRIBUTOR_ARCHIVE_QUERY,
                Some(json!({ "slug": slug, "first": ARCHIVE_POSTS_LEN })),
                CachePolicy::default(),
            )
            .await?;
        let document: WireUserWithPosts = serde_json::from_value(data)?;
        let Some(archive) = document.user else {
            return Ok(None);
        };

        let legacy = self.legacy_avatars().await;
        let avatar_url = self.resolve_user_avatar(&archive.user, &legacy).await;

        let mut posts = into_items(archive.archive_posts.unwrap_or_default().nodes);
        sort_by_date_desc(&mut posts);

        let user = archive.user;
        let post_count = user.post_count();
        Ok(Some(ContributorArchive {
            contributor: Contributor {
                id: user.id,
                database_id: user.database_id,
                name: user.name.unwrap_or_default(),
                slug: user.slug.unwrap_or_default(),
                description: user.description,
                avatar_url,
                post_count,
            },
            posts,
        }))
    }

    /// Legacy avatar maps: the bundled export, with the live directory
    /// page filling gaps when it is reachable. Bundled entries win on
    /// conflict.
    async fn legacy_avatars(&self) -> LegacyAvatars {
        let mut legacy = scrape::bundled_legacy_avatars();

        match self
            .transport
            .fetch_html(
                &self.config.contributors_page_url(),
                CachePolicy::Revalidate(LEGACY_PAGE_REVALIDATE_SECS),
            )
            .await
        {
            Ok(html) => {
                let live = scrape::parse_directory(&html);
                for (id, url) in live.by_id {
                    legacy.by_id.entry(id).or_insert(url);
                }
                for (slug, url) in live.by_slug {
                    legacy.by_slug.entry(slug).or_insert(url);
                }
            }
            Err(error) => {
                debug!(%error, "live contributors page unreachable; using bundled export only");
            }
        }

        legacy
    }

    /// Run the full avatar cascade for one user. The author page is
    /// only fetched when the cheaper sources all miss.
    async fn resolve_user_avatar(&self, user: &WireUser, legacy: &LegacyAvatars) -> String {
        let identity = ContributorIdentity {
            database_id: user.database_id,
            name: user.name.clone().unwrap_or_default(),
            slug: user.slug.clone().unwrap_or_default(),
        };

        let mut pools = AvatarPools {
            profile_photo: user.profile_photo_url(),
            legacy_by_id: legacy.by_id.clone(),
            legacy_by_slug: legacy.by_slug.clone(),
            cms_avatar: user.cms_avatar_url(),
            ..AvatarPools::default()
        };

        if let Some(url) = avatar::resolve_known_sources(&identity, &pools) {
            return url;
        }

        pools.media_candidates = self.media_candidates(&identity.name).await;
        if let Some(url) = avatar::resolve_known_sources(&identity, &pools) {
            return url;
        }

        if !identity.slug.is_empty() {
            pools.author_page_html = self.author_page_html(&identity.slug).await;
        }
        avatar::resolve_avatar(&identity, &pools)
    }

    async fn media_candidates(&self, name: &str) -> Vec<AvatarCandidate> {
        if name.is_empty() {
            return Vec::new();
        }
        let result = self
            .transport
            .request(
                MEDIA_SEARCH_QUERY,
                Some(json!({ "search": name, "first": MEDIA_SEARCH_LEN })),
                CachePolicy::default(),
            )
            .await
            .and_then(|data| Ok(serde_json::from_value::<WireMediaItems>(data)?));

        match result {
            Ok(document) => document.media_items.unwrap_or_default().nodes,
            Err(error) => {
                warn!(%error, %name, "media-library avatar search failed");
                Vec::new()
            }
        }
    }

    async fn author_page_html(&self, slug: &str) -> Option<String> {
        match self
            .transport
            .fetch_html(
                &self.config.author_page_url(slug),
                CachePolicy::Revalidate(LEGACY_PAGE_REVALIDATE_SECS),
            )
            .await
        {
            Ok(html) => Some(html),
            Err(error) => {
                debug!(%error, %slug, "author page unreachable");
                None
            }
        }
    }
}
