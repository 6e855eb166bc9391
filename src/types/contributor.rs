//! Contributor (public author) models and wire shapes.

use serde::Deserialize;

use crate::types::post::{WireAvatar, WirePost};
use crate::types::wire::{MediaRef, Nodes};

/// A content author surfaced in the public directory.
///
/// `avatar_url` is always non-empty: the resolution cascade ends in a
/// hardcoded default asset. Only contributors with `post_count > 0` are
/// surfaced in directory listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub id: String,
    pub database_id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub avatar_url: String,
    pub post_count: usize,
}

/// A contributor plus their recent posts, for the archive page.
#[derive(Debug, Clone)]
pub struct ContributorArchive {
    pub contributor: Contributor,
    pub posts: Vec<crate::types::post::ContentItem>,
}

/// Custom structured profile fields on a CMS user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAuthorProfile {
    pub profile_photo: Option<MediaRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePostId {
    pub id: String,
}

/// A CMS user as returned by the users queries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUser {
    pub id: String,
    pub database_id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<WireAvatar>,
    pub author_profile: Option<WireAuthorProfile>,
    pub posts: Option<Nodes<WirePostId>>,
}

impl WireUser {
    /// The structured profile photo, when the custom field is set.
    #[must_use]
    pub fn profile_photo_url(&self) -> Option<String> {
        self.author_profile
            .as_ref()?
            .profile_photo
            .as_ref()?
            .source_url()
            .map(str::to_string)
    }

    /// The CMS-native avatar URL (often a gravatar redirect).
    #[must_use]
    pub fn cms_avatar_url(&self) -> Option<String> {
        self.avatar.as_ref()?.url.clone()
    }

    /// Published post count visible through this query.
    #[must_use]
    pub fn post_count(&self) -> usize {
        self.posts.as_ref().map_or(0, |p| p.nodes.len())
    }
}

/// `{ users: { nodes: [...] } }` root shape.
#[derive(Debug, Clone, Deserialize)]
pub struct WireUsers {
    #[serde(default)]
    pub users: Option<Nodes<WireUser>>,
}

/// `{ user: {...} }` root shape, with the user's posts inlined.
#[derive(Debug, Clone, Deserialize)]
pub struct WireUserWithPosts {
    pub user: Option<WireUserArchive>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUserArchive {
    #[serde(flatten)]
    pub user: WireUser,
    #[serde(default)]
    pub archive_posts: Option<Nodes<WirePost>>,
}

/// An unranked media-library item scored against contributor identity.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AvatarCandidate {
    pub source_url: String,
    pub slug: Option<String>,
    pub title: Option<String>,
}

/// `{ mediaItems: { nodes: [...] } }` root shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMediaItems {
    #[serde(default)]
    pub media_items: Option<Nodes<AvatarCandidate>>,
}
