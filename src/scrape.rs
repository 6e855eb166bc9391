//! Legacy HTML recovery.
//!
//! Two generations of the site predate the structured schema and still
//! hold avatar URLs the API does not expose: the contributors directory
//! page (one `about-author-{id}` block per writer) and the per-author
//! pages (an `<img class="wp-user-avatar">` tag). A snapshot of the
//! directory export ships with the crate so resolution works even when
//! the legacy host is gone.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Bundled snapshot of the legacy contributors directory export.
const BUNDLED_EXPORT: &str = include_str!("../data/legacy-contributors.html");

/// Avatar URLs recovered from a legacy source, keyed both ways because
/// older entries carry only one of the two identifiers.
#[derive(Debug, Clone, Default)]
pub struct LegacyAvatars {
    pub by_id: HashMap<i64, String>,
    pub by_slug: HashMap<String, String>,
}

impl LegacyAvatars {
    /// True when the source yielded nothing usable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.by_slug.is_empty()
    }
}

static AUTHOR_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)about-author-(?P<id>\d+)(?:[^>]*data-slug="(?P<slug>[^"]+)")?.*?<img[^>]+src="(?P<src>[^"]+)""#,
    )
    .expect("author block pattern is valid")
});

static USER_AVATAR_IMG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<img[^>]*class="[^"]*wp-user-avatar[^"]*"[^>]*src="(?P<src>[^"]+)"|<img[^>]*src="(?P<src2>[^"]+)"[^>]*class="[^"]*wp-user-avatar[^"]*""#,
    )
    .expect("user avatar pattern is valid")
});

/// Parse a contributors directory page (or the bundled export) into
/// legacy avatar maps.
#[must_use]
pub fn parse_directory(html: &str) -> LegacyAvatars {
    let mut avatars = LegacyAvatars::default();

    for capture in AUTHOR_BLOCK.captures_iter(html) {
        let Some(src) = capture.name("src") else {
            continue;
        };
        let url = src.as_str().to_string();

        if let Some(id) = capture.name("id").and_then(|m| m.as_str().parse::<i64>().ok()) {
            avatars.by_id.entry(id).or_insert_with(|| url.clone());
        }
        if let Some(slug) = capture.name("slug") {
            avatars
                .by_slug
                .entry(slug.as_str().to_string())
                .or_insert(url);
        }
    }

    avatars
}

/// The bundled legacy export, parsed.
#[must_use]
pub fn bundled_legacy_avatars() -> LegacyAvatars {
    parse_directory(BUNDLED_EXPORT)
}

/// Extract the avatar URL from a legacy per-author page, identified by
/// its `wp-user-avatar` image class.
#[must_use]
pub fn author_page_avatar(html: &str) -> Option<String> {
    let capture = USER_AVATAR_IMG.captures(html)?;
    capture
        .name("src")
        .or_else(|| capture.name("src2"))
        .map(|m| m.as_str().to_string())
}
