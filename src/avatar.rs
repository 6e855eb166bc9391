//! Avatar resolution cascade.
//!
//! Contributor portraits are scattered across five generations of the
//! site with no shared foreign key. Resolution walks an ordered list of
//! sources and returns the first hit; a hardcoded placeholder ends the
//! cascade so the result is always a usable URL:
//!
//! 1. structured profile photo on the CMS user
//! 2. legacy directory export, matched by database id
//! 3. legacy directory export, matched by slug
//! 4. fuzzy match against media-library candidates
//! 5. scrape of the live legacy author page
//! 6. the CMS-native avatar, unless it is the gravatar fallback
//! 7. the default placeholder asset
//!
//! Every URL the cascade emits passes through [`rewrite_asset_host`],
//! because the legacy exports carry misspelled asset hostnames.

use std::collections::{HashMap, HashSet};

use crate::identity::{normalize, significant_tokens, tokenize};
use crate::scrape;
use crate::types::contributor::AvatarCandidate;

/// Placeholder served when no real portrait exists anywhere.
pub const DEFAULT_AVATAR_URL: &str =
    "https://assets.mymaiyah.id/wp-content/uploads/default-avatar.png";

/// The hostname all asset URLs should carry.
pub const CANONICAL_ASSET_HOST: &str = "assets.mymaiyah.id";

/// Misspelled asset hostnames observed in legacy content.
const HOST_TYPOS: &[&str] = &[
    "asset.mymaiyah.id",
    "asssets.mymaiyah.id",
    "assets.mymaiah.id",
];

/// Query-string marker of a gravatar that redirects to the plugin
/// fallback instead of a real portrait.
const GRAVATAR_FALLBACK_MARKER: &str = "d=wp_user_avatar";

/// Candidate text contains the contributor's full normalized slug.
pub const SCORE_SLUG_CONTAINED: u32 = 100;
/// Candidate text contains the contributor's full normalized name.
pub const SCORE_NAME_CONTAINED: u32 = 90;
/// At least two significant tokens match.
pub const SCORE_SIGNIFICANT_PAIR: u32 = 60;
/// Exactly one significant token matches.
pub const SCORE_SIGNIFICANT_SINGLE: u32 = 35;
/// Bonus when two or more raw (pre-stoplist) tokens also match.
pub const SCORE_RAW_PAIR_BONUS: u32 = 20;
/// Minimum score for a fuzzy candidate to be accepted.
pub const MATCH_THRESHOLD: u32 = 60;

/// The identity fields a contributor exposes for avatar lookup.
#[derive(Debug, Clone, Default)]
pub struct ContributorIdentity {
    pub database_id: Option<i64>,
    pub name: String,
    pub slug: String,
}

/// Everything the cascade can draw on for one contributor.
///
/// The legacy maps and media candidates are shared across a directory
/// listing; `author_page_html` is fetched lazily, only for contributors
/// the earlier steps fail to resolve.
#[derive(Debug, Clone, Default)]
pub struct AvatarPools {
    pub profile_photo: Option<String>,
    pub legacy_by_id: HashMap<i64, String>,
    pub legacy_by_slug: HashMap<String, String>,
    pub media_candidates: Vec<AvatarCandidate>,
    pub author_page_html: Option<String>,
    pub cms_avatar: Option<String>,
}

type Step = fn(&ContributorIdentity, &AvatarPools) -> Option<String>;

const STEPS: &[Step] = &[
    from_profile_photo,
    from_legacy_by_id,
    from_legacy_by_slug,
    from_media_candidates,
    from_author_page,
    from_cms_avatar,
];

/// Steps that run before the lazy author-page fetch. Resolving here
/// means the page never needs to be requested.
const KNOWN_SOURCE_STEPS: usize = 4;

fn from_profile_photo(_identity: &ContributorIdentity, pools: &AvatarPools) -> Option<String> {
    pools.profile_photo.clone()
}

fn from_legacy_by_id(identity: &ContributorIdentity, pools: &AvatarPools) -> Option<String> {
    let id = identity.database_id?;
    pools.legacy_by_id.get(&id).cloned()
}

fn from_legacy_by_slug(identity: &ContributorIdentity, pools: &AvatarPools) -> Option<String> {
    if identity.slug.is_empty() {
        return None;
    }
    pools.legacy_by_slug.get(&identity.slug).cloned()
}

fn from_media_candidates(identity: &ContributorIdentity, pools: &AvatarPools) -> Option<String> {
    best_candidate(identity, &pools.media_candidates).map(|c| c.source_url.clone())
}

fn from_author_page(_identity: &ContributorIdentity, pools: &AvatarPools) -> Option<String> {
    scrape::author_page_avatar(pools.author_page_html.as_deref()?)
}

fn from_cms_avatar(_identity: &ContributorIdentity, pools: &AvatarPools) -> Option<String> {
    pools
        .cms_avatar
        .as_ref()
        .filter(|url| !is_gravatar_fallback(url))
        .cloned()
}

/// Whether a CMS avatar URL is the plugin's gravatar fallback rather
/// than an uploaded portrait.
#[must_use]
pub fn is_gravatar_fallback(url: &str) -> bool {
    url.contains(GRAVATAR_FALLBACK_MARKER)
}

/// Rewrite known hostname typos to the canonical asset host. The
/// rewrite only fires on the authority part of the URL, never the path.
#[must_use]
pub fn rewrite_asset_host(url: &str) -> String {
    for typo in HOST_TYPOS {
        let marker = format!("://{typo}");
        if let Some(pos) = url.find(&marker) {
            let rest = &url[pos + marker.len()..];
            let authority_ends = rest.is_empty()
                || rest.starts_with('/')
                || rest.starts_with(':')
                || rest.starts_with('?');
            if authority_ends {
                return format!("{}://{CANONICAL_ASSET_HOST}{rest}", &url[..pos]);
            }
        }
    }
    url.to_string()
}

/// Score one media-library candidate against a contributor identity.
#[must_use]
pub fn score_candidate(identity: &ContributorIdentity, candidate: &AvatarCandidate) -> u32 {
    let combined = format!(
        "{} {} {}",
        candidate.slug.as_deref().unwrap_or(""),
        candidate.title.as_deref().unwrap_or(""),
        candidate.source_url,
    );
    let combined_norm = normalize(&combined);
    let candidate_tokens: HashSet<String> = tokenize(&combined).into_iter().collect();

    let mut score = 0;

    let slug_norm = normalize(&identity.slug);
    if !slug_norm.is_empty() && combined_norm.contains(&slug_norm) {
        score += SCORE_SLUG_CONTAINED;
    }

    let name_norm = normalize(&identity.name);
    if !name_norm.is_empty() && combined_norm.contains(&name_norm) {
        score += SCORE_NAME_CONTAINED;
    }

    let identity_text = format!("{} {}", identity.name, identity.slug);
    let significant: HashSet<String> = significant_tokens(&identity_text).into_iter().collect();
    let significant_hits = significant
        .iter()
        .filter(|t| candidate_tokens.contains(*t))
        .count();
    if significant_hits >= 2 {
        score += SCORE_SIGNIFICANT_PAIR;
    } else if significant_hits == 1 {
        score += SCORE_SIGNIFICANT_SINGLE;
    }

    let raw: HashSet<String> = tokenize(&identity_text).into_iter().collect();
    let raw_hits = raw.iter().filter(|t| candidate_tokens.contains(*t)).count();
    if raw_hits >= 2 {
        score += SCORE_RAW_PAIR_BONUS;
    }

    score
}

/// The best-scoring candidate at or above [`MATCH_THRESHOLD`]. Ties
/// keep the earliest candidate, so resolution is stable for a given
/// media-library ordering.
#[must_use]
pub fn best_candidate<'a>(
    identity: &ContributorIdentity,
    candidates: &'a [AvatarCandidate],
) -> Option<&'a AvatarCandidate> {
    let mut best: Option<(u32, &AvatarCandidate)> = None;
    for candidate in candidates {
        let score = score_candidate(identity, candidate);
        if score < MATCH_THRESHOLD {
            continue;
        }
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// Run only the steps that need no author-page fetch. `Some` here means
/// the caller can skip the page request entirely.
#[must_use]
pub fn resolve_known_sources(
    identity: &ContributorIdentity,
    pools: &AvatarPools,
) -> Option<String> {
    STEPS[..KNOWN_SOURCE_STEPS]
        .iter()
        .find_map(|step| step(identity, pools))
        .map(|url| rewrite_asset_host(&url))
}

/// Run the full cascade. Always returns a usable URL.
#[must_use]
pub fn resolve_avatar(identity: &ContributorIdentity, pools: &AvatarPools) -> String {
    STEPS
        .iter()
        .find_map(|step| step(identity, pools))
        .map_or_else(|| DEFAULT_AVATAR_URL.to_string(), |url| rewrite_asset_host(&url))
}
