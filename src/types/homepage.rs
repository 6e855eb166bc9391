//! Homepage composition models and wire shapes.

use serde::Deserialize;

use crate::avatar::rewrite_asset_host;
use crate::types::post::{ContentItem, WirePost};
use crate::types::wire::{MediaRef, Nodes, WireOptionsData};

/// How many items the latest grid section shows.
pub const LATEST_GRID_LEN: usize = 6;

/// How many items the popular grid section shows.
pub const POPULAR_GRID_LEN: usize = 6;

/// How many latest posts stand in for an empty curated featured set.
pub const FALLBACK_FEATURED_LEN: usize = 3;

/// Editorial selector for the homepage featured slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeaturedContentMode {
    #[default]
    Manual,
    Latest,
    Popular,
}

impl FeaturedContentMode {
    /// Parse the editorial setting; anything unrecognized is manual.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("latest") => Self::Latest,
            Some("popular") => Self::Popular,
            _ => Self::Manual,
        }
    }
}

/// A curated homepage ad slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSlot {
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
    pub link_url: Option<String>,
}

/// Editorial titles for the homepage sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTitles {
    pub ceklis: String,
    pub latest: String,
    pub popular: String,
}

impl Default for SectionTitles {
    fn default() -> Self {
        Self {
            ceklis: "Ceklis".to_string(),
            latest: "Berita Terbaru".to_string(),
            popular: "Berita Terpopuler".to_string(),
        }
    }
}

/// The merged, ready-to-render homepage result.
///
/// `featured_posts` is non-empty only when upstream supplied a
/// non-empty set for the selected mode; the grid accessors window
/// `latest_posts` from a single offset so the latest grid never repeats
/// a featured item in `Latest` mode.
#[derive(Debug, Clone, Default)]
pub struct HomepageComposition {
    pub mode: FeaturedContentMode,
    pub featured_posts: Vec<ContentItem>,
    pub latest_posts: Vec<ContentItem>,
    pub ads: Vec<AdSlot>,
    pub section_titles: SectionTitles,
}

impl HomepageComposition {
    /// True when manual mode arrived with an empty curated list, so the
    /// presentation layer will substitute the first latest posts.
    #[must_use]
    pub fn uses_fallback_featured(&self) -> bool {
        self.mode == FeaturedContentMode::Manual && self.featured_posts.is_empty()
    }

    /// Emergency stand-in for an empty manual featured set.
    #[must_use]
    pub fn fallback_featured(&self) -> &[ContentItem] {
        self.window(0, FALLBACK_FEATURED_LEN)
    }

    /// Where the latest grid starts inside `latest_posts`. Only the
    /// `Latest` mode (and the documented emergency fallback) advances
    /// past the featured set; manual/popular grids may overlap it.
    #[must_use]
    pub fn grid_offset(&self) -> usize {
        match self.mode {
            FeaturedContentMode::Latest => self.featured_posts.len(),
            _ if self.uses_fallback_featured() => FALLBACK_FEATURED_LEN,
            _ => 0,
        }
    }

    /// The latest grid section.
    #[must_use]
    pub fn latest_grid(&self) -> &[ContentItem] {
        self.window(self.grid_offset(), LATEST_GRID_LEN)
    }

    /// The popular grid section: the next items after the latest grid.
    #[must_use]
    pub fn popular_grid(&self) -> &[ContentItem] {
        self.window(self.grid_offset() + LATEST_GRID_LEN, POPULAR_GRID_LEN)
    }

    fn window(&self, start: usize, len: usize) -> &[ContentItem] {
        let total = self.latest_posts.len();
        let start = start.min(total);
        let end = (start + len).min(total);
        &self.latest_posts[start..end]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireAdSlot {
    pub gambar: Option<MediaRef>,
    pub url: Option<String>,
}

impl WireAdSlot {
    pub fn into_slot(self) -> AdSlot {
        let (image_url, alt_text) = match self.gambar {
            Some(media) => (
                media.source_url().map(rewrite_asset_host),
                media.alt_text().map(str::to_string),
            ),
            None => (None, None),
        };
        AdSlot {
            image_url,
            alt_text,
            link_url: self.url,
        }
    }
}

/// The homepage section of the settings singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireHomepageSettings {
    pub featured_content_mode: Option<String>,
    pub section_title_ceklis: Option<String>,
    pub section_title_latest: Option<String>,
    pub section_title_popular: Option<String>,
    pub featured_posts: Option<Nodes<WirePost>>,
    pub ceklis_ads: Option<Vec<WireAdSlot>>,
}

impl WireHomepageSettings {
    pub fn section_titles(&self) -> SectionTitles {
        let defaults = SectionTitles::default();
        SectionTitles {
            ceklis: self.section_title_ceklis.clone().unwrap_or(defaults.ceklis),
            latest: self.section_title_latest.clone().unwrap_or(defaults.latest),
            popular: self
                .section_title_popular
                .clone()
                .unwrap_or(defaults.popular),
        }
    }
}

/// Root shape of the main homepage document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireHomepageDocument {
    #[serde(default)]
    pub posts: Option<Nodes<WirePost>>,
    pub maiyah_options_data: Option<WireOptionsData>,
}

impl WireHomepageDocument {
    /// Dig out the homepage settings, tolerating any missing level.
    pub fn into_parts(self) -> (Vec<WirePost>, Option<WireHomepageSettings>) {
        let posts = self.posts.unwrap_or_default().nodes;
        let settings = self
            .maiyah_options_data
            .and_then(|o| o.maiyah_global_settings)
            .and_then(|s| s.homepage_settings);
        (posts, settings)
    }
}

/// Root shape of the separately-fetched popular ranking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePopularPosts {
    #[serde(default)]
    pub wpp_popular_posts: Option<Vec<WirePost>>,
}
