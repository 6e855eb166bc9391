//! Shared wire shapes for the CMS GraphQL schema.
//!
//! The API returns loosely-shaped connection envelopes (`edges`/`node`
//! and `nodes` forms) and wrapped media references. Everything here is
//! deserialized at the API boundary and converted into the strict types
//! in the sibling modules; raw `Value` payloads never reach resolver
//! logic.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::warn;

/// `{ edges: [{ node: T }] }` connection form.
#[derive(Debug, Clone, Deserialize)]
pub struct Edges<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<T> Edges<T> {
    /// Unwrap the connection into its nodes.
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|e| e.node).collect()
    }
}

/// `{ nodes: [T] }` connection form.
#[derive(Debug, Clone, Deserialize)]
pub struct Nodes<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// `{ node: { sourceUrl, altText } }` media wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaRef {
    pub node: Option<MediaNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaNode {
    pub source_url: Option<String>,
    pub alt_text: Option<String>,
}

impl MediaRef {
    /// The wrapped source URL, if any.
    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        self.node.as_ref()?.source_url.as_deref()
    }

    /// The wrapped alt text, if any.
    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.node.as_ref()?.alt_text.as_deref()
    }
}

/// Envelope for the custom options/settings singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOptionsData {
    pub maiyah_global_settings: Option<WireGlobalSettings>,
}

/// The settings singleton. Each query fetches only the section it
/// needs, so every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGlobalSettings {
    pub homepage_settings: Option<super::homepage::WireHomepageSettings>,
    pub global_navigation_manager: Option<super::menu::WireNavigationManager>,
    pub main_menu_manager: Option<super::menu::WireMainMenuManager>,
    pub footer_manager: Option<super::site::WireFooterManager>,
    pub theme_customization: Option<super::site::WireThemeCustomization>,
}

/// `{ maiyahOptionsData: ... }` root shape for settings-only queries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSettingsDocument {
    pub maiyah_options_data: Option<WireOptionsData>,
}

impl WireSettingsDocument {
    /// Dig out the settings singleton, tolerating any missing level.
    pub fn into_settings(self) -> Option<WireGlobalSettings> {
        self.maiyah_options_data?.maiyah_global_settings
    }
}

/// Parse a CMS timestamp. WordPress emits ISO-8601 with or without an
/// offset; ACF date fields add a few flat date formats.
#[must_use]
pub fn parse_cms_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    for format in ["%Y-%m-%d", "%Y%m%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}

/// Parse a CMS timestamp, falling back to the epoch so unparseable
/// dates sort last under the date-descending ordering policy.
#[must_use]
pub fn parse_cms_date_or_epoch(raw: Option<&str>) -> DateTime<Utc> {
    match raw {
        Some(text) => parse_cms_date(text).unwrap_or_else(|| {
            warn!(%text, "unparseable CMS date; sorting as epoch");
            DateTime::UNIX_EPOCH
        }),
        None => DateTime::UNIX_EPOCH,
    }
}
