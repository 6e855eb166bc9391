//! Agenda (event) models and wire shapes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::avatar::rewrite_asset_host;
use crate::types::wire::{parse_cms_date_or_epoch, MediaRef, Nodes};

/// A normalized agenda entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEvent {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub event_timestamp: DateTime<Utc>,
    pub location: String,
    pub event_type: String,
    /// Event logo when set, else the featured image.
    pub image_url: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAgendaDetails {
    pub tanggal_event: Option<String>,
    pub lokasi: Option<String>,
    pub jenis_acara: Option<String>,
    pub agenda_logo: Option<MediaRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAgenda {
    #[serde(default)]
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub agenda_details: Option<WireAgendaDetails>,
    pub featured_image: Option<MediaRef>,
}

impl WireAgenda {
    pub fn into_event(self) -> AgendaEvent {
        let details = self.agenda_details.unwrap_or_default();
        let logo_url = details
            .agenda_logo
            .and_then(|m| m.source_url().map(rewrite_asset_host));
        let featured_url = self
            .featured_image
            .and_then(|m| m.source_url().map(rewrite_asset_host));

        AgendaEvent {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            event_timestamp: parse_cms_date_or_epoch(details.tanggal_event.as_deref()),
            location: details.lokasi.unwrap_or_default(),
            event_type: details.jenis_acara.unwrap_or_default(),
            image_url: logo_url.or(featured_url),
            content: self.content,
        }
    }
}

/// `{ agendas: { nodes: [...] } }` root shape.
#[derive(Debug, Clone, Deserialize)]
pub struct WireAgendas {
    #[serde(default)]
    pub agendas: Option<Nodes<WireAgenda>>,
}

/// `{ agenda: {...} }` root shape.
#[derive(Debug, Clone, Deserialize)]
pub struct WireAgendaSingle {
    pub agenda: Option<WireAgenda>,
}
