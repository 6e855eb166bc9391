//! Agenda (event) queries.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::error::Error;
use crate::transport::{CachePolicy, Transport};
use crate::types::agenda::{AgendaEvent, WireAgenda, WireAgendaSingle, WireAgendas};

const AGENDAS_QUERY: &str = r"
query Agendas($first: Int!) {
  agendas(first: $first, where: { status: PUBLISH }) {
    nodes {
      id
      title
      slug
      agendaDetails {
        tanggalEvent
        lokasi
        jenisAcara
        agendaLogo { node { sourceUrl } }
      }
      featuredImage { node { sourceUrl } }
    }
  }
}";

const AGENDA_BY_SLUG_QUERY: &str = r"
query AgendaBySlug($slug: ID!) {
  agenda(id: $slug, idType: SLUG) {
    id
    title
    slug
    content
    agendaDetails {
      tanggalEvent
      lokasi
      jenisAcara
      agendaLogo { node { sourceUrl } }
    }
    featuredImage { node { sourceUrl } }
  }
}";

/// Agenda listings and lookups. Primary content: failures propagate.
pub struct AgendaClient {
    transport: Arc<dyn Transport>,
}

impl AgendaClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// All agenda entries, newest event first. Entries with an
    /// unparseable event date sort last.
    pub async fn list(&self, first: usize) -> Result<Vec<AgendaEvent>, Error> {
        let data = self
            .transport
            .request(
                AGENDAS_QUERY,
                Some(json!({ "first": first })),
                CachePolicy::default(),
            )
            .await?;
        let document: WireAgendas = serde_json::from_value(data)?;
        let mut events: Vec<AgendaEvent> = document
            .agendas
            .unwrap_or_default()
            .nodes
            .into_iter()
            .map(WireAgenda::into_event)
            .collect();
        events.sort_by(|a, b| b.event_timestamp.cmp(&a.event_timestamp));
        Ok(events)
    }

    /// Entries at or after `now`, soonest first.
    pub async fn upcoming(
        &self,
        first: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<AgendaEvent>, Error> {
        let mut events = self.list(first).await?;
        events.retain(|event| event.event_timestamp >= now);
        events.reverse();
        Ok(events)
    }

    /// One agenda entry with full content, or `None` for an unknown
    /// slug.
    pub async fn by_slug(&self, slug: &str) -> Result<Option<AgendaEvent>, Error> {
        let data = self
            .transport
            .request(
                AGENDA_BY_SLUG_QUERY,
                Some(json!({ "slug": slug })),
                CachePolicy::default(),
            )
            .await?;
        let document: WireAgendaSingle = serde_json::from_value(data)?;
        Ok(document.agenda.map(WireAgenda::into_event))
    }
}
