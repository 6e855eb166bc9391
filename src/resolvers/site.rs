//! Footer and theme settings.
//!
//! Supplementary UI data: both fetches degrade to `None` with a warning
//! rather than failing the page that asked for them.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::error::Error;
use crate::transport::{CachePolicy, Transport};
use crate::types::site::{Footer, WireFooterManager};
use crate::types::wire::{WireGlobalSettings, WireSettingsDocument};

const FOOTER_QUERY: &str = r"
query FooterSettings {
  maiyahOptionsData {
    maiyahGlobalSettings {
      footerManager {
        footerDescription
        footerLogos {
          logoImage { node { sourceUrl } }
          logoImageDark { node { sourceUrl } }
          logoUrl
        }
        footerSocials { platform url }
        footerCopyright
        footerLinkColumns {
          columnTitle
          columnLinks { label url }
        }
      }
    }
  }
}";

const THEME_QUERY: &str = r"
query ThemeCustomization {
  maiyahOptionsData {
    maiyahGlobalSettings {
      themeCustomization {
        customCss
      }
    }
  }
}";

/// Site-wide supplementary settings.
pub struct SiteClient {
    transport: Arc<dyn Transport>,
}

impl SiteClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The editorial footer, or `None` when unset or unreachable.
    pub async fn footer(&self) -> Option<Footer> {
        match self.fetch_settings(FOOTER_QUERY).await {
            Ok(settings) => settings?.footer_manager.map(WireFooterManager::into_footer),
            Err(error) => {
                warn!(%error, "footer settings fetch failed");
                None
            }
        }
    }

    /// Editorial custom CSS, or `None` when unset or unreachable.
    pub async fn theme_css(&self) -> Option<String> {
        match self.fetch_settings(THEME_QUERY).await {
            Ok(settings) => settings?
                .theme_customization
                .and_then(|theme| theme.custom_css)
                .filter(|css| !css.trim().is_empty()),
            Err(error) => {
                warn!(%error, "theme settings fetch failed");
                None
            }
        }
    }

    async fn fetch_settings(&self, query: &str) -> Result<Option<WireGlobalSettings>, Error> {
        let data = self
            .transport
            .request(query, Some(json!({})), CachePolicy::default())
            .await?;
        let document: WireSettingsDocument = serde_json::from_value(data)?;
        Ok(document.into_settings())
    }
}
