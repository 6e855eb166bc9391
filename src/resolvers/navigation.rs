//! Navigation menus.
//!
//! The structured global-navigation settings are the primary source.
//! Sites still on the legacy flat menu fall back to it; when both are
//! absent the caller gets `None` and renders its own hardcoded nav.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::error::Error;
use crate::transport::{CachePolicy, Transport};
use crate::types::menu::{menus_from_flat, NavigationMenus, WireMenuItem, WireNavigationManager};
use crate::types::wire::WireSettingsDocument;

const NAVIGATION_QUERY: &str = r"
query GlobalNavigation {
  maiyahOptionsData {
    maiyahGlobalSettings {
      globalNavigationManager {
        desktopMenuItems { label url subMenuItems { label url } }
        mobileDrawerItems { label url subMenuItems { label url } }
        mobileDrawerLogo { node { sourceUrl } }
        pillMenuItems { label url }
        bottomNavItems { label url icon { node { sourceUrl } } }
      }
    }
  }
}";

const LEGACY_MENU_QUERY: &str = r"
query LegacyMainMenu {
  maiyahOptionsData {
    maiyahGlobalSettings {
      mainMenuManager {
        mainMenuItems { label url subMenuItems { label url } }
      }
    }
  }
}";

/// Resolves the unified navigation structure.
pub struct NavigationClient {
    transport: Arc<dyn Transport>,
}

impl NavigationClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The unified menus, or `None` when neither source has content.
    /// Navigation is supplementary: any failure degrades to `None` and
    /// the caller renders its static default nav.
    pub async fn menus(&self) -> Option<NavigationMenus> {
        match self.structured_manager().await {
            Ok(Some(manager)) if !manager.is_empty() => return Some(manager.into_menus()),
            Ok(Some(_)) => debug!("structured navigation is empty; trying legacy flat menu"),
            Ok(None) => {}
            Err(error) => {
                warn!(%error, "structured navigation fetch failed; trying legacy flat menu");
            }
        }

        match self.legacy_menu_items().await {
            Ok(Some(items)) if !items.is_empty() => Some(menus_from_flat(items)),
            Ok(_) => None,
            Err(error) => {
                warn!(%error, "legacy menu fetch failed; no navigation available");
                None
            }
        }
    }

    async fn structured_manager(&self) -> Result<Option<WireNavigationManager>, Error> {
        let data = self
            .transport
            .request(NAVIGATION_QUERY, Some(json!({})), CachePolicy::default())
            .await?;
        let document: WireSettingsDocument = serde_json::from_value(data)?;
        Ok(document
            .into_settings()
            .and_then(|s| s.global_navigation_manager))
    }

    async fn legacy_menu_items(&self) -> Result<Option<Vec<WireMenuItem>>, Error> {
        let data = self
            .transport
            .request(LEGACY_MENU_QUERY, Some(json!({})), CachePolicy::default())
            .await?;
        let document: WireSettingsDocument = serde_json::from_value(data)?;
        Ok(document
            .into_settings()
            .and_then(|s| s.main_menu_manager)
            .and_then(|m| m.main_menu_items))
    }
}
