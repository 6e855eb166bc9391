//! Navigation/menu models and wire shapes.

use serde::Deserialize;

use crate::avatar::rewrite_asset_host;
use crate::types::wire::MediaRef;

/// A navigation entry. At most one level of nesting is consumed;
/// deeper levels are dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub label: String,
    pub url: String,
    pub sub_items: Vec<MenuNode>,
}

/// A bottom-navigation entry with an optional icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomNavItem {
    pub label: String,
    pub url: String,
    pub icon_url: Option<String>,
}

/// One unified menu structure feeding every presentation surface.
#[derive(Debug, Clone, Default)]
pub struct NavigationMenus {
    pub desktop: Vec<MenuNode>,
    pub mobile_drawer: Vec<MenuNode>,
    pub drawer_logo_url: Option<String>,
    pub pills: Vec<MenuNode>,
    pub bottom_nav: Vec<BottomNavItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMenuItem {
    pub label: Option<String>,
    pub url: Option<String>,
    pub sub_menu_items: Option<Vec<WireMenuItem>>,
}

impl WireMenuItem {
    /// Normalize one item, keeping a single level of children.
    fn into_node(self) -> Option<MenuNode> {
        let label = self.label?;
        let url = self.url.unwrap_or_else(|| "#".to_string());
        let sub_items = self
            .sub_menu_items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|child| {
                let label = child.label?;
                Some(MenuNode {
                    label,
                    url: child.url.unwrap_or_else(|| "#".to_string()),
                    sub_items: Vec::new(),
                })
            })
            .collect();
        Some(MenuNode { label, url, sub_items })
    }
}

/// Normalize a list of wire menu items, dropping label-less entries.
pub fn into_nodes(items: Vec<WireMenuItem>) -> Vec<MenuNode> {
    items.into_iter().filter_map(WireMenuItem::into_node).collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBottomNavItem {
    pub label: Option<String>,
    pub url: Option<String>,
    pub icon: Option<MediaRef>,
}

/// The structured global-navigation section of the settings singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireNavigationManager {
    pub desktop_menu_items: Option<Vec<WireMenuItem>>,
    pub mobile_drawer_items: Option<Vec<WireMenuItem>>,
    pub mobile_drawer_logo: Option<MediaRef>,
    pub pill_menu_items: Option<Vec<WireMenuItem>>,
    pub bottom_nav_items: Option<Vec<WireBottomNavItem>>,
}

impl WireNavigationManager {
    /// True when the editorial object carries no menu items at all, in
    /// which case the legacy fallback source applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.desktop_menu_items.as_ref().map_or(true, Vec::is_empty)
            && self.mobile_drawer_items.as_ref().map_or(true, Vec::is_empty)
            && self.pill_menu_items.as_ref().map_or(true, Vec::is_empty)
            && self.bottom_nav_items.as_ref().map_or(true, Vec::is_empty)
    }

    pub fn into_menus(self) -> NavigationMenus {
        let bottom_nav = self
            .bottom_nav_items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| {
                let label = item.label?;
                Some(BottomNavItem {
                    label,
                    url: item.url.unwrap_or_else(|| "#".to_string()),
                    icon_url: item
                        .icon
                        .and_then(|m| m.source_url().map(rewrite_asset_host)),
                })
            })
            .collect();

        NavigationMenus {
            desktop: into_nodes(self.desktop_menu_items.unwrap_or_default()),
            mobile_drawer: into_nodes(self.mobile_drawer_items.unwrap_or_default()),
            drawer_logo_url: self
                .mobile_drawer_logo
                .and_then(|m| m.source_url().map(rewrite_asset_host)),
            pills: into_nodes(self.pill_menu_items.unwrap_or_default()),
            bottom_nav,
        }
    }
}

/// The legacy flat main-menu section of the settings singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMainMenuManager {
    pub main_menu_items: Option<Vec<WireMenuItem>>,
}

/// Build the unified structure from the legacy flat menu: the same flat
/// list backs every surface so they stay visually consistent.
pub fn menus_from_flat(items: Vec<WireMenuItem>) -> NavigationMenus {
    let nodes = into_nodes(items);
    let pills = nodes
        .iter()
        .map(|n| MenuNode {
            label: n.label.clone(),
            url: n.url.clone(),
            sub_items: Vec::new(),
        })
        .collect();

    NavigationMenus {
        desktop: nodes.clone(),
        mobile_drawer: nodes,
        drawer_logo_url: None,
        pills,
        bottom_nav: Vec::new(),
    }
}
