//! Footer and theme-customization models and wire shapes.
//!
//! All of this is supplementary UI data: fetch failures degrade to
//! `None` at the resolver layer and never block a page.

use serde::Deserialize;

use crate::avatar::rewrite_asset_host;
use crate::types::wire::MediaRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLogo {
    pub image_url: Option<String>,
    pub dark_image_url: Option<String>,
    pub link_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLinkColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// Editorial footer content.
#[derive(Debug, Clone, Default)]
pub struct Footer {
    pub description: Option<String>,
    pub logos: Vec<FooterLogo>,
    pub socials: Vec<SocialLink>,
    pub copyright: Option<String>,
    pub link_columns: Vec<FooterLinkColumn>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFooterLogo {
    pub logo_image: Option<MediaRef>,
    pub logo_image_dark: Option<MediaRef>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFooterSocial {
    pub platform: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFooterLink {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFooterLinkColumn {
    pub column_title: Option<String>,
    pub column_links: Option<Vec<WireFooterLink>>,
}

/// The footer section of the settings singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFooterManager {
    pub footer_description: Option<String>,
    pub footer_logos: Option<Vec<WireFooterLogo>>,
    pub footer_socials: Option<Vec<WireFooterSocial>>,
    pub footer_copyright: Option<String>,
    pub footer_link_columns: Option<Vec<WireFooterLinkColumn>>,
}

impl WireFooterManager {
    pub fn into_footer(self) -> Footer {
        let logos = self
            .footer_logos
            .unwrap_or_default()
            .into_iter()
            .map(|l| FooterLogo {
                image_url: l.logo_image.and_then(|m| m.source_url().map(rewrite_asset_host)),
                dark_image_url: l
                    .logo_image_dark
                    .and_then(|m| m.source_url().map(rewrite_asset_host)),
                link_url: l.logo_url,
            })
            .collect();

        let socials = self
            .footer_socials
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| {
                Some(SocialLink {
                    platform: s.platform?,
                    url: s.url?,
                })
            })
            .collect();

        let link_columns = self
            .footer_link_columns
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| {
                let title = c.column_title?;
                let links = c
                    .column_links
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|l| {
                        Some(FooterLink {
                            label: l.label?,
                            url: l.url.unwrap_or_else(|| "#".to_string()),
                        })
                    })
                    .collect();
                Some(FooterLinkColumn { title, links })
            })
            .collect();

        Footer {
            description: self.footer_description,
            logos,
            socials,
            copyright: self.footer_copyright,
            link_columns,
        }
    }
}

/// The theme section of the settings singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireThemeCustomization {
    pub custom_css: Option<String>,
}
