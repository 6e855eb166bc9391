//! Site configuration loaded from environment variables.
//!
//! The GraphQL endpoint and the logical site base URL are derived from
//! the environment with a production/development default split. When
//! only the API URL is known, the site URL is the API URL with the
//! trailing `/graphql` stripped.

use std::env;

const DEFAULT_DEV_SITE_URL: &str = "http://localhost/v2maiyah";
const DEFAULT_PROD_SITE_URL: &str = "https://assets.mymaiyah.id";

/// Resolved endpoint configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// GraphQL endpoint, always ending in `/graphql`.
    pub api_url: String,
    /// Site base URL, never ending in a slash.
    pub site_url: String,
}

impl SiteConfig {
    /// Build a configuration from an explicit API URL and an optional
    /// site URL. Both are normalized; the site URL is derived from the
    /// API URL when absent.
    pub fn new(api_url: &str, site_url: Option<&str>) -> Self {
        let api_url = normalize_api_url(api_url);
        let site_url = match site_url {
            Some(url) => trim_trailing_slashes(url.trim()).to_string(),
            None => derive_site_url(&api_url),
        };
        Self { api_url, site_url }
    }

    /// Load configuration from environment variables.
    ///
    /// `WORDPRESS_API_URL` and `WORDPRESS_SITE_URL` take precedence;
    /// otherwise defaults are picked by `NEWSROOM_ENV` ("production"
    /// selects the production endpoint).
    pub fn from_env() -> Self {
        let is_prod = env::var("NEWSROOM_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let default_api = if is_prod {
            format!("{DEFAULT_PROD_SITE_URL}/graphql")
        } else {
            format!("{DEFAULT_DEV_SITE_URL}/graphql")
        };

        let api_url = env::var("WORDPRESS_API_URL").unwrap_or(default_api);
        let site_url = env::var("WORDPRESS_SITE_URL").ok();

        Self::new(&api_url, site_url.as_deref())
    }

    /// Absolute URL for a media path on the CMS host.
    #[must_use]
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.site_url, path)
        } else {
            format!("{}/{}", self.site_url, path)
        }
    }

    /// Legacy author page for a contributor slug.
    #[must_use]
    pub fn author_page_url(&self, slug: &str) -> String {
        format!("{}/author/{}/", self.site_url, slug)
    }

    /// Legacy contributors directory page.
    #[must_use]
    pub fn contributors_page_url(&self) -> String {
        format!("{}/kontributor/", self.site_url)
    }
}

fn trim_trailing_slashes(value: &str) -> &str {
    value.trim_end_matches('/')
}

fn normalize_api_url(value: &str) -> String {
    let cleaned = trim_trailing_slashes(value.trim());
    if cleaned.ends_with("/graphql") {
        cleaned.to_string()
    } else {
        format!("{cleaned}/graphql")
    }
}

fn derive_site_url(api_url: &str) -> String {
    trim_trailing_slashes(api_url.trim_end_matches("/graphql")).to_string()
}
