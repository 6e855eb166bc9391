//! The top-level client aggregating every content resolver.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::error::Error;
use crate::resolvers::{
    AgendaClient, ContributorsClient, HomepageClient, NavigationClient, PagesClient, PostsClient,
    SiteClient,
};
use crate::transport::{HttpTransport, Transport, TransportConfig};

/// Entry point for the content-resolution layer.
///
/// One client per upstream CMS; resolvers share a single transport so
/// the response cache is shared too.
///
/// # Examples
///
/// ```no_run
/// use newsroom::{NewsroomClient, SiteConfig, TransportConfig};
///
/// # async fn run() -> Result<(), newsroom::Error> {
/// let config = SiteConfig::new("https://cms.example.org/graphql", None);
/// let client = NewsroomClient::new(config, TransportConfig::default())?;
/// let homepage = client.homepage().compose().await;
/// println!("{} featured posts", homepage.featured_posts.len());
/// # Ok(())
/// # }
/// ```
pub struct NewsroomClient {
    config: SiteConfig,
    posts: PostsClient,
    pages: PagesClient,
    homepage: HomepageClient,
    navigation: NavigationClient,
    contributors: ContributorsClient,
    agenda: AgendaClient,
    site: SiteClient,
}

impl NewsroomClient {
    /// Create a client over a real HTTP transport.
    pub fn new(config: SiteConfig, transport_config: TransportConfig) -> Result<Self, Error> {
        let transport = Arc::new(HttpTransport::new(&config.api_url, transport_config)?);
        Ok(Self::with_transport(transport, config))
    }

    /// Create a client from the environment. See
    /// [`SiteConfig::from_env`] for the variables consulted.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(SiteConfig::from_env(), TransportConfig::default())
    }

    /// Create a client over an arbitrary transport. This is the seam
    /// tests use to substitute [`MockTransport`].
    ///
    /// [`MockTransport`]: crate::testing::MockTransport
    pub fn with_transport(transport: Arc<dyn Transport>, config: SiteConfig) -> Self {
        Self {
            posts: PostsClient::new(Arc::clone(&transport)),
            pages: PagesClient::new(Arc::clone(&transport)),
            homepage: HomepageClient::new(Arc::clone(&transport)),
            navigation: NavigationClient::new(Arc::clone(&transport)),
            contributors: ContributorsClient::new(Arc::clone(&transport), config.clone()),
            agenda: AgendaClient::new(Arc::clone(&transport)),
            site: SiteClient::new(transport),
            config,
        }
    }

    /// The resolved endpoint configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Post listings, lookups, and search.
    #[must_use]
    pub fn posts(&self) -> &PostsClient {
        &self.posts
    }

    /// Static CMS pages.
    #[must_use]
    pub fn pages(&self) -> &PagesClient {
        &self.pages
    }

    /// Homepage composition.
    #[must_use]
    pub fn homepage(&self) -> &HomepageClient {
        &self.homepage
    }

    /// Navigation menus.
    #[must_use]
    pub fn navigation(&self) -> &NavigationClient {
        &self.navigation
    }

    /// Contributor directory and archives.
    #[must_use]
    pub fn contributors(&self) -> &ContributorsClient {
        &self.contributors
    }

    /// Agenda events.
    #[must_use]
    pub fn agenda(&self) -> &AgendaClient {
        &self.agenda
    }

    /// Footer and theme settings.
    #[must_use]
    pub fn site(&self) -> &SiteClient {
        &self.site
    }
}
