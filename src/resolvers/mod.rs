//! Content resolvers.
//!
//! One client per content area, each holding a shared [`Transport`]
//! handle. Resolvers own the GraphQL documents, the fallback policies,
//! and the wire-to-strict conversion; callers only ever see the strict
//! types.
//!
//! Error posture varies by area and is deliberate: primary content
//! (posts, pages, contributors, agenda) propagates failures so callers
//! can render an error state, while supplementary surfaces (homepage
//! composition, navigation, footer, theme) degrade to defaults.
//!
//! [`Transport`]: crate::transport::Transport

pub mod agenda;
pub mod contributors;
pub mod homepage;
pub mod navigation;
pub mod pages;
pub mod posts;
pub mod site;

pub use agenda::AgendaClient;
pub use contributors::ContributorsClient;
pub use homepage::HomepageClient;
pub use navigation::NavigationClient;
pub use pages::PagesClient;
pub use posts::PostsClient;
pub use site::SiteClient;
