//! Typed models for CMS payloads.
//!
//! Each content kind has a strict model plus the wire shapes the
//! GraphQL schema actually returns. Conversion from wire to strict
//! happens here, at the API boundary, so resolver logic never touches a
//! loosely-typed payload.

pub mod agenda;
pub mod contributor;
pub mod homepage;
pub mod menu;
pub mod page;
pub mod post;
pub mod site;
pub mod wire;

pub use agenda::AgendaEvent;
pub use contributor::{AvatarCandidate, Contributor, ContributorArchive};
pub use homepage::{AdSlot, FeaturedContentMode, HomepageComposition, SectionTitles};
pub use menu::{BottomNavItem, MenuNode, NavigationMenus};
pub use page::Page;
pub use post::{AuthorRef, Category, CategoryArchive, ContentItem};
pub use site::{Footer, FooterLink, FooterLinkColumn, FooterLogo, SocialLink};
