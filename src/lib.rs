//! Content-resolution layer for a headless WordPress newsroom.
//!
//! The crate sits between a GraphQL CMS and the presentation layer. It
//! owns the queries, merges content scattered across several site
//! generations (structured settings, legacy flat menus, scraped author
//! pages), and hands back strict ready-to-render types.
//!
//! The entry point is [`NewsroomClient`]; each content area hangs off
//! it as a resolver. The [`transport::Transport`] trait is the seam for
//! substituting [`testing::MockTransport`] in tests.

pub mod avatar;
pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod resolvers;
pub mod scrape;
pub mod testing;
pub mod transport;
pub mod types;

pub use client::NewsroomClient;
pub use config::SiteConfig;
pub use error::Error;
pub use transport::{Binding, CachePolicy, HttpTransport, Transport, TransportConfig};
