//! Adapters (implementations of port traits)
//!
//! Concrete implementations that connect the feed to external systems.

pub mod graphql;
pub mod page;

pub use graphql::HasuraClient;
pub use page::{HtmlDocument, NoopScrollWatcher, ObserverOptions, ScrollAnimationWatcher};
