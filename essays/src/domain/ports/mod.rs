//! Domain ports (traits)
//!
//! Port traits define interfaces the feed requires from the outside world.
//! Adapters provide concrete implementations of these traits.

pub mod graphql;
pub mod page;

pub use graphql::{GraphqlRequest, GraphqlTransport};
pub use page::{Container, ElementRef, ScrollWatcher, ANIMATE_ON_SCROLL_CLASS, VISIBLE_CLASS};
