//! Portfolio essay feed
//!
//! Pulls published writings from the site's GraphQL backend and renders them
//! as cards into the page's essays container. Uses a ports & adapters layout:
//! the feed service only sees the `GraphqlTransport`, `Container` and
//! `ScrollWatcher` traits.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::{HasuraClient, HtmlDocument, NoopScrollWatcher, ScrollAnimationWatcher};
pub use app::{EssayFeedService, FeedOutcome};
pub use config::Config;
pub use domain::entities::{Article, ArticleId};
pub use error::{ConfigError, FailureKind, FeedError, PageError};
pub use feed::RenderOptions;
