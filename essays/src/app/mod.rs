//! Application layer
//!
//! The fetch-and-render pipeline and the GraphQL documents it sends.

pub mod feed_service;
pub mod queries;

pub use feed_service::{EssayFeedService, FeedOutcome};
pub use queries::{parse_writings, writings_query};
