//! Domain entities

pub mod article;

pub use article::{parse_timestamp, Article, ArticleId};
