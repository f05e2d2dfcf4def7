//! Test fixtures
//!
//! Factory functions for articles and response bodies with sensible defaults.

use serde_json::{json, Value};

use crate::domain::entities::{parse_timestamp, Article, ArticleId};

/// Create a test article with content and a fixed date
pub fn test_article(slug: &str, title: &str) -> Article {
    test_article_dated(slug, title, "2024-03-01")
}

/// Create a test article published on `date` (`YYYY-MM-DD`)
pub fn test_article_dated(slug: &str, title: &str, date: &str) -> Article {
    Article {
        id: ArticleId(format!("id-{}", slug)),
        title: title.to_string(),
        slug: slug.to_string(),
        content: Some(format!("Body of {}", title)),
        created_at: parse_timestamp(date).expect("fixture date must parse"),
    }
}

/// Create a test article whose content is null
pub fn test_article_without_content(slug: &str, title: &str) -> Article {
    Article {
        content: None,
        ..test_article(slug, title)
    }
}

/// `{"data": {"writings": <writings>}}`
pub fn writings_body(writings: Value) -> Value {
    json!({ "data": { "writings": writings } })
}

/// `{"errors": [{"message": <message>}]}`
pub fn errors_body(message: &str) -> Value {
    json!({ "errors": [{ "message": message }] })
}
