//! GraphQL documents and response classification
//!
//! Hasura answers `200 OK` for both successful and failed queries, so the
//! body shape decides the outcome:
//! - `{"data": {"writings": [...]}}` wins, even next to an `errors` list
//! - otherwise `{"errors": [...]}` is a query failure
//! - anything else is an unexpected shape

use serde_json::Value;

use crate::domain::entities::Article;
use crate::error::{FeedError, GraphqlErrorEntry};

/// Root field holding the articles
pub const WRITINGS_FIELD: &str = "writings";

/// Columns selected for each article
pub const QUERIED_FIELDS: [&str; 5] = ["id", "title", "slug", "content", "created_at"];

/// Lists the root query fields the service exposes. Only used to enrich
/// diagnostics when the writings query fails.
pub const ROOT_FIELDS_QUERY: &str = "{ __schema { queryType { fields { name } } } }";

/// Published writings, newest first
pub fn writings_query() -> String {
    format!(
        "query GetWritings {{ {}(where: {{published: {{_eq: true}}}}, order_by: {{created_at: desc}}) {{ {} }} }}",
        WRITINGS_FIELD,
        QUERIED_FIELDS.join(" ")
    )
}

/// Classify a writings response body and validate every record
pub fn parse_writings(body: &Value) -> Result<Vec<Article>, FeedError> {
    let writings = body.get("data").and_then(|data| data.get(WRITINGS_FIELD));

    if let Some(Value::Array(items)) = writings {
        let mut articles = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let article: Article = serde_json::from_value(item.clone()).map_err(|e| {
                FeedError::UnexpectedShape(format!("invalid {} record #{}: {}", WRITINGS_FIELD, i, e))
            })?;
            article.validate().map_err(FeedError::UnexpectedShape)?;
            articles.push(article);
        }
        return Ok(articles);
    }

    match body.get("errors") {
        Some(Value::Array(entries)) => Err(FeedError::Query {
            errors: entries.iter().map(error_entry).collect(),
        }),
        _ => Err(FeedError::UnexpectedShape(format!(
            "no data.{} or errors in response: {}",
            WRITINGS_FIELD,
            abbreviate(&body.to_string(), 200)
        ))),
    }
}

/// Root field names from an introspection response, `__` internals removed
pub fn parse_root_fields(body: &Value) -> Option<Vec<String>> {
    let fields = body
        .pointer("/data/__schema/queryType/fields")?
        .as_array()?;

    Some(
        fields
            .iter()
            .filter_map(|f| f.get("name").and_then(Value::as_str))
            .filter(|name| !name.starts_with("__"))
            .map(str::to_string)
            .collect(),
    )
}

fn error_entry(value: &Value) -> GraphqlErrorEntry {
    serde_json::from_value(value.clone()).unwrap_or_else(|_| GraphqlErrorEntry {
        message: value.to_string(),
        extensions: None,
    })
}

fn abbreviate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    }
}
