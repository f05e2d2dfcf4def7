//! Error types for the essay feed
//!
//! - `FeedError`: everything that can go wrong between issuing the query and
//!   having a validated list of articles. Always absorbed by the feed service.
//! - `PageError`: problems with the page document that hosts the container.
//! - `ConfigError`: invalid environment configuration.

use thiserror::Error;

/// A single entry of a GraphQL `errors` list
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

/// Failure kinds of the fetch step, as seen by logs and callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Fetch,
    Query,
    UnexpectedShape,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Fetch => write!(f, "fetch_failure"),
            FailureKind::Query => write!(f, "query_failure"),
            FailureKind::UnexpectedShape => write!(f, "unexpected_shape"),
        }
    }
}

/// Errors produced while fetching and validating articles
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network unreachable, connection refused, body not JSON...
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The service answered with a top-level `errors` list instead of data
    #[error("GraphQL query failed: {}", join_messages(.errors))]
    Query { errors: Vec<GraphqlErrorEntry> },

    /// The body was JSON but matched neither the data nor the errors shape
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl FeedError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FeedError::Fetch(_) => FailureKind::Fetch,
            FeedError::Query { .. } => FailureKind::Query,
            FeedError::UnexpectedShape(_) => FailureKind::UnexpectedShape,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::Fetch(e.to_string())
    }
}

fn join_messages(errors: &[GraphqlErrorEntry]) -> String {
    if errors.is_empty() {
        return "(no messages)".to_string();
    }
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Page document errors
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Container element not found: #{0}")]
    ContainerNotFound(String),

    #[error("Container element is not closed: #{0}")]
    UnclosedContainer(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}
