//! GraphQL transport port trait
//!
//! Sends a single query document to the remote service and hands back the
//! decoded JSON body. Classifying the body (data vs. errors vs. garbage) is
//! the caller's job; the transport only fails when there is no JSON at all.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::FeedError;

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Port trait for talking to the remote GraphQL service
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Execute one request. Exactly one attempt; no retry.
    ///
    /// Returns `FeedError::Fetch` for transport failures and non-JSON bodies.
    async fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value, FeedError>;
}
