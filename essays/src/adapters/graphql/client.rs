//! HTTP GraphQL client implementation
//!
//! Posts `{"query": ...}` to a Hasura-style endpoint and decodes the JSON
//! body. The HTTP status is logged but does not decide the outcome: Hasura
//! reports query errors inside a `200 OK` body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;

use crate::domain::ports::{GraphqlRequest, GraphqlTransport};
use crate::error::FeedError;

/// GraphQL transport over reqwest
pub struct HasuraClient {
    http: Client,
    endpoint: String,
}

impl HasuraClient {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FeedError::Fetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HasuraClient {
    async fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value, FeedError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| FeedError::Fetch(format!("POST {} failed: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GraphQL endpoint answered {}", status);
        }

        let text = response
            .text()
            .await
            .map_err(|e| FeedError::Fetch(format!("failed to read response body: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| {
            FeedError::Fetch(format!("response body is not JSON ({}): {}", status, e))
        })
    }
}
