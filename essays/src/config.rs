use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Production GraphQL endpoint (Nhost-hosted Hasura)
pub const DEFAULT_GRAPHQL_ENDPOINT: &str =
    "https://kqfrdgkibjtxscsdyojc.hasura.eu-central-1.nhost.run/v1/graphql";

pub const DEFAULT_CONTAINER_ID: &str = "essays-container";
pub const DEFAULT_DETAIL_PAGE: &str = "writing.html";
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub graphql_endpoint: String,
    /// Id of the element whose children the feed owns
    pub container_id: String,
    /// Page that renders a single article, linked as `<page>?slug=<slug>`
    pub detail_page: String,
    /// Number of characters kept from `content` for the excerpt
    pub excerpt_length: usize,
    /// Overall request timeout. `None` leaves reqwest's default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source (the process env in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let excerpt_length = match lookup("ESSAYS_EXCERPT_LENGTH") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "ESSAYS_EXCERPT_LENGTH",
                    value,
                })?,
            None => defaults.excerpt_length,
        };

        let request_timeout = match lookup("ESSAYS_REQUEST_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: "ESSAYS_REQUEST_TIMEOUT_SECS",
                        value,
                    })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            graphql_endpoint: lookup("ESSAYS_GRAPHQL_ENDPOINT")
                .unwrap_or(defaults.graphql_endpoint),
            container_id: lookup("ESSAYS_CONTAINER_ID").unwrap_or(defaults.container_id),
            detail_page: lookup("ESSAYS_DETAIL_PAGE").unwrap_or(defaults.detail_page),
            excerpt_length,
            request_timeout,
        })
    }
}
