//! Essay feed service
//!
//! Fetches published articles and materializes them in the page container.
//! Every failure is absorbed here: the container always ends up either
//! populated or showing the static error card.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::app::queries::{
    parse_root_fields, parse_writings, writings_query, QUERIED_FIELDS, ROOT_FIELDS_QUERY,
    WRITINGS_FIELD,
};
use crate::domain::entities::Article;
use crate::domain::ports::{Container, GraphqlRequest, GraphqlTransport, ScrollWatcher};
use crate::error::{FailureKind, FeedError, GraphqlErrorEntry};
use crate::feed::{render_articles, render_error, RenderOptions};

/// Terminal state of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// Container shows this many article cards
    Populated(usize),
    /// Container shows the "no essays" placeholder
    Empty,
    /// Container shows the error card
    Failed(FailureKind),
}

/// Service that owns the essays container
pub struct EssayFeedService<T, C, W>
where
    T: GraphqlTransport,
    C: Container,
    W: ScrollWatcher,
{
    transport: Arc<T>,
    container: Arc<C>,
    watcher: Arc<W>,
    options: RenderOptions,
    triggered: AtomicBool,
}

impl<T, C, W> EssayFeedService<T, C, W>
where
    T: GraphqlTransport,
    C: Container,
    W: ScrollWatcher,
{
    pub fn new(
        transport: Arc<T>,
        container: Arc<C>,
        watcher: Arc<W>,
        options: RenderOptions,
    ) -> Self {
        Self {
            transport,
            container,
            watcher,
            options,
            triggered: AtomicBool::new(false),
        }
    }

    /// Entry point for the page's "content ready" signal.
    ///
    /// Runs the pipeline once per service; later calls return `None` without
    /// touching the network or the container.
    pub async fn on_ready(&self) -> Option<FeedOutcome> {
        if self.triggered.swap(true, Ordering::SeqCst) {
            tracing::debug!("Essay feed already loaded, ignoring ready signal");
            return None;
        }

        Some(self.load().await)
    }

    async fn load(&self) -> FeedOutcome {
        match self.fetch_articles().await {
            Ok(articles) => {
                self.render(&articles);
                if articles.is_empty() {
                    FeedOutcome::Empty
                } else {
                    FeedOutcome::Populated(articles.len())
                }
            }
            Err(e) => {
                match &e {
                    FeedError::Query { errors } => {
                        tracing::error!("Error fetching writings: {}", e);
                        self.log_query_diagnostics(errors).await;
                    }
                    FeedError::Fetch(_) => {
                        tracing::error!("Error fetching writings: {}", e);
                    }
                    FeedError::UnexpectedShape(_) => {
                        tracing::error!("No writings data found: {}", e);
                    }
                }
                self.render_error();
                FeedOutcome::Failed(e.kind())
            }
        }
    }

    /// Query the remote service for published articles, newest first
    pub async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError> {
        let request = GraphqlRequest::new(writings_query());
        let body = self.transport.execute(&request).await?;
        tracing::debug!("GraphQL result: {}", body);

        let articles = parse_writings(&body)?;
        tracing::info!("Fetched {} published writings", articles.len());
        Ok(articles)
    }

    /// Replace the container with article cards and register them for
    /// entrance animations. Returns the number of registered elements.
    pub fn render(&self, articles: &[Article]) -> usize {
        let markup = render_articles(articles, &self.options);
        self.replace_and_observe(&markup)
    }

    /// Replace the container with the static error card
    pub fn render_error(&self) -> usize {
        self.replace_and_observe(&render_error())
    }

    fn replace_and_observe(&self, markup: &str) -> usize {
        self.container.replace_contents(markup);

        let elements = self.container.animated_elements();
        for element in &elements {
            self.watcher.observe(element);
        }
        tracing::debug!(
            "Registered {} elements in #{} for scroll animation",
            elements.len(),
            self.container.id()
        );
        elements.len()
    }

    async fn log_query_diagnostics(&self, errors: &[GraphqlErrorEntry]) {
        for entry in errors {
            tracing::error!("GraphQL error: {}", entry.message);
        }

        tracing::warn!(
            "Queried {}({}) - check that the table is tracked and readable:",
            WRITINGS_FIELD,
            QUERIED_FIELDS.join(", ")
        );
        tracing::warn!("  1. Track the '{}' table in the GraphQL engine", WRITINGS_FIELD);
        tracing::warn!(
            "  2. Grant the public role 'select' on: {}, published",
            QUERIED_FIELDS.join(", ")
        );
        tracing::warn!("  3. Add the row filter {{\"published\": {{\"_eq\": true}}}}");

        match self.available_root_fields().await {
            Ok(fields) => tracing::warn!("Available root fields: [{}]", fields.join(", ")),
            Err(e) => tracing::warn!("Could not list available root fields: {}", e),
        }
    }

    async fn available_root_fields(&self) -> Result<Vec<String>, FeedError> {
        let body = self
            .transport
            .execute(&GraphqlRequest::new(ROOT_FIELDS_QUERY))
            .await?;

        parse_root_fields(&body).ok_or_else(|| {
            FeedError::UnexpectedShape("introspection response has no query fields".to_string())
        })
    }
}
