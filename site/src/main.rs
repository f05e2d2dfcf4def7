//! Portfolio site renderer
//!
//! Plays the page lifecycle for the essays section: loads the page template,
//! fires the single "content ready" signal that fetches and renders the
//! published essays, and writes the finished page.
//!
//! Configuration comes from the environment (or `.env`):
//! - SITE_TEMPLATE_PATH / SITE_OUTPUT_PATH: input and output pages
//! - ESSAYS_GRAPHQL_ENDPOINT, ESSAYS_CONTAINER_ID, ESSAYS_DETAIL_PAGE,
//!   ESSAYS_EXCERPT_LENGTH, ESSAYS_REQUEST_TIMEOUT_SECS: feed settings

mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use portfolio_essays::{
    Config, EssayFeedService, FeedOutcome, HasuraClient, HtmlDocument, RenderOptions,
    ScrollAnimationWatcher,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::SiteConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_essays=debug,portfolio_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting portfolio site render...");

    let site = SiteConfig::from_env();
    let feed_config = Config::from_env().context("Invalid essay feed configuration")?;

    let template = tokio::fs::read_to_string(&site.template_path)
        .await
        .with_context(|| format!("Failed to read template {}", site.template_path.display()))?;
    let document = Arc::new(
        HtmlDocument::new(template, &feed_config.container_id)
            .with_context(|| format!("Template {} is unusable", site.template_path.display()))?,
    );

    tracing::info!("Using GraphQL endpoint {}", feed_config.graphql_endpoint);
    let transport = Arc::new(
        HasuraClient::new(&feed_config.graphql_endpoint, feed_config.request_timeout)
            .context("Failed to build GraphQL client")?,
    );

    let service = EssayFeedService::new(
        transport,
        document.clone(),
        ScrollAnimationWatcher::global(),
        RenderOptions::from(&feed_config),
    );

    // The page's one and only ready signal
    match service.on_ready().await {
        Some(FeedOutcome::Populated(count)) => tracing::info!("Rendered {} essays", count),
        Some(FeedOutcome::Empty) => tracing::info!("No essays published yet"),
        Some(FeedOutcome::Failed(kind)) => {
            tracing::warn!("Essays unavailable ({}), rendered error card", kind)
        }
        None => {}
    }

    if let Some(parent) = site.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    tokio::fs::write(&site.output_path, document.html())
        .await
        .with_context(|| format!("Failed to write {}", site.output_path.display()))?;

    tracing::info!("Wrote {}", site.output_path.display());

    Ok(())
}
