//! ReviewPing notifier
//!
//! Bridges pull-request lifecycle events to Slack: resolves the GitHub
//! handles involved through the Okta directory, composes a Block Kit
//! message, and delivers it to the reviewer(s) or the PR owner.
//! Uses hexagonal (ports & adapters) architecture; one invocation handles
//! one event and exits.

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod event;

#[cfg(test)]
mod test_utils;


use adapters::{GithubClientImpl, OktaClientImpl, SlackClientImpl};
use app::{Dispatcher, IdentityService, NotifyService, RecipientExpander};
use config::Config;
use event::EventPayload;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reviewping_notifier=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "notification run failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Event name and payload are supplied by the CI trigger.
    let event_name =
        env::var("GITHUB_EVENT_NAME").context("GITHUB_EVENT_NAME must be set by the trigger")?;
    let event_path =
        env::var("GITHUB_EVENT_PATH").context("GITHUB_EVENT_PATH must be set by the trigger")?;
    let raw = tokio::fs::read_to_string(&event_path)
        .await
        .with_context(|| format!("failed to read event payload from {}", event_path))?;
    let payload: EventPayload =
        serde_json::from_str(&raw).context("event payload is not valid JSON")?;

    tracing::info!(event = %event_name, "received trigger event");

    // One client per external system, shared read-only for the invocation.
    let directory = Arc::new(OktaClientImpl::new(
        config.okta_org_url.clone(),
        config.okta_api_token.clone(),
        config.okta_handle_field.clone(),
    ));
    let chat = Arc::new(SlackClientImpl::new(
        config.slack_api_url.clone(),
        config.slack_bot_token.clone(),
    ));
    let teams = Arc::new(GithubClientImpl::new(
        config.github_api_url.clone(),
        config.github_token.clone(),
    ));

    let identity = Arc::new(IdentityService::new(directory, chat.clone()));
    let service = NotifyService::new(
        identity.clone(),
        RecipientExpander::new(teams),
        Dispatcher::new(identity, chat),
    );

    let event = event::classify(&event_name, &payload)?;
    service.run(event).await?;

    Ok(())
}
