//! Verdict Runner
//!
//! A long-running worker that watches the review status of a submitted
//! homework and reports changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and schedule from environment variables
//! - Repositories: HTTP access to the status API
//! - Services: message delivery and inter-cycle sleep
//! - Scheduler: the poll-diff-notify loop
//!
//! Startup fails fast when a credential is missing; after that, every
//! error is handled inside the loop and the process keeps polling.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verdict_client::{StatusClient, TelegramClient};

use crate::config::Config;
use crate::repository::HttpStatusRepository;
use crate::scheduler::StatusPoller;
use crate::service::{TelegramNotifier, TokioSleeper};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdict_runner=info,verdict_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Verdict Runner");

    let config = load_config().inspect_err(|e| error!("Startup failed: {:#}", e))?;
    info!(
        "Loaded configuration: status_endpoint={}, chat_id={}, practicum_token={}, telegram_token={}",
        config.status_endpoint,
        config.credentials.telegram_chat_id,
        config.credentials.practicum_token,
        config.credentials.telegram_token
    );

    let http = verdict_client::http_client(config.request_timeout)
        .context("Failed to build HTTP client")?;

    let status_client = StatusClient::with_client(
        config.status_endpoint.clone(),
        config.credentials.practicum_token.clone(),
        http.clone(),
    );
    let telegram_client = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.credentials.telegram_token.clone(),
        config.credentials.telegram_chat_id.clone(),
        http,
    );

    let mut poller = StatusPoller::new(
        config.poll_interval,
        config.start_cursor,
        Arc::new(HttpStatusRepository::new(status_client)),
        Arc::new(TelegramNotifier::new(telegram_client)),
        Arc::new(TokioSleeper),
    );

    info!(
        "Runner initialized (poll interval: {:?}, request timeout: {:?})",
        config.poll_interval, config.request_timeout
    );

    if let Err(e) = poller.run().await {
        error!("Poller error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Loads and validates configuration from the environment
fn load_config() -> Result<Config> {
    let config = Config::from_env();
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
