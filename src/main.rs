//! Mini Market - cached, failure-tolerant market data client
//!
//! Loads the home-screen dashboard once and prints it as JSON.

use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_market::dashboard::refresh_dashboard;
use mini_market::{spawn_sweep_task, Config, MarketClient};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the session client and its response cache
/// 4. Start the cache sweep if configured
/// 5. Refresh the dashboard and print it to stdout
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_market=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base_url={}, user_id={}, range_days={}, sweep_interval={}s",
        config.api_base_url, config.user_id, config.range_days, config.sweep_interval
    );

    let range_days = config.range_days;
    let sweep_interval = config.sweep_interval;
    let cache_max_age = config.cache_max_age;
    let client = MarketClient::from_config(config).context("failed to build HTTP client")?;

    let sweep_handle = (sweep_interval > 0).then(|| {
        spawn_sweep_task(
            client.fetcher().cache(),
            Duration::from_secs(sweep_interval),
            Duration::from_secs(cache_max_age),
        )
    });

    let snapshot = refresh_dashboard(&client, range_days).await;
    if snapshot.has_synthetic_charts() {
        warn!("Some charts show synthetic data: series endpoint unavailable");
    }

    let output = serde_json::to_string_pretty(&snapshot).context("failed to encode dashboard")?;
    println!("{output}");

    let stats = client.fetcher().cache().read().await.stats();
    info!(
        "Cache stats: hits={}, misses={}, hit_rate={:.2}, entries={}",
        stats.hits,
        stats.misses,
        stats.hit_rate(),
        stats.total_entries
    );

    if let Some(handle) = sweep_handle {
        handle.abort();
    }

    Ok(())
}
