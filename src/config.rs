//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream API, without a trailing slash
    pub api_base_url: String,
    /// User id passed through to portfolio endpoints
    pub user_id: String,
    /// Freshness window for spot prices in milliseconds
    pub price_ttl_ms: u64,
    /// Freshness window for price history in milliseconds
    pub series_ttl_ms: u64,
    /// Freshness window for portfolio reads in milliseconds
    pub portfolio_ttl_ms: u64,
    /// Freshness window for news and insights in milliseconds
    pub news_ttl_ms: u64,
    /// Chart range in days
    pub range_days: u32,
    /// Background sweep interval in seconds, 0 disables the sweep
    pub sweep_interval: u64,
    /// Maximum age in seconds an entry may reach before the sweep drops it
    pub cache_max_age: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Upstream API base (default: http://localhost:8080)
    /// - `USER_ID` - Portfolio owner (default: demo)
    /// - `PRICE_TTL_MS` - Price freshness (default: 30000)
    /// - `SERIES_TTL_MS` - Series freshness (default: 60000)
    /// - `PORTFOLIO_TTL_MS` - Portfolio freshness (default: 10000)
    /// - `NEWS_TTL_MS` - News and insights freshness (default: 60000)
    /// - `RANGE_DAYS` - Chart range (default: 7)
    /// - `CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 0, off)
    /// - `CACHE_MAX_AGE` - Sweep age limit in seconds (default: 300)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            user_id: env::var("USER_ID")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_id),
            price_ttl_ms: parse_var("PRICE_TTL_MS").unwrap_or(defaults.price_ttl_ms),
            series_ttl_ms: parse_var("SERIES_TTL_MS").unwrap_or(defaults.series_ttl_ms),
            portfolio_ttl_ms: parse_var("PORTFOLIO_TTL_MS").unwrap_or(defaults.portfolio_ttl_ms),
            news_ttl_ms: parse_var("NEWS_TTL_MS").unwrap_or(defaults.news_ttl_ms),
            range_days: parse_var("RANGE_DAYS").unwrap_or(defaults.range_days),
            sweep_interval: parse_var("CACHE_SWEEP_INTERVAL").unwrap_or(defaults.sweep_interval),
            cache_max_age: parse_var("CACHE_MAX_AGE").unwrap_or(defaults.cache_max_age),
        }
    }

    pub fn price_ttl(&self) -> Duration {
        Duration::from_millis(self.price_ttl_ms)
    }

    pub fn series_ttl(&self) -> Duration {
        Duration::from_millis(self.series_ttl_ms)
    }

    pub fn portfolio_ttl(&self) -> Duration {
        Duration::from_millis(self.portfolio_ttl_ms)
    }

    pub fn news_ttl(&self) -> Duration {
        Duration::from_millis(self.news_ttl_ms)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            user_id: "demo".to_string(),
            price_ttl_ms: 30_000,
            series_ttl_ms: 60_000,
            portfolio_ttl_ms: 10_000,
            news_ttl_ms: 60_000,
            range_days: 7,
            sweep_interval: 0,
            cache_max_age: 300,
        }
    }
}
