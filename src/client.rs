//! Market Client Module
//!
//! Typed access to the upstream market API for one application session.
//!
//! # Endpoints
//! - `GET /api/price` - spot quote (strict)
//! - `GET /api/series` - price history (degraded or strict)
//! - `GET /api/news`, `GET /api/insights` - feeds (strict)
//! - `GET|POST|DELETE /api/portfolio` - holdings of the session user

use std::time::Duration;

use futures::future::{join_all, try_join_all};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::fetch::{FetchPolicy, ResilientFetcher, SyntheticSeriesGenerator};
use crate::models::{
    normalize_symbol, HoldingRequest, InsightFeed, NewsFeed, Portfolio, PortfolioValuation, Quote,
    Series, SeriesPayload,
};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

// == Market Client ==
/// Session-scoped API client.
///
/// Owns the response cache through its fetcher, so dropping the client ends
/// the cache's lifetime with it.
#[derive(Debug)]
pub struct MarketClient<T = ReqwestTransport> {
    fetcher: ResilientFetcher<T>,
    config: Config,
}

impl MarketClient<ReqwestTransport> {
    /// Creates a client talking to `config.api_base_url` over reqwest.
    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self::new(ReqwestTransport::new()?, ResponseCache::new(), config))
    }
}

impl<T: Transport> MarketClient<T> {
    // == Constructor ==
    pub fn new(transport: T, cache: ResponseCache, config: Config) -> Self {
        Self {
            fetcher: ResilientFetcher::new(transport, cache),
            config,
        }
    }

    pub fn fetcher(&self) -> &ResilientFetcher<T> {
        &self.fetcher
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // == Prices ==
    /// Spot quote for `symbol`. Errors propagate.
    pub async fn price(&self, symbol: &str) -> Result<Quote> {
        let url = self.endpoint("/api/price", &[("symbol", symbol)])?;
        self.get(&url, self.config.price_ttl()).await
    }

    /// Quotes for several symbols, fetched concurrently.
    ///
    /// Each result stays paired with the symbol that requested it, in the
    /// order of `symbols`, regardless of which response landed first.
    pub async fn quotes(&self, symbols: &[&str]) -> Vec<(String, Result<Quote>)> {
        join_all(symbols.iter().map(|symbol| async move {
            (symbol.to_string(), self.price(symbol).await)
        }))
        .await
    }

    // == Series ==
    /// Price history that never fails.
    ///
    /// Any upstream failure is replaced by a synthetic series seeded from the
    /// symbol's spot price, or from the default base when that fails too.
    pub async fn series(&self, symbol: &str, days: u32) -> Series {
        match self.series_strict(symbol, days).await {
            Ok(series) => series,
            Err(err) => {
                let base_price = self.price(symbol).await.ok().map(|quote| quote.price);
                warn!(
                    symbol,
                    days,
                    error = %err,
                    ?base_price,
                    "series unavailable, substituting synthetic data"
                );
                SyntheticSeriesGenerator::generate(symbol, days, base_price)
            }
        }
    }

    /// Price history with errors propagated.
    pub async fn series_strict(&self, symbol: &str, days: u32) -> Result<Series> {
        let days = days.to_string();
        let params = [("symbol", symbol), ("days", days.as_str())];
        let url = self.endpoint("/api/series", &params)?;
        let payload: SeriesPayload = self.get(&url, self.config.series_ttl()).await?;
        Ok(payload.into_series(symbol))
    }

    /// Price history under an explicit policy. `Degraded` never returns `Err`.
    pub async fn series_with_policy(
        &self,
        symbol: &str,
        days: u32,
        policy: FetchPolicy,
    ) -> Result<Series> {
        match policy {
            FetchPolicy::Strict => self.series_strict(symbol, days).await,
            FetchPolicy::Degraded => Ok(self.series(symbol, days).await),
        }
    }

    // == Feeds ==
    pub async fn news(&self, symbol: &str, limit: u32) -> Result<NewsFeed> {
        let limit = limit.to_string();
        let params = [("symbol", symbol), ("limit", limit.as_str())];
        let url = self.endpoint("/api/news", &params)?;
        self.get(&url, self.config.news_ttl()).await
    }

    pub async fn insights(&self, symbol: &str, limit: u32) -> Result<InsightFeed> {
        let limit = limit.to_string();
        let params = [("symbol", symbol), ("limit", limit.as_str())];
        let url = self.endpoint("/api/insights", &params)?;
        self.get(&url, self.config.news_ttl()).await
    }

    // == Portfolio ==
    /// Holdings of the session user.
    pub async fn portfolio(&self) -> Result<Portfolio> {
        let url = self.portfolio_url(&[])?;
        self.get(&url, self.config.portfolio_ttl()).await
    }

    /// Upserts a holding, then drops every cached response.
    pub async fn save_holding(&self, symbol: &str, qty: f64) -> Result<()> {
        let request = HoldingRequest::new(symbol, qty);
        if let Some(message) = request.validate() {
            return Err(FetchError::InvalidRequest(message));
        }

        let url = self.portfolio_url(&[])?;
        let body = serde_json::to_value(&request)?;
        self.fetcher.mutate(HttpRequest::post(url, body)).await
    }

    /// Removes a holding, then drops every cached response.
    pub async fn remove_holding(&self, symbol: &str) -> Result<()> {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(FetchError::InvalidRequest("Symbol cannot be empty".to_string()));
        }

        let url = self.portfolio_url(&[("symbol", symbol.as_str())])?;
        self.fetcher.mutate(HttpRequest::delete(url)).await
    }

    /// Values every holding at its current spot price.
    ///
    /// Fails if the portfolio or any single price cannot be fetched.
    pub async fn portfolio_value(&self) -> Result<PortfolioValuation> {
        let portfolio = self.portfolio().await?;

        let priced = try_join_all(portfolio.holdings.iter().map(|holding| async move {
            let quote = self.price(&holding.symbol).await?;
            Ok::<f64, FetchError>(holding.qty * quote.price)
        }))
        .await?;

        let valuation = PortfolioValuation {
            holdings: priced.len(),
            total: priced.iter().sum(),
        };
        debug!(holdings = valuation.holdings, total = valuation.total, "portfolio valued");
        Ok(valuation)
    }

    // == Helpers ==
    async fn get<D: DeserializeOwned>(&self, url: &str, ttl: Duration) -> Result<D> {
        self.fetcher.fetch_as(url, ttl).await
    }

    fn portfolio_url(&self, extra: &[(&str, &str)]) -> Result<String> {
        let mut params = vec![("user_id", self.config.user_id.as_str())];
        params.extend_from_slice(extra);
        self.endpoint("/api/portfolio", &params)
    }

    /// Builds `base + path` with percent-encoded query parameters. The result
    /// doubles as the cache key.
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let base = format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path);
        Url::parse_with_params(&base, params)
            .map(String::from)
            .map_err(|e| FetchError::InvalidRequest(format!("bad url {base}: {e}")))
    }
}
