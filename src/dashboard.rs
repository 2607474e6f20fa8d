//! Dashboard Module
//!
//! Gathers everything the home screen shows into one typed snapshot:
//! three watchlists, the portfolio balance and the headline charts.

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, warn};

use crate::client::MarketClient;
use crate::models::{ChartData, PortfolioValuation, Quote, Trend};
use crate::transport::Transport;

pub const CRYPTO: [&str; 3] = ["BTC", "ETH", "SOL"];
pub const STOCKS: [&str; 3] = ["AAPL", "MSFT", "SPY"];
pub const COMMODITIES: [&str; 3] = ["GOLD", "BRENT", "WTI"];

/// Symbols charted on the home screen, one per watchlist.
pub const HEADLINE_CHARTS: [&str; 3] = ["BTC", "AAPL", "GOLD"];

/// One row of a watchlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WatchRow {
    Quoted {
        #[serde(flatten)]
        quote: Quote,
        /// Colour hint for the daily change
        trend: Trend,
    },
    Unavailable { symbol: String },
}

impl WatchRow {
    pub fn quoted(quote: Quote) -> Self {
        let trend = quote.trend();
        WatchRow::Quoted { quote, trend }
    }

    pub fn symbol(&self) -> &str {
        match self {
            WatchRow::Quoted { quote, .. } => &quote.symbol,
            WatchRow::Unavailable { symbol } => symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Watchlist {
    pub name: String,
    pub rows: Vec<WatchRow>,
}

/// Portfolio summary line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Balance {
    /// The user holds nothing yet
    Empty,
    Valued(PortfolioValuation),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub range_days: u32,
    pub watchlists: Vec<Watchlist>,
    pub balance: Balance,
    pub charts: Vec<ChartData>,
}

impl DashboardSnapshot {
    /// True if any chart was drawn from placeholder data.
    pub fn has_synthetic_charts(&self) -> bool {
        self.charts.iter().any(|chart| chart.synthetic)
    }
}

/// Builds a fresh snapshot.
///
/// Watchlist rows and charts never fail: missing quotes become
/// `Unavailable` rows and charts fall back to synthetic series.
pub async fn refresh_dashboard<T: Transport>(
    client: &MarketClient<T>,
    range_days: u32,
) -> DashboardSnapshot {
    let groups = [("crypto", CRYPTO), ("stocks", STOCKS), ("commodities", COMMODITIES)];
    let mut watchlists = Vec::with_capacity(groups.len());
    for (name, symbols) in groups {
        watchlists.push(load_watchlist(client, name, &symbols).await);
    }

    let balance = load_balance(client).await;

    let series = join_all(HEADLINE_CHARTS.map(|symbol| client.series(symbol, range_days))).await;
    let charts = series.iter().map(ChartData::from_series).collect();

    DashboardSnapshot {
        range_days,
        watchlists,
        balance,
        charts,
    }
}

async fn load_watchlist<T: Transport>(
    client: &MarketClient<T>,
    name: &str,
    symbols: &[&str],
) -> Watchlist {
    let rows = client
        .quotes(symbols)
        .await
        .into_iter()
        .map(|(symbol, result)| match result {
            Ok(quote) => WatchRow::quoted(quote),
            Err(err) => {
                debug!(symbol = %symbol, error = %err, "quote unavailable");
                WatchRow::Unavailable { symbol }
            }
        })
        .collect();

    Watchlist {
        name: name.to_string(),
        rows,
    }
}

async fn load_balance<T: Transport>(client: &MarketClient<T>) -> Balance {
    match client.portfolio().await {
        Ok(portfolio) if portfolio.is_empty() => Balance::Empty,
        Ok(_) => match client.portfolio_value().await {
            Ok(valuation) => Balance::Valued(valuation),
            Err(err) => {
                warn!(error = %err, "portfolio valuation failed");
                Balance::Unavailable
            }
        },
        Err(err) => {
            warn!(error = %err, "portfolio unavailable");
            Balance::Unavailable
        }
    }
}
