//! Response bodies returned by the upstream API
//!
//! Defines the structure of decoded JSON payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::series::{PricePoint, Series};

/// Body of `GET /api/price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    /// Daily change in percent
    #[serde(default)]
    pub change_pct: f64,
}

/// Sign of a quote's daily change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Quote {
    pub fn trend(&self) -> Trend {
        if self.change_pct > 0.0 {
            Trend::Up
        } else if self.change_pct < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Body of `GET /api/series`
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesPayload {
    /// Some upstreams omit this; the requested symbol is used instead
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub points: Vec<PricePoint>,
}

impl SeriesPayload {
    /// Converts the payload into a real (non-synthetic) series for
    /// `requested`, unless the payload names its own symbol.
    pub fn into_series(self, requested: &str) -> Series {
        let symbol = if self.symbol.is_empty() {
            requested.to_string()
        } else {
            self.symbol
        };
        Series::real(symbol, self.points)
    }
}

/// One entry of `GET /api/news`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub ai_comment: Option<String>,
}

/// Body of `GET /api/news`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsFeed {
    #[serde(default)]
    pub items: Vec<NewsItem>,
}

/// Body of `GET /api/insights`. Items are passed through untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightFeed {
    #[serde(default)]
    pub items: Vec<Value>,
}

/// One position in a user's portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    #[serde(default)]
    pub qty: f64,
}

/// Body of `GET /api/portfolio`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

/// Estimated value of a portfolio at current prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioValuation {
    /// Number of holdings valued
    pub holdings: usize,
    /// Sum of quantity times price
    pub total: f64,
}
