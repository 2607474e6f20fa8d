//! Wire and domain models for the market API
//!
//! Request payloads, decoded responses and the price series types that both
//! upstream and synthetic data share.

pub mod requests;
pub mod responses;
pub mod series;

// Re-export commonly used types
pub use requests::{normalize_symbol, HoldingRequest};
pub use responses::{
    Holding, InsightFeed, NewsFeed, NewsItem, Portfolio, PortfolioValuation, Quote, SeriesPayload,
    Trend,
};
pub use series::{ChartData, PricePoint, Series, CHART_WINDOW};
