//! Mini Market - cached, failure-tolerant market data client
//!
//! Fetches prices, price history, news and portfolio data from a remote JSON
//! API, keeps responses briefly in memory, and substitutes synthetic price
//! history when the series endpoint is down.

pub mod cache;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod models;
pub mod tasks;
pub mod transport;

pub use cache::ResponseCache;
pub use client::MarketClient;
pub use config::Config;
pub use error::{FetchError, Result};
pub use fetch::{FetchPolicy, ResilientFetcher, SyntheticSeriesGenerator};
pub use tasks::spawn_sweep_task;
