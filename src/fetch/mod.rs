//! Fetch Module
//!
//! Cache-aware fetching and the synthetic fallback for price history.
//!
//! # Failure policies
//! - Strict: errors reach the caller unchanged
//! - Degraded: series failures are replaced by synthetic data

mod fetcher;
mod synthetic;

pub use fetcher::ResilientFetcher;
pub use synthetic::{SyntheticSeriesGenerator, DEFAULT_BASE_PRICE, MAX_SYNTHETIC_DAYS};

/// How a call site treats upstream failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Propagate the error
    Strict,
    /// Substitute placeholder data and never fail
    Degraded,
}
