//! Synthetic Series Module
//!
//! Placeholder price history used when the series endpoint cannot be
//! reached. The output is a multiplicative random walk, not a forecast.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::{PricePoint, Series};

/// Starting price when no real price is known
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

/// Upper bound on generated points
pub const MAX_SYNTHETIC_DAYS: u32 = 365;

/// Largest relative move between consecutive days
const MAX_DAILY_STEP: f64 = 0.01;

/// Smallest reportable price after rounding
const MIN_PRICE: f64 = 0.01;

// == Generator ==
pub struct SyntheticSeriesGenerator;

impl SyntheticSeriesGenerator {
    /// Generates `min(days, 365)` daily points ending now.
    ///
    /// `base_price` is the last known real price; `None`, non-finite or
    /// non-positive values fall back to `DEFAULT_BASE_PRICE`.
    pub fn generate(symbol: &str, days: u32, base_price: Option<f64>) -> Series {
        Self::generate_with(symbol, days, base_price, Utc::now(), &mut rand::rng())
    }

    /// Same as `generate` with an explicit end time and random source.
    pub fn generate_with<R: Rng>(
        symbol: &str,
        days: u32,
        base_price: Option<f64>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Series {
        let count = days.min(MAX_SYNTHETIC_DAYS);
        let mut price = base_price
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(DEFAULT_BASE_PRICE);

        // The walk runs on unrounded prices; only the reported values are rounded.
        let points = (0..count)
            .map(|i| {
                price *= 1.0 + rng.random_range(-MAX_DAILY_STEP..=MAX_DAILY_STEP);
                PricePoint {
                    time: now - Duration::days(i64::from(count - 1 - i)),
                    price: round_cents(price).max(MIN_PRICE),
                }
            })
            .collect();

        Series::synthetic(symbol, points)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
