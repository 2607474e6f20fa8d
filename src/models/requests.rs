//! Request bodies sent to the upstream API
//!
//! Defines the structure of outgoing mutation payloads.

use serde::Serialize;

/// Canonical form of a holding symbol: trimmed and upper-cased.
///
/// Every portfolio mutation sends symbols in this form so that a holding
/// saved as `btc` can be removed as `btc`.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Body of `POST /api/portfolio`, upserting one holding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingRequest {
    /// Asset symbol, e.g. `BTC`
    pub symbol: String,
    /// Quantity held
    pub qty: f64,
}

impl HoldingRequest {
    pub fn new(symbol: &str, qty: f64) -> Self {
        Self {
            symbol: normalize_symbol(symbol),
            qty,
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.symbol.is_empty() {
            return Some("Symbol cannot be empty".to_string());
        }
        if !self.qty.is_finite() {
            return Some("Quantity must be a finite number".to_string());
        }
        if self.qty < 0.0 {
            return Some("Quantity cannot be negative".to_string());
        }
        None
    }
}
