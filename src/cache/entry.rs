//! Cache Entry Module
//!
//! Defines a stored upstream response and its age arithmetic.

use serde_json::Value;

// == Cache Entry ==
/// A decoded response body and the moment it was stored.
///
/// Entries carry no TTL of their own. Freshness is decided by whoever reads
/// them, so two callers may disagree about the same entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored JSON value
    pub value: Value,
    /// Store timestamp (clock milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `now_ms`.
    pub fn new(value: Value, now_ms: u64) -> Self {
        Self {
            value,
            stored_at: now_ms,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    ///
    /// Saturates at zero if the clock reads earlier than the stamp.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }

    // == Is Fresh ==
    /// Checks the entry against a reader-supplied TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL is still fresh.
    /// It goes stale one millisecond later.
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) <= ttl_ms
    }
}
