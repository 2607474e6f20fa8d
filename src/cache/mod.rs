//! Cache Module
//!
//! Short-lived in-memory storage for decoded upstream responses.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{duration_ms, Clock, ManualClock, MonotonicClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ResponseCache;
