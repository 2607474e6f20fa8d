//! Cache Sweep Task
//!
//! Background task that periodically drops old cached responses, bounding
//! cache growth in long-running processes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{duration_ms, ResponseCache};

/// Spawns a task that removes entries older than `max_age` every `interval`.
///
/// Reads already evict stale entries lazily; this only reclaims entries that
/// nobody reads again. The write lock is held for the sweep itself only.
///
/// # Returns
/// A JoinHandle for the spawned task; abort it to stop sweeping.
///
/// # Example
/// ```ignore
/// let cache = client.fetcher().cache();
/// let handle = spawn_sweep_task(cache, Duration::from_secs(60), Duration::from_secs(300));
/// // At session end:
/// handle.abort();
/// ```
pub fn spawn_sweep_task(
    cache: Arc<RwLock<ResponseCache>>,
    interval: Duration,
    max_age: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            interval_ms = duration_ms(interval),
            max_age_ms = duration_ms(max_age),
            "Starting cache sweep task"
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_older_than(max_age)
            };

            if removed > 0 {
                info!("Cache sweep: removed {} old entries", removed);
            } else {
                debug!("Cache sweep: nothing to remove");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use serde_json::json;

    fn shared_cache() -> (Arc<RwLock<ResponseCache>>, ManualClock) {
        let clock = ManualClock::new(0);
        let cache = ResponseCache::with_clock(Arc::new(clock.clone()));
        (Arc::new(RwLock::new(cache)), clock)
    }

    #[tokio::test]
    async fn test_sweep_task_removes_old_entries() {
        let (cache, clock) = shared_cache();
        cache.write().await.set("old", json!(1));
        clock.advance(Duration::from_secs(600));

        let handle = spawn_sweep_task(
            cache.clone(),
            Duration::from_millis(50),
            Duration::from_secs(300),
        );

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(!cache.read().await.contains_key("old"));
        assert!(cache.read().await.stats().swept >= 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_young_entries() {
        let (cache, clock) = shared_cache();
        cache.write().await.set("young", json!(1));
        clock.advance(Duration::from_secs(10));

        let handle = spawn_sweep_task(
            cache.clone(),
            Duration::from_millis(50),
            Duration::from_secs(300),
        );

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(cache.read().await.contains_key("young"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let (cache, _clock) = shared_cache();

        let handle = spawn_sweep_task(cache, Duration::from_secs(1), Duration::from_secs(1));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
