//! TTL Cleanup Task
//!
//! Background task that periodically removes expired store entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::SharedStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The sweep takes the same write lock as foreground operations, so it
/// never observes or produces a half-written entry. The task exits on its
/// own once the store has been destroyed.
///
/// Lazy reclamation on the read path already guarantees expired keys are
/// reported absent; the sweep only bounds how long dead entries occupy
/// memory between reads.
///
/// # Arguments
/// * `store` - Shared store handle to sweep
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// early during shutdown.
pub fn spawn_cleanup_task(store: SharedStore, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            match store.cleanup_expired().await {
                Ok(removed) if removed > 0 => {
                    info!("TTL cleanup: removed {} expired entries", removed);
                }
                Ok(_) => {
                    debug!("TTL cleanup: no expired entries found");
                }
                Err(_) => {
                    info!("TTL cleanup task stopping: store destroyed");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ExpiringStore;

    fn shared() -> SharedStore {
        SharedStore::new(ExpiringStore::new(None))
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let store = shared();

        store
            .insert(
                "expire_soon".to_string(),
                "value".to_string(),
                Duration::from_millis(500),
            )
            .await
            .unwrap();

        let handle = spawn_cleanup_task(store.clone(), 1);

        // Wait for the entry to expire and a sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // The sweep, not a read, must have reclaimed it
        assert_eq!(store.len().await.unwrap(), 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let store = shared();

        store
            .insert(
                "long_lived".to_string(),
                "value".to_string(),
                Duration::from_secs(3600),
            )
            .await
            .unwrap();

        let handle = spawn_cleanup_task(store.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        let value = store.try_get("long_lived").await.unwrap();
        assert_eq!(value, Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_exits_after_destroy() {
        let store = shared();

        let handle = spawn_cleanup_task(store.clone(), 1);

        store.destroy().await;

        // The next sweep observes the destroyed store and exits
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(handle.is_finished(), "Task should exit once the store is destroyed");
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let store = shared();

        let handle = spawn_cleanup_task(store, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
