//! Shared Store Handle
//!
//! Clonable, thread-safe handle over an [`ExpiringStore`] with an explicit
//! teardown path.
//!
//! An owned `ExpiringStore` needs no destroy method: dropping it releases
//! every entry, and the borrow checker rules out use-after-drop. The shared
//! handle exists for the case where clones are held by many tasks and one
//! of them decides the store's lifetime; after [`destroy`](SharedStore::destroy)
//! every clone observes [`StoreError::Destroyed`] instead of stale data.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::info;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::store::{ExpiringStore, StoreStats};

// == Shared Store ==
/// Thread-safe shared handle to an expiring store.
///
/// Cheap to clone; all clones refer to the same store. Operations on the
/// same key are linearizable: every mutating path, including lazy
/// reclamation inside reads and the background sweep, takes the write lock.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<Option<ExpiringStore>>>,
}

impl SharedStore {
    // == Constructor ==
    /// Wraps an owned store in a shared handle.
    pub fn new(store: ExpiringStore) -> Self {
        info!("Shared store created");
        Self {
            inner: Arc::new(RwLock::new(Some(store))),
        }
    }

    /// Creates a shared store from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ExpiringStore::new(config.max_value_len))
    }

    // == Insert ==
    /// Stores a key-value pair expiring `ttl` from now, replacing any
    /// existing entry for the key.
    pub async fn insert(&self, key: String, value: String, ttl: Duration) -> Result<()> {
        let mut guard = self.inner.write().await;
        let store = guard.as_mut().ok_or(StoreError::Destroyed)?;
        store.insert(key, value, ttl)
    }

    // == Try Get ==
    /// Retrieves the value for a key.
    ///
    /// `Ok(None)` means the key is absent or expired; `Err` is never a miss.
    pub async fn try_get(&self, key: &str) -> Result<Option<String>> {
        let mut guard = self.inner.write().await;
        let store = guard.as_mut().ok_or(StoreError::Destroyed)?;
        Ok(store.try_get(key))
    }

    // == Remove ==
    /// Removes an entry by key. Idempotent.
    pub async fn remove(&self, key: &str) -> Result<()> {
        let mut guard = self.inner.write().await;
        let store = guard.as_mut().ok_or(StoreError::Destroyed)?;
        store.remove(key);
        Ok(())
    }

    // == Contains Key ==
    /// Checks whether a key is present and unexpired.
    pub async fn contains_key(&self, key: &str) -> Result<bool> {
        let mut guard = self.inner.write().await;
        let store = guard.as_mut().ok_or(StoreError::Destroyed)?;
        Ok(store.contains_key(key))
    }

    // == Cleanup Expired ==
    /// Removes all expired entries; returns the number removed.
    pub async fn cleanup_expired(&self) -> Result<usize> {
        let mut guard = self.inner.write().await;
        let store = guard.as_mut().ok_or(StoreError::Destroyed)?;
        Ok(store.cleanup_expired())
    }

    // == Stats ==
    /// Returns a snapshot of current store statistics.
    pub async fn stats(&self) -> Result<StoreStats> {
        let guard = self.inner.read().await;
        let store = guard.as_ref().ok_or(StoreError::Destroyed)?;
        Ok(store.stats())
    }

    // == Length ==
    /// Returns the number of physically stored entries.
    pub async fn len(&self) -> Result<usize> {
        let guard = self.inner.read().await;
        let store = guard.as_ref().ok_or(StoreError::Destroyed)?;
        Ok(store.len())
    }

    // == Destroy ==
    /// Releases all entries and renders the handle (and every clone of it)
    /// unusable. Idempotent: destroying twice is a no-op.
    pub async fn destroy(&self) {
        let mut guard = self.inner.write().await;
        if let Some(store) = guard.take() {
            info!(entries = store.len(), "Shared store destroyed");
        }
    }
}
