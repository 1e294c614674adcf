//! Expiring Store Module
//!
//! Main store engine combining HashMap storage with an expiry index and
//! lazy reclamation on the read path.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Result, StoreError};
use crate::store::entry::current_timestamp_ms;
use crate::store::{ExpiryIndex, StoreEntry, StoreStats};

// == Expiring Store ==
/// In-memory key-value store where every entry carries an absolute expiry.
///
/// Once `now >= expires_at` a key is treated as absent by every read,
/// whether or not it has been physically reclaimed yet. Reclamation happens
/// lazily when a read touches an expired key, and in bulk via
/// [`cleanup_expired`](ExpiringStore::cleanup_expired).
#[derive(Debug)]
pub struct ExpiringStore {
    /// Key-value storage
    entries: HashMap<String, StoreEntry>,
    /// Entries ordered by expiration time
    expiry: ExpiryIndex,
    /// Performance statistics
    stats: StoreStats,
    /// Maximum value length in bytes; None means unbounded
    max_value_len: Option<usize>,
}

impl ExpiringStore {
    // == Constructor ==
    /// Creates a new empty ExpiringStore.
    ///
    /// # Arguments
    /// * `max_value_len` - Optional value length ceiling in bytes. Inserting
    ///   an oversized value is an error, never a truncation.
    pub fn new(max_value_len: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            expiry: ExpiryIndex::new(),
            stats: StoreStats::new(),
            max_value_len,
        }
    }

    // == Insert ==
    /// Stores a key-value pair expiring `ttl` from now.
    ///
    /// If the key already exists, the value and expiry are both replaced.
    /// A zero TTL inserts an entry that is already expired and therefore
    /// absent to all subsequent reads.
    ///
    /// # Errors
    /// Returns [`StoreError::ValueTooLarge`] if a maximum value length is
    /// configured and exceeded; the store is left unchanged.
    pub fn insert(&mut self, key: String, value: String, ttl: Duration) -> Result<()> {
        if let Some(limit) = self.max_value_len {
            if value.len() > limit {
                return Err(StoreError::ValueTooLarge {
                    actual: value.len(),
                    limit,
                });
            }
        }

        let entry = StoreEntry::new(value, ttl);
        let expires_at = entry.expires_at;

        // Replacement drops the stale index pair so the old deadline can
        // never evict the fresh entry
        if let Some(old) = self.entries.insert(key.clone(), entry) {
            self.expiry.remove(old.expires_at, &key);
        }
        self.expiry.insert(expires_at, &key);

        self.stats.set_total_entries(self.entries.len());
        Ok(())
    }

    // == Try Get ==
    /// Retrieves the value for a key, if present and unexpired.
    ///
    /// Reads never extend an entry's TTL. An expired entry is removed
    /// before returning `None` (lazy reclamation).
    pub fn try_get(&mut self, key: &str) -> Option<String> {
        self.reclaim_if_expired(key);

        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Removes an entry by key.
    ///
    /// Idempotent: removing an absent or already-expired key is a no-op.
    pub fn remove(&mut self, key: &str) {
        if let Some(old) = self.entries.remove(key) {
            self.expiry.remove(old.expires_at, key);
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Contains Key ==
    /// Checks whether a key is present and unexpired.
    ///
    /// Follows the same reclamation discipline as [`try_get`](ExpiringStore::try_get):
    /// an expired entry is removed rather than reported present.
    pub fn contains_key(&mut self, key: &str) -> bool {
        self.reclaim_if_expired(key);

        let live = self.entries.contains_key(key);
        if live {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        live
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Driven by the expiry index, so cost is proportional to the number of
    /// expired entries. Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let expired = self.expiry.pop_expired(now);
        let count = expired.len();

        for key in expired {
            self.entries.remove(&key);
        }

        self.stats.record_expired(count as u64);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns a snapshot of current store statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of physically stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes the entry for `key` if it has expired.
    fn reclaim_if_expired(&mut self, key: &str) {
        let expired_at = match self.entries.get(key) {
            Some(entry) if entry.is_expired() => entry.expires_at,
            _ => return,
        };

        self.entries.remove(key);
        self.expiry.remove(expired_at, key);
        self.stats.record_expired(1);
        self.stats.set_total_entries(self.entries.len());
    }
}
