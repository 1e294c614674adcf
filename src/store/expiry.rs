//! Expiry Index Module
//!
//! Secondary index of entries ordered by expiration time, so sweeps only
//! visit entries that have actually expired.

use std::collections::BTreeSet;

// == Expiry Index ==
/// Tracks `(expires_at, key)` pairs in expiry order.
///
/// Invariant: exactly one pair per live entry in the owning store. The
/// store removes the stale pair whenever an entry is replaced or removed,
/// so a sweep never evicts a key that was re-inserted with a later expiry.
#[derive(Debug, Default)]
pub struct ExpiryIndex {
    /// Pairs ordered by (expires_at, key)
    deadlines: BTreeSet<(u64, String)>,
}

impl ExpiryIndex {
    // == Constructor ==
    /// Creates a new empty expiry index.
    pub fn new() -> Self {
        Self {
            deadlines: BTreeSet::new(),
        }
    }

    // == Insert ==
    /// Registers a key with its expiration timestamp.
    pub fn insert(&mut self, expires_at: u64, key: &str) {
        self.deadlines.insert((expires_at, key.to_string()));
    }

    // == Remove ==
    /// Unregisters a key with the exact timestamp it was registered under.
    pub fn remove(&mut self, expires_at: u64, key: &str) {
        self.deadlines.remove(&(expires_at, key.to_string()));
    }

    // == Pop Expired ==
    /// Removes and returns all keys whose deadline is at or before `now`.
    ///
    /// Cost is proportional to the number of expired entries, not to the
    /// total number of tracked keys.
    pub fn pop_expired(&mut self, now: u64) -> Vec<String> {
        let mut expired = Vec::new();
        while let Some(pair) = self.deadlines.pop_first() {
            if pair.0 > now {
                // Not due yet; put it back and stop
                self.deadlines.insert(pair);
                break;
            }
            expired.push(pair.1);
        }
        expired
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
