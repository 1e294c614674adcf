//! Store Entry Module
//!
//! Defines the structure for individual store entries with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Store Entry ==
/// Represents a single store entry with value and expiry metadata.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    /// The stored value
    pub value: String,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl StoreEntry {
    // == Constructor ==
    /// Creates a new store entry expiring `ttl` from now.
    ///
    /// A zero TTL produces an entry that is expired from birth: it behaves
    /// as absent to every read without any cleanup pass having run.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Time-to-live relative to now
    pub fn new(value: String, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            inserted_at: now,
            expires_at: now.saturating_add(ttl.as_millis() as u64),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time, so the entry
    /// is dead the instant its TTL has fully elapsed.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    ///
    /// Diagnostics helper; reads never extend an entry's TTL.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = StoreEntry::new("test_value".to_string(), Duration::from_secs(10));

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at > entry.inserted_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = StoreEntry::new("test_value".to_string(), Duration::from_millis(100));

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(150));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_zero_ttl_expired_from_birth() {
        let entry = StoreEntry::new("test_value".to_string(), Duration::ZERO);

        assert!(entry.is_expired(), "Zero-TTL entry should be born expired");
        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = StoreEntry::new("test_value".to_string(), Duration::from_secs(10));

        let remaining = entry.ttl_remaining_ms();
        assert!(remaining <= 10_000);
        assert!(remaining >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = StoreEntry::new("test_value".to_string(), Duration::from_millis(50));

        sleep(Duration::from_millis(100));

        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Expires exactly at creation time
        let now = current_timestamp_ms();
        let entry = StoreEntry {
            value: "test".to_string(),
            inserted_at: now,
            expires_at: now,
        };

        // Entry should be expired when current time >= expires_at
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
