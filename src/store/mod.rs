//! Store Module
//!
//! Provides the in-memory expiring key-value store: entries with absolute
//! expiry instants, lazy reclamation on reads, an expiry-ordered index for
//! cheap sweeps, and a clonable thread-safe handle with explicit teardown.

mod entry;
mod expiry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::StoreEntry;
pub use expiry::ExpiryIndex;
pub use shared::SharedStore;
pub use stats::StoreStats;
pub use store::ExpiringStore;
