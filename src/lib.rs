//! Expiring Store - An in-memory key-value store with per-entry TTL
//!
//! Entries self-invalidate once their time-to-live elapses: expired keys
//! are unconditionally absent to every read, reclaimed lazily on access
//! and optionally by a background sweep. A generic [`TypedStore`] adapter
//! projects arbitrary key and value types onto the string store through
//! pluggable [`Codec`] pairs.

pub mod adapter;
pub mod config;
pub mod error;
pub mod store;
pub mod tasks;

pub use adapter::{Codec, CodecError, Primitive, TypedStore};
pub use config::Config;
pub use error::{Result, StoreError};
pub use store::{ExpiringStore, SharedStore, StoreStats};
pub use tasks::spawn_cleanup_task;
