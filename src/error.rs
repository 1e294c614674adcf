//! Error types for the expiring store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::adapter::CodecError;

// == Store Error Enum ==
/// Unified error type for the store and its typed adapters.
///
/// A missing or expired key is never reported through this type: lookups
/// signal absence with `Ok(None)`, so every `Err` is a real failure.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Operation invoked on a store handle after destroy()
    #[error("store has been destroyed")]
    Destroyed,

    /// Value exceeds the configured maximum length; the store is unchanged
    #[error("value length {actual} exceeds configured maximum of {limit} bytes")]
    ValueTooLarge { actual: usize, limit: usize },

    /// A key failed to encode; nothing was written
    #[error("failed to encode key: {0}")]
    EncodeKey(#[source] CodecError),

    /// A value failed to encode; nothing was written
    #[error("failed to encode value: {0}")]
    EncodeValue(#[source] CodecError),

    /// A stored value failed to decode: data-integrity error, not a miss
    #[error("failed to decode stored value: {0}")]
    Decode(#[source] CodecError),
}

// == Result Type Alias ==
/// Convenience Result type for the store.
pub type Result<T> = std::result::Result<T, StoreError>;
