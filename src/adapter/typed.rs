//! Typed Store Module
//!
//! Generic front end over a [`SharedStore`] that converts caller key and
//! value types to and from the store's string representation.
//!
//! The store only ever holds the string projection: two distinct values
//! whose codecs produce the same string are indistinguishable once stored.

use std::time::Duration;

use crate::adapter::{Codec, Primitive};
use crate::error::{Result, StoreError};
use crate::store::SharedStore;

// == Typed Store ==
/// Typed adapter over an expiring store.
///
/// Constructed with one codec per side; built-in codecs exist only for the
/// [`Primitive`] set, so composite types must supply a conversion pair up
/// front. Conversion failures are never folded into cache misses: a decode
/// failure on a stored value surfaces as [`StoreError::Decode`].
#[derive(Debug, Clone)]
pub struct TypedStore<K, V> {
    /// Underlying string store
    store: SharedStore,
    /// Key conversion pair
    keys: Codec<K>,
    /// Value conversion pair
    values: Codec<V>,
}

impl<K, V> TypedStore<K, V> {
    // == Constructor ==
    /// Creates a typed adapter from caller-supplied codecs.
    pub fn new(store: SharedStore, keys: Codec<K>, values: Codec<V>) -> Self {
        Self { store, keys, values }
    }

    // == Insert ==
    /// Stores a typed key-value pair expiring `ttl` from now.
    ///
    /// Both conversions run before the store is touched; if either fails,
    /// nothing is written.
    pub async fn insert(&self, key: &K, value: &V, ttl: Duration) -> Result<()> {
        let key = self.keys.encode(key).map_err(StoreError::EncodeKey)?;
        let value = self.values.encode(value).map_err(StoreError::EncodeValue)?;
        self.store.insert(key, value, ttl).await
    }

    // == Try Get ==
    /// Retrieves and decodes the value for a key.
    ///
    /// `Ok(None)` is a miss. A present value that fails to decode is a
    /// data-integrity error, reported as `Err`, never as a miss.
    pub async fn try_get(&self, key: &K) -> Result<Option<V>> {
        let key = self.keys.encode(key).map_err(StoreError::EncodeKey)?;
        match self.store.try_get(&key).await? {
            None => Ok(None),
            Some(text) => {
                let value = self.values.decode(&text).map_err(StoreError::Decode)?;
                Ok(Some(value))
            }
        }
    }

    // == Remove ==
    /// Removes the entry for a typed key. Idempotent.
    pub async fn remove(&self, key: &K) -> Result<()> {
        let key = self.keys.encode(key).map_err(StoreError::EncodeKey)?;
        self.store.remove(&key).await
    }

    // == Contains Key ==
    /// Checks whether a typed key is present and unexpired.
    pub async fn contains_key(&self, key: &K) -> Result<bool> {
        let key = self.keys.encode(key).map_err(StoreError::EncodeKey)?;
        self.store.contains_key(&key).await
    }
}

impl<K: Primitive + 'static, V: Primitive + 'static> TypedStore<K, V> {
    /// Creates a typed adapter using the built-in primitive codecs.
    pub fn with_primitive_codecs(store: SharedStore) -> Self {
        Self::new(store, Codec::primitive(), Codec::primitive())
    }
}
